use std::io::{self, BufRead};

use anyhow::Context;
use clap::Parser;

use hanyu_pinyin::{Config, HanyuPinyin, LookupTableSet, ToneMode};

/// Interactive Hanyu Pinyin converter.
#[derive(Debug, Parser)]
#[command(name = "hanyu-pinyin", about = "Convert Chinese text to Hanyu Pinyin")]
struct Args {
    /// Tone display mode: 1 = tone numbers, 2 = tone marks, 3 = no tones.
    #[arg(short, long)]
    mode: Option<i64>,

    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Text to convert. With no text, reads lines from stdin.
    text: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_toml(path)
            .map_err(|e| anyhow::anyhow!("failed to load config {}: {e}", path.display()))?,
        None => Config::default(),
    };

    let tables = match &config.hanzi_table {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read hanzi table {}", path.display()))?;
            LookupTableSet::with_hanzi_json(&json)?
        }
        None => LookupTableSet::builtin()?,
    };

    let mode = match args.mode {
        Some(value) => ToneMode::from_value(value)?,
        None => config.tone_mode()?,
    };

    let mut hp = HanyuPinyin::with_tables(tables);
    hp.set_mode(mode);

    // One-shot mode: convert the arguments and exit.
    if !args.text.is_empty() {
        hp.set_input(&args.text.join(" "));
        println!("{}", hp.render().trim_end());
        return Ok(());
    }

    println!("hanyu-pinyin - interactive converter (mode {})", mode.value());
    println!("Type Chinese text or numbered pinyin and press Enter.");
    println!("Press Ctrl+C to exit.");
    println!();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        hp.set_input(input);
        println!("  → {}", hp.render().trim_end());
    }

    Ok(())
}
