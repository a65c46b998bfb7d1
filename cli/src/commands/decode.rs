//! Decode command implementation.

use clap::Parser;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    /// Path to the trained model file
    #[arg(short, long)]
    pub tokenizer: String,

    /// Space-separated symbol ids ("-" reads stdin)
    #[arg(short, long)]
    pub ids: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,
}

use anyhow::{Context, Result as AnyhowResult};
use bitok::Tokenizer;
use std::path::Path;

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    let tokenizer = Tokenizer::load(Path::new(&cmd.tokenizer))?;

    // Read ids (from stdin if "-")
    let raw = if cmd.ids == "-" {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        cmd.ids
    };

    let ids = raw
        .split_whitespace()
        .map(|field| {
            field
                .parse::<u32>()
                .with_context(|| format!("invalid symbol id '{}'", field))
        })
        .collect::<AnyhowResult<Vec<u32>>>()?;

    let text = tokenizer.decode(&ids);

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &text)?;
            println!("Decoded {} tokens to {}", ids.len(), path);
        }
        None => {
            println!("{}", text);
        }
    }

    Ok(())
}
