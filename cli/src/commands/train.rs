//! Train command implementation.

use clap::Parser;

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the training corpus (plain text)
    #[arg(short, long)]
    pub input: String,

    /// Target vocabulary size (256 byte symbols plus learned merges)
    #[arg(short, long, default_value_t = 4096)]
    pub vocab_size: usize,

    /// Where to write the trained model file
    #[arg(short, long)]
    pub output: String,

    /// Print each learned merge
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

use anyhow::Result as AnyhowResult;
use bitok::Tokenizer;
use std::path::Path;

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    let text = std::fs::read_to_string(&cmd.input)?;

    let tokenizer = Tokenizer::train(&text, cmd.vocab_size, cmd.verbose)?;
    tokenizer.save(Path::new(&cmd.output))?;

    println!(
        "Trained {} symbols from {} bytes of text, saved to {}",
        tokenizer.vocab_size(),
        text.len(),
        cmd.output
    );

    Ok(())
}
