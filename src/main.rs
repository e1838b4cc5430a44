use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use rhuffman::{
    bit::format_bits, build_tree, compress, decompress_with, Config, DecodeMode, EncodedData,
    HuffmanEncoder,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    // Command to execute
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path of the input file
    #[arg(short, long)]
    input: PathBuf,

    /// Path of the output file
    #[arg(short, long)]
    output: PathBuf,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tolerate leftover tree data and a message ending mid-code
    #[arg(long)]
    permissive: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compress a text file into its encoded TOML form
    Compress,
    /// Decompress an encoded TOML file back into text
    Decompress,
    /// Write the code of every symbol of a text file
    Codes,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::new(path)?,
        None => Config::default(),
    };
    if args.permissive {
        config.decode_mode = DecodeMode::Permissive;
    }

    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;

    let output = match args.command {
        Some(Commands::Compress) | None => compress(&input)
            .and_then(|data| data.to_toml())
            .context("Error during compression")?,
        Some(Commands::Decompress) => EncodedData::from_toml(&input)
            .and_then(|data| decompress_with(&data, config.decode_mode))
            .context("Error during decompression")?,
        Some(Commands::Codes) => code_table(&input)?,
    };

    fs::write(&args.output, output)
        .with_context(|| format!("cannot write {}", args.output.display()))?;
    Ok(())
}

fn code_table(text: &str) -> Result<String> {
    let tree = build_tree(text).context("Error while building the tree")?;
    let encoder = HuffmanEncoder::new(&tree);
    Ok(encoder
        .codes()
        .iter()
        .sorted()
        .map(|(symbol, bits)| format!("{:?}\t{}\n", symbol, format_bits(bits)))
        .collect())
}
