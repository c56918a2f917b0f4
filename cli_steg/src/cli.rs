use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, Args, Parser, Subcommand};
use lib_steg::Normalization;
use log::LevelFilter;

const EXAMPLES: &str = "\
Examples:
  # hide text in an image
  steganography encode input.png output.png 'The quick brown fox jumps over the lazy dog.'

  # read it back
  steganography decode output.png

  For a quicker pass that only touches payload pixels, use encode-fast / decode-fast.
  Output images are always written as PNG.";

/// Hide text inside the pixels of an image
#[derive(Parser, Debug)]
#[command(name = "steganography", version, arg_required_else_help = true)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Whether a parse failure should be followed by the full help text.
    /// Help and version requests already print it themselves.
    pub fn needs_full_help(kind: ErrorKind) -> bool {
        !matches!(
            kind,
            ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        )
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Hide text, scrubbing accidental markers from the whole image
    Encode(EncodeArgs),
    /// Hide text, touching only payload pixels (a terminator bounds the decode)
    EncodeFast(EncodeArgs),
    /// Read text hidden with `encode`
    Decode(DecodeArgs),
    /// Read text hidden with `encode-fast`
    DecodeFast(DecodeArgs),
}

impl Command {
    pub fn mode(&self) -> Normalization {
        match self {
            Command::Encode(_) | Command::Decode(_) => Normalization::Full,
            Command::EncodeFast(_) | Command::DecodeFast(_) => Normalization::Partial,
        }
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Cover image
    pub input: PathBuf,
    /// Where to write the PNG carrying the text
    pub output: PathBuf,
    /// Text to hide
    pub text: String,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Image carrying hidden text
    pub input: PathBuf,
}
