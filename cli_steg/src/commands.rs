use lib_steg::{decode_file, encode_file, Normalization, StegError};
use log::{debug, info};
use thiserror::Error;

use crate::cli::{Command, DecodeArgs, EncodeArgs};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("no valid payload found (the image carries no text, or was encoded in the other mode)")]
    NoPayload(#[source] StegError),

    #[error("internal error, this is a bug")]
    Internal(#[source] StegError),

    #[error(transparent)]
    Failed(StegError),
}

impl From<StegError> for CliError {
    fn from(err: StegError) -> Self {
        if err.is_no_payload() {
            CliError::NoPayload(err)
        } else if err.is_internal() {
            CliError::Internal(err)
        } else {
            CliError::Failed(err)
        }
    }
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Failed(_) => 1,
            CliError::NoPayload(_) => 3,
            CliError::Internal(_) => 70,
        }
    }
}

pub fn run(command: Command) -> Result<(), CliError> {
    let mode = command.mode();
    match command {
        Command::Encode(args) | Command::EncodeFast(args) => encode(args, mode),
        Command::Decode(args) | Command::DecodeFast(args) => decode(args, mode),
    }
}

fn encode(args: EncodeArgs, mode: Normalization) -> Result<(), CliError> {
    println!("Start Encode");
    info!(
        "Encoding {} bytes from {} into {} ({} normalization)",
        args.text.len(),
        args.input.display(),
        args.output.display(),
        mode
    );

    let report = encode_file(&args.input, &args.output, &args.text, mode)?;
    debug!("{:?}", report);

    println!("Finish: {}", args.output.display());
    Ok(())
}

fn decode(args: DecodeArgs, mode: Normalization) -> Result<(), CliError> {
    info!(
        "Decoding {} ({} normalization)",
        args.input.display(),
        mode
    );
    let text = decode_file(&args.input, mode)?;
    println!("{}", text);
    Ok(())
}
