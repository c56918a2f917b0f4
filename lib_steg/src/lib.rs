pub mod channel;
pub mod constants;
pub mod image;
pub mod mode;
pub mod payload;
pub mod stego;

use log::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub use crate::image::format::{Image, Pixel};
pub use crate::image::{hide_text, read_text};
pub use crate::mode::Normalization;
pub use crate::stego::{decode_file, encode_file, StegError};

/// Sets up `env_logger` for this crate and the command-line binary.
///
/// Records go to `log_file` when given, stderr otherwise. Fails if a logger
/// is already installed.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> std::io::Result<()> {
    let mut builder = env_logger::Builder::new();

    if let Some(path) = log_file {
        let target = Box::new(File::create(path)?);
        builder.target(env_logger::Target::Pipe(target));
    } else {
        builder.target(env_logger::Target::Stderr);
    }

    builder
        .filter(Some("lib_steg"), level)
        .filter(Some("steganography"), level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::AlreadyExists, e))
}
