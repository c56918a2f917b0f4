mod cli;
mod commands;

use std::error::Error;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use log::error;

use cli::Cli;

fn describe(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            if Cli::needs_full_help(err.kind()) {
                println!();
                let _ = Cli::command().print_help();
            }
            return ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(2));
        }
    };

    if let Err(err) = lib_steg::init_logging(cli.log_level(), cli.log_file.as_deref()) {
        eprintln!("error: cannot set up logging: {}", err);
        return ExitCode::FAILURE;
    }

    match commands::run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = describe(&err);
            error!("{}", message);
            eprintln!("error: {}", message);
            ExitCode::from(err.exit_code())
        }
    }
}
