use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use spell_check::cli::{Cli, Commands, clean, serve, style, test, urls};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Serve(args)) => serve::run(&args),
        Some(Commands::Test(args)) => test::run(&args),
        Some(Commands::Lint) => style::lint(),
        Some(Commands::Fmt(args)) => style::fmt(&args),
        Some(Commands::Clean) => clean::run(),
        Some(Commands::Urls(args)) => urls::run(&args),
        None => serve::run(&serve::ServeArgs::default()),
    };

    match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", format!("Error: {error:#}").red());
            ExitCode::FAILURE
        }
    }
}
