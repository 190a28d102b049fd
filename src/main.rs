//! calnix-validate CLI entry point
//!
//! Validates the structure, syntax, and host policies of a calnix checkout.

use calnix_validate::checks::create_all_checks;
use calnix_validate::cli::args::{Args, Command, OutputFormat};
use calnix_validate::cli::output::{format_check_list, get_formatter};
use calnix_validate::logging::init_logging;
use calnix_validate::platform::SystemRunner;
use calnix_validate::version::get_build_info;
use calnix_validate::{run_validation, ValidateError, ValidatorConfig};
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

/// The tool itself failed; distinct from "the repository has errors".
const EXIT_RUNTIME_ERROR: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level);

    match args.selected_command() {
        Command::Version => {
            println!("{}", get_build_info());
            ExitCode::SUCCESS
        }
        Command::List => {
            print!("{}", format_check_list(&create_all_checks()));
            ExitCode::SUCCESS
        }
        Command::Check => match run_checks(&args) {
            Ok(code) => ExitCode::from(code),
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(EXIT_RUNTIME_ERROR)
            }
        },
    }
}

fn run_checks(args: &Args) -> Result<u8, ValidateError> {
    let config = ValidatorConfig::from_args(args)?;
    tracing::debug!(root = %config.root.display(), "resolved repository root");

    let stdout = io::stdout();
    let color = !args.no_color && stdout.is_terminal();
    let mut out = stdout.lock();

    // JSON output must stay a single document on stdout
    let report = if args.quiet || args.format == OutputFormat::Json {
        run_validation(&config, &SystemRunner, &mut io::sink())
    } else {
        run_validation(&config, &SystemRunner, &mut out)
    };

    let formatter = get_formatter(args.format, !color, args.verbose);
    let rendered = formatter.format(&report)?;
    writeln!(out, "{}", rendered).map_err(|source| ValidateError::Io {
        context: "writing report".to_string(),
        source,
    })?;

    Ok(report.exit_code())
}
