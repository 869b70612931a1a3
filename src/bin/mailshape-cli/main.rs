mod args;
mod output;

use anyhow::{Context, Result};
use mailshape_lib::{ValidationReport, split_parts, validate_email};

use std::io::{self, BufRead};

use crate::args::{Cli, Commands, mode_from_str};

// codes de sortie : 0 OK, 2 invalids, 1 fatal
const EXIT_OK: i32 = 0;
const EXIT_INVALID: i32 = 2;

fn main() -> Result<()> {
    let cli = Cli::parse();
    #[cfg(feature = "with-tracing")]
    init_logging(cli.verbose);

    let code = run(&cli, io::stdin().lock())?;
    if code != EXIT_OK {
        std::process::exit(code);
    }
    Ok(())
}

/// Executes the parsed command line, reading addresses from `input` when
/// `--stdin` is set, and returns the process exit code.
fn run(cli: &Cli, input: impl BufRead) -> Result<i32> {
    let mut mode = cli.parsed_mode()?;
    let mut rows: Vec<ValidationReport> = Vec::new();

    if cli.stdin {
        for line in input.lines() {
            let email = line.context("read stdin")?;
            rows.push(validate_email(&email, mode));
        }
    } else {
        match &cli.cmd {
            Some(Commands::Validate {
                mode: sub_mode,
                email,
            }) => {
                if let Some(m) = sub_mode.as_deref() {
                    mode = mode_from_str(m)?; // la sous-commande a priorité
                }
                rows.push(validate_email(email, mode));
            }
            Some(Commands::Parts { email }) => {
                println!("{}", parts_lines(email)?);
                return Ok(EXIT_OK);
            }
            None => {
                Cli::clap_command().print_help()?;
                println!();
                return Ok(EXIT_OK);
            }
        }
    }

    output::write_reports(&rows, cli)?;

    if output::any_invalid(&rows) {
        Ok(EXIT_INVALID)
    } else {
        Ok(EXIT_OK)
    }
}

fn parts_lines(email: &str) -> Result<String> {
    let parts = split_parts(email)?;
    Ok(format!("local:  {}\ndomain: {}", parts.local, parts.domain))
}

#[cfg(feature = "with-tracing")]
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
