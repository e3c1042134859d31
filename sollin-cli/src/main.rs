//! CLI entry point for the sollin MST engine.
//!
//! Parses command-line arguments with clap, computes the spanning tree,
//! renders the summary to stdout, and maps errors to a failing exit code.
//! Logging is initialised first so every later step can emit `tracing` events.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use sollin_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, execute the command, render the summary, and flush the
/// output stream.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let cli_error = err.downcast_ref::<CliError>();
        let code_field = cli_error.map(|cli_error| field::display(cli_error.code()));
        let transport_code_field = cli_error
            .and_then(|cli_error| match cli_error {
                CliError::Core(core) => core.transport_code(),
                _ => None,
            })
            .map(|code| field::display(code.as_str()));

        error!(
            error = %err,
            code = code_field,
            transport_code = transport_code_field,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging [{}]: {err}", err.code());
}
