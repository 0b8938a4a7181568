//! The CLI interface for displaytoggle
//!
//! Use the `--help` flag to see the available options.
use core::fmt;

use color_eyre::eyre::{Result, eyre};
use displaytoggle::{DisplayController, DisplayPlacer, ToggleError, default_state_path};
use structopt::StructOpt;

/// CLI arguments
#[derive(StructOpt, Debug)]
#[structopt(
    name = "displaytoggle",
    about = "Toggles an external display on macOS using displayplacer."
)]
struct Opts {
    /// Subcommand to run
    #[structopt(subcommand)]
    cmd: SubCommands,
    /// Output debug info
    #[structopt(short, long, global = true)]
    verbose: bool,
}

/// Subcommands to select the mode of operation
#[derive(StructOpt, Debug)]
enum SubCommands {
    /// Toggles the external display between enabled and disabled
    #[structopt(alias = "t")]
    Toggle,
    /// Prints the current external display status
    #[structopt(alias = "st")]
    Status {
        /// Print the status as JSON
        #[cfg(feature = "json")]
        #[structopt(long)]
        json: bool,
    },
    /// Lists the displays reported by displayplacer
    #[structopt(alias = "ls")]
    List {
        /// Print the report as JSON
        #[cfg(feature = "json")]
        #[structopt(long)]
        json: bool,
    },
    /// Disables the external display, saving its arrangement for later
    #[structopt(alias = "off")]
    Disable,
    /// Re-enables the external display from the saved arrangement
    #[structopt(alias = "on")]
    Enable,
}

/// Entry point for `displaytoggle`.
fn main() -> Result<()> {
    let _ = color_eyre::install()?;

    let opts = Opts::from_args();

    let log_level = if opts.verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };

    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level.as_str()),
    )
    .init();

    log::debug!("Parsed Opts:\n{:#?}", opts);

    let state_path =
        default_state_path().ok_or_else(|| eyre!("Could not determine the home directory"))?;
    let controller = DisplayController::new(DisplayPlacer, state_path);

    match opts.cmd {
        SubCommands::Toggle => report(controller.toggle()),
        #[cfg(feature = "json")]
        SubCommands::Status { json: true } => {
            let status = controller.status()?;
            println!(
                "{}",
                serde_json::to_string_pretty(&displaytoggle::json::status_to_json(&status))?
            );
            Ok(())
        }
        SubCommands::Status { .. } => {
            println!("{}", controller.status()?);
            Ok(())
        }
        #[cfg(feature = "json")]
        SubCommands::List { json: true } => {
            let set = controller.list()?;
            println!(
                "{}",
                serde_json::to_string_pretty(&displaytoggle::json::report_to_json(&set))?
            );
            Ok(())
        }
        SubCommands::List { .. } => {
            println!("{}", controller.list()?);
            Ok(())
        }
        SubCommands::Disable => report(controller.disable_external()),
        SubCommands::Enable => report(controller.enable()),
    }
}

/// Prints an outcome (or a locally recovered error) as a status line.
///
/// Only a launch failure of the external tool escalates to a process-level
/// error; every other outcome exits with status 0.
fn report<T: fmt::Display>(result: std::result::Result<T, ToggleError>) -> Result<()> {
    match result {
        Ok(outcome) => println!("{}", outcome),
        Err(err @ ToggleError::Tool(_)) => return Err(err.into()),
        Err(err) => println!("{}", err),
    }

    Ok(())
}
