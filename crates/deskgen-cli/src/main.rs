//! deskgen - create .desktop launchers from the command line.
//!
//! Collects the launcher fields from flags or a JSON spec file, writes the
//! entry through `deskgen-core` and reports the outcome.

mod args;
mod opener;

use anyhow::Result;
use clap::Parser;
use deskgen_core::{generate_launcher, LauncherSpec, WriteOutcome};
use tracing::{debug, warn, Level};
use tracing_subscriber::FmtSubscriber;

use crate::args::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so `--json` output on stdout stays parseable.
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    debug!(
        "Starting {} on {}",
        deskgen_core::AppConfig::APP_NAME,
        deskgen_core::platform::current_platform()
    );

    let code = run(&args)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

/// Generate the launcher and return the process exit code.
fn run(args: &Args) -> Result<i32> {
    let (spec, outcome) = match args.to_form() {
        Ok(form) => {
            let spec = form.to_spec();
            let outcome = generate_launcher(&spec, args.target_dir.as_deref());
            (Some(spec), outcome)
        }
        Err(e) => (None, WriteOutcome::from(Err(e))),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(spec.as_ref(), &outcome);
    }

    if args.open {
        if let Some(dir) = outcome.final_path().and_then(|p| p.parent()) {
            if let Err(e) = opener::open_in_file_manager(dir) {
                warn!("Could not open {}: {}", dir.display(), e);
            }
        }
    }

    Ok(outcome.exit_code())
}

fn print_outcome(spec: Option<&LauncherSpec>, outcome: &WriteOutcome) {
    match outcome {
        WriteOutcome::Success { final_path } => {
            if let Some(spec) = spec {
                println!("Launcher '{}' created.", spec.name());
            }
            println!("Location: {}", final_path.display());
            println!("It will show up in the application menu.");
        }
        WriteOutcome::Failure { .. } => {
            eprintln!("error: {}", outcome.summary());
        }
    }
}
