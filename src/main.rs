//! main.rs
//! Entry point for coolmenu

use coolmenu::app::{AppState, Outcome};
use coolmenu::config::Config;
use coolmenu::core::launch::launch;
use coolmenu::core::{CandidateSource, Candidates, Origin, PathSource, Workers, terminal};
use coolmenu::error::Result;
use coolmenu::utils::cli::{CliAction, RunOptions, handle_args};
use coolmenu::utils::logging;

use std::sync::Arc;

fn main() {
    std::panic::set_hook(Box::new(|info| {
        terminal::restore_terminal();

        eprintln!("\n[coolmenu] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let options = match handle_args() {
        CliAction::Run(options) => options,
        CliAction::Exit => return,
    };

    logging::init();
    let config = Config::load();

    if let Err(e) = run(&config, options) {
        tracing::error!(error = %e, "coolmenu failed");
        eprintln!("[coolmenu] Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config, options: RunOptions) -> Result<()> {
    let source = Arc::new(PathSource::from_env(config.general().use_cache()));

    let loaded = if options.refresh {
        Candidates {
            items: source.refresh()?,
            origin: Origin::Scan,
        }
    } else {
        source.load()?
    };

    let mut app = AppState::new(config, loaded.items);
    if loaded.origin == Origin::Cache && config.general().refresh_on_start() {
        app.attach_workers(Workers::spawn(source));
        app.request_refresh();
    }

    match terminal::run_terminal(&mut app)? {
        Outcome::Confirmed(command) if options.print => {
            println!("{}", command);
            Ok(())
        }
        Outcome::Confirmed(command) => launch(&command),
        Outcome::Cancelled => {
            tracing::debug!("menu cancelled");
            Ok(())
        }
    }
}
