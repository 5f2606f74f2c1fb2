// Author: Dustin Pilgrim
// License: MIT

mod cli;
mod config;
mod logging;
mod paths;
mod pixels;
mod run;
mod script;
mod state_file;
mod surface;
mod view;

use clap::Parser;

use cli::Args;

fn main() {
    let args = Args::parse();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| paths::default_log_path("boxdraw.log"));

    // logging should never block normal usage
    if let Err(e) = logging::init_logging(&log_path, args.verbose) {
        eprintln!("boxdraw: failed to init logging: {e}");
    }

    eventline::info!("boxdraw starting");
    eventline::debug!("parsed args: {:?}", args.cmd);

    let cfg = match config::load(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eventline::error!("{e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    eventline::debug!("config: {:?}", cfg);

    if let Err(e) = run::run(args.cmd, &cfg) {
        eventline::error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
