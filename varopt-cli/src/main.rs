mod assoc;
mod bins;
mod output;

use anyhow::Result;
use clap::Command;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "varopt";
    pub const DEFAULT_LOG_FILTER: &str = "info";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Assess variant call sets by annotation bins (ti/tv, truth-set rate) and case/control statistics.")
        .subcommand_required(true)
        .subcommand(bins::cli::create_bins_cli())
        .subcommand(assoc::cli::create_assoc_cli())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(consts::DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // ANNOTATION BINS
        //
        Some((bins::cli::BINS_CMD, matches)) => {
            bins::handlers::run_bins(matches)?;
        }

        //
        // CASE/CONTROL ASSOCIATION
        //
        Some((assoc::cli::ASSOC_CMD, matches)) => {
            assoc::handlers::run_assoc(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
