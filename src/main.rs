use clap::Parser;

use cinerate::cli::Cli;

mod logging;

#[tokio::main]
async fn main() {
    logging::setup_logging();

    if let Err(e) = cinerate::run(Cli::parse()).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
