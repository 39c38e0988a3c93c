pub mod app;
pub mod cli;
pub mod clients;
pub mod error;
pub mod extractors;
pub mod model;
pub mod persisters;
pub mod presenters;
pub mod recommenders;
pub mod store;

use app::App;
use cli::Cli;
use error::AppResult;
use persisters::user_state_file::UserStateFile;

pub async fn run(cli: Cli) -> AppResult<()> {
    let mut app = App::load(&cli.catalog, UserStateFile::new(cli.state)).await?;

    let output = app.execute(cli.command)?;
    println!("{}", output);

    Ok(())
}
