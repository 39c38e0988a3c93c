use crate::{
    cli::Command,
    clients::catalog_client::CatalogClient,
    error::AppResult,
    model::{Movie, UserState},
    persisters::{csv_writer::CsvWriter, user_state_file::UserStateFile},
    presenters::terminal_presenter::TerminalPresenter,
    store::{CatalogStore, RatingFilter},
};

/// A loaded catalog with the user's edits, ready to run commands against.
#[derive(Debug)]
pub struct App {
    store: CatalogStore,
    state_file: UserStateFile,
}

impl App {
    pub async fn load(catalog_source: &str, state_file: UserStateFile) -> AppResult<Self> {
        let client = CatalogClient::new()?;
        let catalog = client.load(catalog_source).await?;
        Ok(App::from_catalog(catalog, state_file))
    }

    /// Stored edits that cannot be read are reported and the app starts clean.
    pub fn from_catalog(catalog: Vec<Movie>, state_file: UserStateFile) -> Self {
        let state = match state_file.load() {
            Ok(state) => state,
            Err(e) => {
                log::error!("Error reading stored ratings, starting fresh: {}", e);
                UserState::default()
            }
        };

        App {
            store: CatalogStore::with_user_state(catalog, &state),
            state_file,
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Runs one command and returns what should be shown to the user.
    pub fn execute(&mut self, command: Command) -> AppResult<String> {
        match command {
            Command::List { search, rating } => {
                let filter = rating.map_or(RatingFilter::All, RatingFilter::Exactly);
                Ok(TerminalPresenter::render_movies(
                    &self.store.filter(&search, filter),
                ))
            }
            Command::Watch { id } => {
                let line = TerminalPresenter::render_movie(self.store.mark_watched(id)?);
                self.save()?;
                Ok(line)
            }
            Command::Unwatch { id } => {
                let line = TerminalPresenter::render_movie(self.store.mark_unwatched(id)?);
                self.save()?;
                Ok(line)
            }
            Command::Rate { id, rating } => {
                let line = TerminalPresenter::render_movie(self.store.rate(id, rating)?);
                self.save()?;
                Ok(line)
            }
            Command::Recommend => Ok(TerminalPresenter::render_recommendations(
                &self.store.recommendations(),
                self.store.get_watched().len(),
            )),
            Command::Stats => Ok(TerminalPresenter::render_stats(&self.store.stats())),
            Command::Reset => {
                self.state_file.clear()?;
                self.store.reset();
                Ok("All ratings have been reset to their original values!".to_string())
            }
            Command::Export { output } => {
                let watched = self.store.get_watched();
                CsvWriter::save_movies_to_csv(&watched, &output)?;
                Ok(format!(
                    "Exported {} watched movies to {}",
                    watched.len(),
                    output.display()
                ))
            }
        }
    }

    fn save(&self) -> AppResult<()> {
        self.state_file.save(&self.store.user_state())?;
        Ok(())
    }
}
