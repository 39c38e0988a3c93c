use csv::Writer;

use std::path::Path;

use crate::{error::PersistError, model::Movie};

pub struct CsvWriter {}

impl CsvWriter {
    /// Writes the movies in the Letterboxd import layout.
    pub fn save_movies_to_csv(movies: &[&Movie], path: &Path) -> Result<(), PersistError> {
        let mut wrt = Writer::from_path(path)?;
        Self::write_movies(&mut wrt, movies)?;
        log::info!("Wrote {} movies to {:?}", movies.len(), path);
        Ok(())
    }

    pub fn write_movies<W: std::io::Write>(
        wrt: &mut Writer<W>,
        movies: &[&Movie],
    ) -> Result<(), PersistError> {
        wrt.write_record(Movie::csv_titles())?;
        for movie in movies.iter() {
            wrt.write_record(movie.to_csvable_array())?;
        }

        wrt.flush().map_err(|e| PersistError::Csv(e.into()))?;
        Ok(())
    }
}
