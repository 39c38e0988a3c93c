use serde::Deserialize;

use std::collections::HashSet;

use crate::{error::CatalogError, model::Movie};

/// One entry of the catalog file. Its `rating` is the baseline rating.
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: u32,
    title: String,
    director: String,
    year: i32,
    rating: u8,
}

#[derive(Debug)]
pub struct CatalogExtractor {}

impl CatalogExtractor {
    pub fn extract_movies(catalog_json: &str) -> Result<Vec<Movie>, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(catalog_json)?;

        let mut seen_ids = HashSet::new();
        let mut movies = Vec::with_capacity(entries.len());
        for entry in entries {
            if !seen_ids.insert(entry.id) {
                return Err(CatalogError::DuplicateId(entry.id));
            }
            if !Movie::is_valid_rating(entry.rating) {
                return Err(CatalogError::InvalidRating {
                    id: entry.id,
                    rating: entry.rating,
                });
            }
            if entry.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(entry.id));
            }

            movies.push(Movie::new(
                entry.id,
                entry.title.trim(),
                entry.director.trim(),
                entry.year,
                entry.rating,
            ));
        }

        log::debug!("Extracted {} movies from catalog", movies.len());
        Ok(movies)
    }
}
