use crate::{
    error::StoreError,
    model::{Movie, MovieUserState, Recommendation, UserState},
    recommenders,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingFilter {
    All,
    Exactly(u8),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogStats {
    pub total_movies: usize,
    pub average_rating: f64,
    pub rated_movies: usize,
}

/// The movie list as the user sees it: the static catalog with their edits on top.
///
/// The pristine catalog is kept so a reset can rebuild the list from scratch.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    catalog: Vec<Movie>,
    movies: Vec<Movie>,
}

impl CatalogStore {
    pub fn new(catalog: Vec<Movie>) -> Self {
        CatalogStore {
            movies: catalog.clone(),
            catalog,
        }
    }

    pub fn with_user_state(catalog: Vec<Movie>, state: &UserState) -> Self {
        let mut store = CatalogStore::new(catalog);
        store.apply_user_state(state);
        store
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn find(&self, id: u32) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    pub fn get_watched(&self) -> Vec<&Movie> {
        self.movies.iter().filter(|movie| movie.watched).collect()
    }

    pub fn get_unwatched(&self) -> Vec<&Movie> {
        self.movies.iter().filter(|movie| !movie.watched).collect()
    }

    pub fn mark_watched(&mut self, id: u32) -> Result<&Movie, StoreError> {
        let movie = self.find_mut(id)?;
        movie.mark_watched();
        Ok(&*movie)
    }

    pub fn mark_unwatched(&mut self, id: u32) -> Result<&Movie, StoreError> {
        let movie = self.find_mut(id)?;
        movie.mark_unwatched();
        Ok(&*movie)
    }

    pub fn rate(&mut self, id: u32, rating: u8) -> Result<&Movie, StoreError> {
        if !Movie::is_valid_rating(rating) {
            return Err(StoreError::InvalidRating(rating));
        }
        let movie = self.find_mut(id)?;
        if !movie.watched {
            return Err(StoreError::NotWatched(id));
        }
        movie.rating = rating;
        Ok(&*movie)
    }

    /// Overlays stored edits. Unknown ids and out-of-range ratings are skipped.
    pub fn apply_user_state(&mut self, state: &UserState) {
        for (id, edit) in &state.movies {
            let movie = match self.movies.iter_mut().find(|movie| movie.id == *id) {
                Some(movie) => movie,
                None => {
                    log::warn!("Ignoring stored state for unknown movie {}", id);
                    continue;
                }
            };

            if !edit.watched {
                movie.mark_unwatched();
                continue;
            }

            if !Movie::is_valid_rating(edit.rating) {
                log::warn!(
                    "Ignoring stored rating {} for movie {}: out of range",
                    edit.rating,
                    id
                );
                continue;
            }

            movie.mark_watched();
            movie.rating = edit.rating;
        }
    }

    /// Snapshot of every edit worth persisting, i.e. the watched movies.
    pub fn user_state(&self) -> UserState {
        UserState {
            movies: self
                .movies
                .iter()
                .filter(|movie| movie.watched)
                .map(|movie| {
                    (
                        movie.id,
                        MovieUserState {
                            rating: movie.rating,
                            watched: movie.watched,
                        },
                    )
                })
                .collect(),
        }
    }

    pub fn reset(&mut self) {
        self.movies = self.catalog.clone();
    }

    /// Movies matching the search term (title, director or year) and the rating filter.
    pub fn filter(&self, search_term: &str, rating_filter: RatingFilter) -> Vec<&Movie> {
        let term = search_term.trim().to_lowercase();

        self.movies
            .iter()
            .filter(|movie| {
                term.is_empty()
                    || movie.title.to_lowercase().contains(&term)
                    || movie.director.to_lowercase().contains(&term)
                    || movie.year.to_string().contains(&term)
            })
            .filter(|movie| match rating_filter {
                RatingFilter::All => true,
                RatingFilter::Exactly(rating) => movie.rating == rating,
            })
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        let total_movies = self.movies.len();
        let rating_sum: u32 = self.movies.iter().map(|movie| u32::from(movie.rating)).sum();
        let average_rating = if total_movies == 0 {
            0.0
        } else {
            f64::from(rating_sum) / total_movies as f64
        };
        let rated_movies = self.movies.iter().filter(|movie| movie.watched).count();

        CatalogStats {
            total_movies,
            average_rating,
            rated_movies,
        }
    }

    pub fn recommendations(&self) -> Vec<Recommendation> {
        recommenders::recommend(&self.get_watched(), &self.get_unwatched())
    }

    fn find_mut(&mut self, id: u32) -> Result<&mut Movie, StoreError> {
        self.movies
            .iter_mut()
            .find(|movie| movie.id == id)
            .ok_or(StoreError::UnknownMovie(id))
    }
}
