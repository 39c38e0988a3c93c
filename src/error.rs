use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Could not read catalog file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to fetch catalog from {url}: {message}")]
    Http { url: String, message: String },

    #[error("Catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate movie id {0} in catalog")]
    DuplicateId(u32),

    #[error("Movie {id} has rating {rating}, expected 1 to 5")]
    InvalidRating { id: u32, rating: u8 },

    #[error("Movie {0} has an empty title")]
    EmptyTitle(u32),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("No movie with id {0}")]
    UnknownMovie(u32),

    #[error("Movie {0} must be marked watched before it can be rated")]
    NotWatched(u32),

    #[error("Rating {0} is out of range, expected 1 to 5")]
    InvalidRating(u8),
}

#[derive(thiserror::Error, Debug)]
pub enum PersistError {
    #[error("Could not access {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Stored user state is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Error when writing CSV file: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Persist(#[from] PersistError),
}

pub type AppResult<T> = Result<T, AppError>;
