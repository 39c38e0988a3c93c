use crate::model::movie::Movie;

/// An unwatched movie with the score it earned and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub movie: Movie,
    pub score: u32,
    pub reasons: Vec<String>,
}
