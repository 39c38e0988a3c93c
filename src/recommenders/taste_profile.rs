use crate::model::movie::Movie;

const LIKED_RATING: u8 = 4;
const CLASSIC_BEFORE_YEAR: i32 = 1980;
const MODERN_FROM_YEAR: i32 = 2010;

/// What the user's watch history says about their taste.
///
/// Built from the watched movies only. The reference set is the watched movies
/// rated 4 or 5, falling back to every watched movie when none are.
#[derive(Debug)]
pub struct TasteProfile<'a> {
    pub reference_set: Vec<&'a Movie>,
    pub avg_user_rating: f64,
    pub avg_reference_year: f64,
    pub likes_classics: bool,
    pub likes_modern: bool,
}

impl<'a> TasteProfile<'a> {
    /// Returns `None` when nothing has been watched.
    pub fn from_watched(watched: &[&'a Movie]) -> Option<Self> {
        if watched.is_empty() {
            return None;
        }

        let liked: Vec<&Movie> = watched
            .iter()
            .copied()
            .filter(|movie| movie.rating >= LIKED_RATING)
            .collect();
        let reference_set = if liked.is_empty() {
            watched.to_vec()
        } else {
            liked
        };

        let avg_user_rating = mean(watched.iter().map(|movie| f64::from(movie.rating)));
        let avg_reference_year = mean(reference_set.iter().map(|movie| f64::from(movie.year)));
        let likes_classics = reference_set.iter().any(|movie| is_classic(movie));
        let likes_modern = reference_set.iter().any(|movie| is_modern(movie));

        Some(TasteProfile {
            reference_set,
            avg_user_rating,
            avg_reference_year,
            likes_classics,
            likes_modern,
        })
    }

    /// First reference movie by the same director, compared case-insensitively.
    pub fn same_director_as(&self, candidate: &Movie) -> Option<&'a Movie> {
        let director = candidate.director.to_lowercase();
        self.reference_set
            .iter()
            .copied()
            .find(|movie| movie.director.to_lowercase() == director)
    }

    pub fn shares_decade_with(&self, candidate: &Movie) -> bool {
        let decade = candidate.decade();
        self.reference_set.iter().any(|movie| movie.decade() == decade)
    }
}

pub fn is_classic(movie: &Movie) -> bool {
    movie.year < CLASSIC_BEFORE_YEAR
}

pub fn is_modern(movie: &Movie) -> bool {
    movie.year >= MODERN_FROM_YEAR
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
