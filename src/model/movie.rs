pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    pub director: String,
    pub year: i32,
    pub original_rating: u8,
    pub rating: u8,
    pub watched: bool,
}

impl Movie {
    /// Builds a fresh catalog entry: unwatched, rated at its baseline.
    pub fn new(id: u32, title: &str, director: &str, year: i32, original_rating: u8) -> Self {
        Movie {
            id,
            title: title.to_string(),
            director: director.to_string(),
            year,
            original_rating,
            rating: original_rating,
            watched: false,
        }
    }

    pub fn is_valid_rating(rating: u8) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&rating)
    }

    pub fn decade(&self) -> i32 {
        self.year.div_euclid(10) * 10
    }

    pub fn mark_watched(&mut self) {
        self.watched = true;
    }

    pub fn mark_unwatched(&mut self) {
        self.watched = false;
        self.rating = self.original_rating;
    }

    pub fn to_csvable_array(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.director.clone(),
            self.year.to_string(),
            self.rating.to_string(),
        ]
    }

    pub fn csv_titles() -> Vec<&'static str> {
        vec!["Title", "Directors", "Year", "Rating"]
    }
}
