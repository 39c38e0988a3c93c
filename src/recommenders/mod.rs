pub mod movie_recommender;
pub mod taste_profile;

pub use movie_recommender::recommend;
