use crate::{
    model::{
        movie::{Movie, MAX_RATING},
        Recommendation,
    },
    recommenders::movie_recommender::MIN_WATCHED_FOR_RECOMMENDATIONS,
    store::CatalogStats,
};

pub const REASONS_SHOWN: usize = 2;

pub struct TerminalPresenter {}

impl TerminalPresenter {
    pub fn render_stars(rating: u8) -> String {
        (1..=MAX_RATING)
            .map(|i| if i <= rating { '★' } else { '☆' })
            .collect()
    }

    pub fn render_movie(movie: &Movie) -> String {
        let rating = if movie.watched {
            format!("{} {}/{}", Self::render_stars(movie.rating), movie.rating, MAX_RATING)
        } else {
            "not watched".to_string()
        };

        format!(
            "[{:>3}] {} ({}), dir. {} | {}",
            movie.id, movie.title, movie.year, movie.director, rating
        )
    }

    pub fn render_movies(movies: &[&Movie]) -> String {
        if movies.is_empty() {
            return "No movies found matching your criteria.".to_string();
        }

        movies
            .iter()
            .map(|movie| Self::render_movie(movie))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_stats(stats: &CatalogStats) -> String {
        format!(
            "Total movies: {}\nAverage rating: {:.1}\nRated movies: {}",
            stats.total_movies, stats.average_rating, stats.rated_movies
        )
    }

    pub fn render_recommendations(
        recommendations: &[Recommendation],
        watched_count: usize,
    ) -> String {
        if recommendations.is_empty() {
            if watched_count < MIN_WATCHED_FOR_RECOMMENDATIONS {
                return format!(
                    "Watch and rate at least {} movies to get recommendations.",
                    MIN_WATCHED_FOR_RECOMMENDATIONS
                );
            }
            return "You have watched everything in the catalog!".to_string();
        }

        recommendations
            .iter()
            .enumerate()
            .map(|(rank, rec)| {
                let header = format!(
                    "{}. {} ({}), dir. {} | score {}",
                    rank + 1,
                    rec.movie.title,
                    rec.movie.year,
                    rec.movie.director,
                    rec.score
                );
                std::iter::once(header)
                    .chain(
                        rec.reasons
                            .iter()
                            .take(REASONS_SHOWN)
                            .map(|reason| format!("   - {}", reason)),
                    )
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
