use crate::{
    model::{movie::Movie, recommendation::Recommendation},
    recommenders::taste_profile::{is_classic, is_modern, TasteProfile},
};

pub const MAX_RECOMMENDATIONS: usize = 6;
pub const MIN_WATCHED_FOR_RECOMMENDATIONS: usize = 2;

pub const DIRECTOR_MATCH_WEIGHT: u32 = 50;
pub const DECADE_MATCH_WEIGHT: u32 = 30;
pub const ACCLAIMED_WEIGHT: u32 = 40;
pub const WELL_REGARDED_WEIGHT: u32 = 20;
pub const CLOSE_YEAR_WEIGHT: u32 = 25;
pub const NEARBY_YEAR_WEIGHT: u32 = 15;
pub const CLASSIC_WEIGHT: u32 = 20;
pub const MODERN_WEIGHT: u32 = 20;

pub const FALLBACK_REASON: &str = "Based on your rating patterns";

const CLOSE_YEAR_SPAN: f64 = 5.0;
const NEARBY_YEAR_SPAN: f64 = 10.0;

/// Ranks unwatched movies against the taste shown by the watched ones.
///
/// Needs at least two watched movies and one unwatched movie, otherwise the
/// result is empty. Candidates are scored on their catalog rating only. Equal
/// scores keep the order the candidates were given in. At most
/// [`MAX_RECOMMENDATIONS`] entries are returned.
pub fn recommend(watched: &[&Movie], unwatched: &[&Movie]) -> Vec<Recommendation> {
    if watched.len() < MIN_WATCHED_FOR_RECOMMENDATIONS || unwatched.is_empty() {
        log::debug!(
            "Not enough data to recommend: {} watched, {} unwatched",
            watched.len(),
            unwatched.len()
        );
        return vec![];
    }

    let profile = match TasteProfile::from_watched(watched) {
        Some(profile) => profile,
        None => return vec![],
    };
    log::debug!("Scoring {} candidates against {:?}", unwatched.len(), profile);

    let mut scored: Vec<Recommendation> = unwatched
        .iter()
        .map(|candidate| score_candidate(&profile, candidate))
        .collect();

    // sort_by is stable, so ties stay in catalog order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(MAX_RECOMMENDATIONS);
    scored
}

fn score_candidate(profile: &TasteProfile, candidate: &Movie) -> Recommendation {
    let mut score = 0;
    let mut reasons = vec![];

    if let Some(reference) = profile.same_director_as(candidate) {
        score += DIRECTOR_MATCH_WEIGHT;
        reasons.push(format!(
            "Same director as \"{}\", which you enjoyed",
            reference.title
        ));
    }

    if profile.shares_decade_with(candidate) {
        score += DECADE_MATCH_WEIGHT;
        reasons.push(format!("From the {}s, a decade you enjoy", candidate.decade()));
    }

    if candidate.original_rating >= 4 && profile.avg_user_rating >= 4.0 {
        score += ACCLAIMED_WEIGHT;
        reasons.push("Critically acclaimed, and you rate movies highly".to_string());
    } else if candidate.original_rating >= 3 && profile.avg_user_rating >= 3.0 {
        score += WELL_REGARDED_WEIGHT;
        reasons.push("Well-regarded, in line with your ratings".to_string());
    }

    let year_distance = (f64::from(candidate.year) - profile.avg_reference_year).abs();
    if year_distance <= CLOSE_YEAR_SPAN {
        score += CLOSE_YEAR_WEIGHT;
        reasons.push(format!(
            "Released close to your favorite era (around {})",
            profile.avg_reference_year.round()
        ));
    } else if year_distance <= NEARBY_YEAR_SPAN {
        score += NEARBY_YEAR_WEIGHT;
    }

    if profile.likes_classics && is_classic(candidate) {
        score += CLASSIC_WEIGHT;
        reasons.push("A classic, like others you love".to_string());
    }

    if profile.likes_modern && is_modern(candidate) {
        score += MODERN_WEIGHT;
        reasons.push("A modern gem for your taste".to_string());
    }

    if reasons.is_empty() {
        reasons.push(FALLBACK_REASON.to_string());
    }

    Recommendation {
        movie: candidate.clone(),
        score,
        reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_SCORE: u32 = DIRECTOR_MATCH_WEIGHT
        + DECADE_MATCH_WEIGHT
        + ACCLAIMED_WEIGHT
        + CLOSE_YEAR_WEIGHT
        + CLASSIC_WEIGHT
        + MODERN_WEIGHT;

    fn watched(id: u32, title: &str, director: &str, year: i32, rating: u8) -> Movie {
        let mut movie = Movie::new(id, title, director, year, 3);
        movie.mark_watched();
        movie.rating = rating;
        movie
    }

    fn unwatched(id: u32, title: &str, director: &str, year: i32, original_rating: u8) -> Movie {
        Movie::new(id, title, director, year, original_rating)
    }

    fn refs(movies: &[Movie]) -> Vec<&Movie> {
        movies.iter().collect()
    }

    #[test]
    fn needs_two_watched_movies() {
        let history = vec![watched(1, "Halloween", "John Carpenter", 1978, 5)];
        let candidates = vec![unwatched(2, "The Fog", "John Carpenter", 1980, 4)];

        assert!(recommend(&refs(&history), &refs(&candidates)).is_empty());
    }

    #[test]
    fn needs_an_unwatched_movie() {
        let history = vec![
            watched(1, "Halloween", "John Carpenter", 1978, 5),
            watched(2, "Scream", "Wes Craven", 1996, 4),
        ];

        assert!(recommend(&refs(&history), &[]).is_empty());
    }

    #[test]
    fn recommends_sequel_by_same_director() {
        let history = vec![
            watched(1, "Halloween", "Carpenter", 1978, 5),
            watched(2, "A Nightmare on Elm Street", "Craven", 1984, 5),
        ];
        let candidates = vec![unwatched(3, "Halloween II", "Carpenter", 1981, 4)];

        let result = recommend(&refs(&history), &refs(&candidates));

        assert_eq!(result.len(), 1);
        let rec = &result[0];
        assert_eq!(rec.movie.id, 3);
        // director + 1980s (Craven) + acclaimed + within 5 years of 1981
        assert_eq!(
            rec.score,
            DIRECTOR_MATCH_WEIGHT + DECADE_MATCH_WEIGHT + ACCLAIMED_WEIGHT + CLOSE_YEAR_WEIGHT
        );
        assert!(rec.reasons[0].contains("Halloween"));
        assert!(rec.reasons.iter().any(|r| r.contains("1980s")));
        assert!(rec.reasons.iter().any(|r| r.contains("1981")));
    }

    #[test]
    fn unrelated_candidates_fall_back_and_keep_order() {
        let history = vec![
            watched(1, "Halloween", "Carpenter", 1978, 2),
            watched(2, "The Fog", "Carpenter", 1979, 1),
        ];
        let candidates = vec![
            unwatched(10, "Us", "Peele", 2019, 2),
            unwatched(11, "Get Out", "Peele", 2017, 1),
            unwatched(12, "Nope", "Peele", 2022, 2),
        ];

        let result = recommend(&refs(&history), &refs(&candidates));

        assert_eq!(
            result.iter().map(|r| r.movie.id).collect::<Vec<_>>(),
            vec![10, 11, 12]
        );
        for rec in &result {
            assert_eq!(rec.score, 0);
            assert_eq!(rec.reasons, vec![FALLBACK_REASON.to_string()]);
        }
    }

    #[test]
    fn quality_tiers_are_exclusive() {
        let high = vec![
            watched(1, "Alien", "Scott", 1979, 5),
            watched(2, "The Shining", "Kubrick", 1980, 4),
        ];
        let middling = vec![
            watched(1, "Alien", "Scott", 1979, 3),
            watched(2, "The Shining", "Kubrick", 1980, 3),
        ];
        let candidates = vec![unwatched(3, "Hereditary", "Aster", 2018, 5)];

        let acclaimed = recommend(&refs(&high), &refs(&candidates));
        assert_eq!(acclaimed[0].score, ACCLAIMED_WEIGHT);
        assert_eq!(acclaimed[0].reasons.len(), 1);
        assert!(acclaimed[0].reasons[0].contains("Critically acclaimed"));

        let regarded = recommend(&refs(&middling), &refs(&candidates));
        assert_eq!(regarded[0].score, WELL_REGARDED_WEIGHT);
        assert!(regarded[0].reasons[0].contains("Well-regarded"));
    }

    #[test]
    fn nearby_year_scores_without_a_reason() {
        let history = vec![
            watched(1, "Scream", "Craven", 1996, 1),
            watched(2, "Candyman", "Rose", 1992, 1),
        ];
        // reference year 1994, candidate 8 years later, different decade
        let candidates = vec![unwatched(3, "28 Days Later", "Boyle", 2002, 1)];

        let result = recommend(&refs(&history), &refs(&candidates));

        assert_eq!(result[0].score, NEARBY_YEAR_WEIGHT);
        assert_eq!(result[0].reasons, vec![FALLBACK_REASON.to_string()]);
    }

    #[test]
    fn year_proximity_tiers_include_their_bounds() {
        let history = vec![
            watched(1, "Friday the 13th", "Cunningham", 1980, 4),
            watched(2, "Misery", "Reiner", 1990, 4),
        ];
        // reference year 1985, low catalog ratings so quality never fires
        let candidates = vec![
            unwatched(3, "Tremors", "Underwood", 1990, 1),
            unwatched(4, "Se7en", "Fincher", 1995, 1),
            unwatched(5, "Scream", "Craven", 1996, 1),
            unwatched(6, "Jaws", "Spielberg", 1975, 1),
        ];

        let result = recommend(&refs(&history), &refs(&candidates));

        let scores: Vec<(u32, u32)> = result.iter().map(|r| (r.movie.id, r.score)).collect();
        assert_eq!(
            scores,
            vec![
                (3, DECADE_MATCH_WEIGHT + CLOSE_YEAR_WEIGHT),
                (4, DECADE_MATCH_WEIGHT + NEARBY_YEAR_WEIGHT),
                (5, DECADE_MATCH_WEIGHT),
                (6, NEARBY_YEAR_WEIGHT),
            ]
        );
        for rec in &result {
            let mentions_era = rec.reasons.iter().any(|r| r.contains("around 1985"));
            assert_eq!(mentions_era, rec.movie.id == 3);
        }
        assert_eq!(result[3].reasons, vec![FALLBACK_REASON.to_string()]);
    }

    #[test]
    fn classic_and_modern_boosts() {
        let history = vec![
            watched(1, "Psycho", "Hitchcock", 1960, 1),
            watched(2, "It Follows", "Mitchell", 2014, 1),
        ];
        let candidates = vec![
            unwatched(3, "Suspiria", "Argento", 1977, 1),
            unwatched(4, "The Witch", "Eggers", 2015, 1),
        ];

        let result = recommend(&refs(&history), &refs(&candidates));

        let suspiria = result.iter().find(|r| r.movie.id == 3).unwrap();
        assert!(suspiria.reasons.iter().any(|r| r.contains("classic")));
        assert!(!suspiria.reasons.iter().any(|r| r.contains("modern gem")));

        let witch = result.iter().find(|r| r.movie.id == 4).unwrap();
        assert!(witch.reasons.iter().any(|r| r.contains("modern gem")));
        assert!(witch.reasons.iter().any(|r| r.contains("2010s")));
    }

    #[test]
    fn caps_results_sorted_by_score() {
        let history = vec![
            watched(1, "Halloween", "Carpenter", 1978, 5),
            watched(2, "The Thing", "Carpenter", 1982, 5),
        ];
        let candidates: Vec<Movie> = (0..10)
            .map(|i| {
                let director = if i % 2 == 0 { "Carpenter" } else { "Nobody" };
                unwatched(100 + i, "Candidate", director, 1960 + 5 * i as i32, (i % 5 + 1) as u8)
            })
            .collect();

        let result = recommend(&refs(&history), &refs(&candidates));

        assert_eq!(result.len(), MAX_RECOMMENDATIONS);
        for pair in result.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        for rec in &result {
            assert!(rec.score <= MAX_SCORE);
        }
    }

    #[test]
    fn candidate_user_rating_is_ignored() {
        let history = vec![
            watched(1, "Alien", "Scott", 1979, 5),
            watched(2, "Aliens", "Cameron", 1986, 5),
        ];
        let baseline = unwatched(3, "Event Horizon", "Anderson", 1997, 2);
        let mut tampered = baseline.clone();
        tampered.rating = 5;

        let a = recommend(&refs(&history), &[&baseline]);
        let b = recommend(&refs(&history), &[&tampered]);

        assert_eq!(a[0].score, b[0].score);
        assert_eq!(a[0].reasons, b[0].reasons);
    }

    #[test]
    fn same_input_same_output() {
        let history = vec![
            watched(1, "Halloween", "Carpenter", 1978, 5),
            watched(2, "Scream", "Craven", 1996, 4),
        ];
        let candidates = vec![
            unwatched(3, "The Fog", "Carpenter", 1980, 3),
            unwatched(4, "Scream 2", "Craven", 1997, 3),
        ];

        let first = recommend(&refs(&history), &refs(&candidates));
        let second = recommend(&refs(&history), &refs(&candidates));

        assert_eq!(first, second);
    }
}
