//! Fixed TMDB genre taxonomy used for human-readable recommendation reasons.
//!
//! Covers both the movie and TV genre lists. The table is intentionally
//! closed: ids the API introduces later resolve to "Unknown" rather than
//! failing a scoring pass.

/// TMDB genre id to display name, movie and TV taxonomies combined
const GENRES: &[(i32, &str)] = &[
    (28, "Action"),
    (12, "Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (99, "Documentary"),
    (18, "Drama"),
    (10751, "Family"),
    (14, "Fantasy"),
    (36, "History"),
    (27, "Horror"),
    (10402, "Music"),
    (9648, "Mystery"),
    (10749, "Romance"),
    (878, "Science Fiction"),
    (10770, "TV Movie"),
    (53, "Thriller"),
    (10752, "War"),
    (37, "Western"),
    (10759, "Action & Adventure"),
    (10762, "Kids"),
    (10763, "News"),
    (10764, "Reality"),
    (10765, "Sci-Fi & Fantasy"),
    (10766, "Soap"),
    (10767, "Talk"),
    (10768, "War & Politics"),
];

/// Resolves a genre id to its display name, "Unknown" for unmapped ids
pub fn genre_name(id: i32) -> &'static str {
    GENRES
        .iter()
        .find(|(genre_id, _)| *genre_id == id)
        .map_or("Unknown", |(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_name_known_movie_genres() {
        assert_eq!(genre_name(28), "Action");
        assert_eq!(genre_name(878), "Science Fiction");
        assert_eq!(genre_name(10749), "Romance");
    }

    #[test]
    fn test_genre_name_known_tv_genres() {
        assert_eq!(genre_name(10759), "Action & Adventure");
        assert_eq!(genre_name(10765), "Sci-Fi & Fantasy");
    }

    #[test]
    fn test_genre_name_unknown_id() {
        assert_eq!(genre_name(0), "Unknown");
        assert_eq!(genre_name(99999), "Unknown");
        assert_eq!(genre_name(-1), "Unknown");
    }
}
