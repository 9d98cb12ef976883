//! Built-in sample catalog, used when no data directory is given.

use crate::types::{Movie, MovieId, MovieStore, UserPreferences};

#[allow(clippy::too_many_arguments)]
fn movie(
    id: MovieId,
    title: &str,
    year: u16,
    director: &str,
    genres: &[&str],
    rating: f32,
    description: &str,
    watched: bool,
    user_rating: Option<u8>,
) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        year,
        director: director.to_string(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        rating,
        description: description.to_string(),
        watched,
        user_rating,
        poster: Some(format!(
            "https://via.placeholder.com/300x450?text={}",
            title.replace(' ', "+")
        )),
    }
}

/// The six-movie sample catalog
pub fn sample_movies() -> Vec<Movie> {
    vec![
        movie(
            1,
            "Inception",
            2010,
            "Christopher Nolan",
            &["Sci-Fi", "Action", "Thriller"],
            8.8,
            "A thief who steals corporate secrets through the use of dream-sharing technology \
             is given the inverse task of planting an idea into the mind of a C.E.O.",
            true,
            Some(9),
        ),
        movie(
            2,
            "The Shawshank Redemption",
            1994,
            "Frank Darabont",
            &["Drama"],
            9.3,
            "Two imprisoned men bond over a number of years, finding solace and eventual \
             redemption through acts of common decency.",
            true,
            Some(10),
        ),
        movie(
            3,
            "The Dark Knight",
            2008,
            "Christopher Nolan",
            &["Action", "Crime", "Drama"],
            9.0,
            "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, \
             Batman must accept one of the greatest psychological and physical tests of his \
             ability to fight injustice.",
            false,
            None,
        ),
        movie(
            4,
            "Pulp Fiction",
            1994,
            "Quentin Tarantino",
            &["Crime", "Drama"],
            8.9,
            "The lives of two mob hitmen, a boxer, a gangster and his wife, and a pair of diner \
             bandits intertwine in four tales of violence and redemption.",
            true,
            Some(8),
        ),
        movie(
            5,
            "The Godfather",
            1972,
            "Francis Ford Coppola",
            &["Crime", "Drama"],
            9.2,
            "The aging patriarch of an organized crime dynasty transfers control of his \
             clandestine empire to his reluctant son.",
            false,
            None,
        ),
        movie(
            6,
            "Interstellar",
            2014,
            "Christopher Nolan",
            &["Adventure", "Drama", "Sci-Fi"],
            8.6,
            "A team of explorers travel through a wormhole in space in an attempt to ensure \
             humanity's survival.",
            false,
            None,
        ),
    ]
}

/// Default preferences shipped with the sample catalog
pub fn sample_preferences() -> UserPreferences {
    UserPreferences {
        favorite_genres: vec!["Sci-Fi".into(), "Action".into(), "Drama".into()],
        favorite_directors: vec!["Christopher Nolan".into()],
        watch_later: vec![5, 6],
    }
}

impl MovieStore {
    /// A store holding the sample catalog and its default preferences
    pub fn sample() -> Self {
        let mut store = Self::new();
        for movie in sample_movies() {
            // ids in the sample are distinct
            let _ = store.insert_movie(movie);
        }
        store.preferences = sample_preferences();
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_store_is_valid() {
        let store = MovieStore::sample();
        assert_eq!(store.len(), 6);
        assert!(store.validate().is_ok());
        assert_eq!(store.fetch_movie(3).unwrap().title, "The Dark Knight");
        assert_eq!(store.fetch_preferences().watch_later, vec![5, 6]);
        assert!(store.fetch_all_movies().iter().all(|m| m.poster.is_some()));
    }
}
