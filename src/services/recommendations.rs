use std::sync::Arc;

use rand::{seq::SliceRandom, Rng};

use crate::{
    models::{
        CatalogMovie, PreferenceInput, Recommendation, RecommendedMovie, ResolvedPreferences,
        VibeProfile, WeightOverrides,
    },
    services::{
        explanation,
        posters::{resolve_posters, PosterProvider},
        tagging,
    },
};

/// Static catalog shown on the results screen
///
/// There is no ranking: every request gets the whole catalog in shuffled order.
pub const CATALOG: [CatalogMovie; 3] = [
    CatalogMovie {
        id: 1,
        title: "Inception",
        year: 2010,
        rating: 8.8,
        genres: &["Sci-Fi", "Action", "Thriller"],
        language: "English",
        director: "Christopher Nolan",
        description: "A thief who steals corporate secrets through the use of dream-sharing \
                      technology is given the inverse task of planting an idea into the mind \
                      of a C.E.O.",
        available_on: &["Netflix", "Amazon Prime"],
        keywords: &["dreams", "mind-bending", "heist", "psychological"],
    },
    CatalogMovie {
        id: 2,
        title: "Interstellar",
        year: 2014,
        rating: 8.6,
        genres: &["Sci-Fi", "Adventure", "Drama"],
        language: "English",
        director: "Christopher Nolan",
        description: "A team of explorers travel through a wormhole in space in an attempt \
                      to ensure humanity's survival.",
        available_on: &["HBO Max", "Hulu"],
        keywords: &["space", "time", "exploration", "emotional"],
    },
    CatalogMovie {
        id: 3,
        title: "Your Name",
        year: 2016,
        rating: 8.4,
        genres: &["Animation", "Drama", "Fantasy"],
        language: "Japanese",
        director: "Makoto Shinkai",
        description: "Two strangers find themselves linked in a bizarre way. When a connection \
                      forms, will distance be the only thing to keep them apart?",
        available_on: &["Crunchyroll", "Netflix"],
        keywords: &["romance", "body-swap", "supernatural", "touching"],
    },
];

const MIND_BENDER: VibeProfile = VibeProfile {
    name: "Mind Bender",
    theme_color: "#FF2A6D",
    vibe: "You love intense, mind-twisting experiences that challenge perception.",
};

const VISUAL_VOYAGER: VibeProfile = VibeProfile {
    name: "Visual Voyager",
    theme_color: "#B14EFF",
    vibe: "Aesthetics and visual storytelling captivate you, so we found films with stunning imagery.",
};

const COZY_DREAMER: VibeProfile = VibeProfile {
    name: "Cozy Dreamer",
    theme_color: "#00F5D4",
    vibe: "Stories that evoke warm emotions and gentle reflection are your perfect match.",
};

const BALANCED_EXPLORER: VibeProfile = VibeProfile {
    name: "Balanced Explorer",
    theme_color: "#00AAFF",
    vibe: "A well-rounded movie night is in order!",
};

/// Picks the headline persona; the first matching rule wins
pub fn pick_profile(resolved: &ResolvedPreferences<'_>) -> VibeProfile {
    let liked_thriller = resolved.reactions.iter().any(|reaction| {
        reaction.liked
            && reaction
                .vibe
                .as_deref()
                .is_some_and(|vibe| vibe.to_lowercase().contains("thriller"))
    });

    if liked_thriller {
        MIND_BENDER
    } else if resolved.this_or_that == Some("Visual Spectacle") {
        VISUAL_VOYAGER
    } else if resolved
        .mood
        .is_some_and(|mood| mood.trim().eq_ignore_ascii_case("chill"))
    {
        COZY_DREAMER
    } else {
        BALANCED_EXPLORER
    }
}

/// One-line summary of the mood and genres the user picked
pub fn insight(resolved: &ResolvedPreferences<'_>) -> String {
    let mood = resolved.mood.map(str::trim).unwrap_or("balanced");
    let genres = if resolved.genres.is_empty() {
        "diverse genres".to_string()
    } else {
        resolved.genres.join(", ")
    };

    format!(
        "Your preferences indicate you enjoy {} content with a focus on {}.",
        mood, genres
    )
}

/// Builds the recommendation without posters, shuffling the catalog with `rng`
pub fn draft_recommendation<R: Rng + ?Sized>(
    prefs: &PreferenceInput,
    overrides: &WeightOverrides,
    rng: &mut R,
) -> (Recommendation, Vec<CatalogMovie>) {
    let resolved = prefs.resolve();

    let mut movies = CATALOG.to_vec();
    movies.shuffle(rng);

    let recommendation = Recommendation {
        profile: pick_profile(&resolved),
        insight: insight(&resolved),
        explanation: explanation::explain(prefs),
        tags: tagging::normalize(prefs, overrides),
        movies: Vec::new(),
    };

    (recommendation, movies)
}

/// Generates the results screen for a preferences record
///
/// The catalog is static and shuffled; tags and the explanation describe the
/// preferences but do not select or rank movies.
pub async fn get_recommendations(
    provider: Arc<dyn PosterProvider>,
    placeholder_poster_url: &str,
    prefs: &PreferenceInput,
    overrides: &WeightOverrides,
) -> Recommendation {
    let (mut recommendation, movies) =
        draft_recommendation(prefs, overrides, &mut rand::thread_rng());

    let posters = resolve_posters(provider, &movies, placeholder_poster_url).await;

    recommendation.movies = movies
        .into_iter()
        .zip(posters)
        .map(|(movie, poster_url)| RecommendedMovie { movie, poster_url })
        .collect();

    recommendation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OneOrMany, ThisOrThatChoice, TinderChoice};
    use crate::services::posters::{MockPosterProvider, PlaceholderPosterProvider};
    use rand::{rngs::StdRng, SeedableRng};

    fn liked(vibe: &str) -> TinderChoice {
        TinderChoice {
            id: Some(1),
            title: Some("Se7en".to_string()),
            vibe: Some(vibe.to_string()),
            liked: true,
        }
    }

    fn choice(text: &str) -> Option<ThisOrThatChoice> {
        Some(ThisOrThatChoice {
            id: Some(1),
            choice: Some(text.to_string()),
        })
    }

    #[test]
    fn test_default_profile() {
        let prefs = PreferenceInput::default();
        assert_eq!(pick_profile(&prefs.resolve()).name, "Balanced Explorer");
    }

    #[test]
    fn test_liked_thriller_wins() {
        let prefs = PreferenceInput {
            mood: Some("chill".to_string()),
            this_or_that: choice("Visual Spectacle"),
            tinder_choices: Some(OneOrMany::One(liked("Psychological Thriller"))),
            ..Default::default()
        };
        assert_eq!(pick_profile(&prefs.resolve()), MIND_BENDER);
    }

    #[test]
    fn test_disliked_thriller_ignored() {
        let mut reaction = liked("Thriller");
        reaction.liked = false;
        let prefs = PreferenceInput {
            movie_tinder_choice: Some(reaction),
            ..Default::default()
        };
        assert_eq!(pick_profile(&prefs.resolve()), BALANCED_EXPLORER);
    }

    #[test]
    fn test_visual_spectacle_profile() {
        let prefs = PreferenceInput {
            mood: Some("chill".to_string()),
            this_or_that: choice("Visual Spectacle"),
            ..Default::default()
        };
        assert_eq!(pick_profile(&prefs.resolve()), VISUAL_VOYAGER);
    }

    #[test]
    fn test_chill_profile() {
        let prefs = PreferenceInput {
            moods: Some(vec!["Chill".to_string()]),
            this_or_that: choice("Story-driven"),
            ..Default::default()
        };
        assert_eq!(pick_profile(&prefs.resolve()), COZY_DREAMER);
    }

    #[test]
    fn test_insight_defaults() {
        let prefs = PreferenceInput::default();
        assert_eq!(
            insight(&prefs.resolve()),
            "Your preferences indicate you enjoy balanced content with a focus on diverse genres."
        );
    }

    #[test]
    fn test_insight_with_choices() {
        let prefs = PreferenceInput {
            genre: Some(vec!["action".to_string(), "scifi".to_string()]),
            mood: Some("excited".to_string()),
            ..Default::default()
        };
        assert_eq!(
            insight(&prefs.resolve()),
            "Your preferences indicate you enjoy excited content with a focus on action, scifi."
        );
    }

    #[test]
    fn test_draft_contains_whole_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        let prefs = PreferenceInput {
            genres: Some(vec!["drama".to_string()]),
            ..Default::default()
        };
        let (recommendation, movies) =
            draft_recommendation(&prefs, &WeightOverrides::default(), &mut rng);

        let mut ids: Vec<u32> = movies.iter().map(|m| m.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(recommendation.explanation, "because it's a drama film");
        assert_eq!(recommendation.tags.primary_genres, ["drama"]);
    }

    #[test]
    fn test_draft_shuffle_is_seeded() {
        let prefs = PreferenceInput::default();
        let (_, first) = draft_recommendation(
            &prefs,
            &WeightOverrides::default(),
            &mut StdRng::seed_from_u64(42),
        );
        let (_, second) = draft_recommendation(
            &prefs,
            &WeightOverrides::default(),
            &mut StdRng::seed_from_u64(42),
        );
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_get_recommendations_attaches_posters() {
        let mut mock = MockPosterProvider::new();
        mock.expect_poster_url()
            .times(3)
            .returning(|title, _| Ok(Some(format!("https://img.test/{}.jpg", title))));

        let recommendation = get_recommendations(
            Arc::new(mock),
            "/placeholder",
            &PreferenceInput::default(),
            &WeightOverrides::default(),
        )
        .await;

        assert_eq!(recommendation.movies.len(), 3);
        for movie in &recommendation.movies {
            assert_eq!(
                movie.poster_url,
                format!("https://img.test/{}.jpg", movie.movie.title)
            );
        }
    }

    #[tokio::test]
    async fn test_get_recommendations_placeholder_posters() {
        let recommendation = get_recommendations(
            Arc::new(PlaceholderPosterProvider),
            "/placeholder",
            &PreferenceInput::default(),
            &WeightOverrides::default(),
        )
        .await;

        assert!(recommendation
            .movies
            .iter()
            .all(|movie| movie.poster_url == "/placeholder"));
        assert_eq!(recommendation.explanation, "matches your preferences");
        assert_eq!(recommendation.profile.name, "Balanced Explorer");
    }
}
