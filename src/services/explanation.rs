use crate::{models::PreferenceInput, services::lookup};

const FALLBACK: &str = "matches your preferences";

/// Builds a short "because ..." fragment describing why a match fits the preferences
///
/// Reads the raw preferences rather than the normalized tags. Clauses come in a fixed
/// order (genres, mood, visual style, this-or-that) and absent sources are skipped.
pub fn explain(prefs: &PreferenceInput) -> String {
    let resolved = prefs.resolve();
    let mut clauses = Vec::new();

    if let Some(clause) = genre_clause(resolved.genres) {
        clauses.push(clause);
    }

    if let Some(mood) = resolved.mood {
        clauses.push(format!("matches your {} mood", mood_descriptor(mood)));
    }

    // Direct key lookup only; unlike tag mapping the id is not slugified
    if let Some(tag) = resolved
        .visual_id
        .and_then(lookup::visual_by_key)
        .and_then(|visual| visual.aesthetic_tags.first())
    {
        clauses.push(format!("has a {} visual style", tag));
    }

    if let Some(choice) = resolved.this_or_that {
        clauses.push(format!("offers a {} experience", choice.to_lowercase()));
    }

    match clauses.split_last() {
        None => FALLBACK.to_string(),
        Some((only, [])) => format!("because {}", only),
        Some((last, rest)) => format!("because {} and {}", rest.join(", "), last),
    }
}

/// Blank entries are skipped, matching the tag mapper
fn genre_clause(genres: &[String]) -> Option<String> {
    let genres: Vec<&str> = genres
        .iter()
        .map(String::as_str)
        .filter(|genre| !genre.trim().is_empty())
        .collect();

    match genres.as_slice() {
        [] => None,
        [genre] => Some(format!("it's a {} film", genre)),
        [first, second] => Some(format!("it combines {} and {} elements", first, second)),
        [rest @ .., last] => Some(format!(
            "it blends {}, and {} genres",
            rest.join(", "),
            last
        )),
    }
}

/// First descriptive tag of a known mood, else the mood as given
fn mood_descriptor(mood: &str) -> &str {
    let mood = mood.trim();
    lookup::mood(&mood.to_lowercase())
        .and_then(|mapping| mapping.tags.first().copied())
        .unwrap_or(mood)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ThisOrThatChoice, VisualChoice};

    fn genres(values: &[&str]) -> PreferenceInput {
        PreferenceInput {
            genres: Some(values.iter().map(|v| v.to_string()).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_fields() {
        assert_eq!(explain(&PreferenceInput::default()), "matches your preferences");
    }

    #[test]
    fn test_single_genre() {
        assert_eq!(explain(&genres(&["action"])), "because it's a action film");
    }

    #[test]
    fn test_two_genres() {
        assert_eq!(
            explain(&genres(&["action", "comedy"])),
            "because it combines action and comedy elements"
        );
    }

    #[test]
    fn test_three_genres() {
        assert_eq!(
            explain(&genres(&["action", "comedy", "drama"])),
            "because it blends action, comedy, and drama genres"
        );
    }

    #[test]
    fn test_four_genres() {
        assert_eq!(
            explain(&genres(&["action", "comedy", "drama", "horror"])),
            "because it blends action, comedy, drama, and horror genres"
        );
    }

    #[test]
    fn test_genre_and_mood() {
        let prefs = PreferenceInput {
            mood: Some("chill".to_string()),
            ..genres(&["action"])
        };
        assert_eq!(
            explain(&prefs),
            "because it's a action film and matches your relaxed mood"
        );
    }

    #[test]
    fn test_mood_lookup_ignores_case() {
        let prefs = PreferenceInput {
            moods: Some(vec!["Excited".to_string()]),
            ..Default::default()
        };
        assert_eq!(explain(&prefs), "because matches your high-energy mood");
    }

    #[test]
    fn test_unknown_mood_uses_raw_value() {
        let prefs = PreferenceInput {
            mood: Some("grumpy".to_string()),
            ..Default::default()
        };
        assert_eq!(explain(&prefs), "because matches your grumpy mood");
    }

    #[test]
    fn test_all_clauses() {
        let prefs = PreferenceInput {
            mood: Some("sad".to_string()),
            visual_choice: Some(VisualChoice::Card {
                id: "retro-action".to_string(),
                label: Some("Retro Action".to_string()),
            }),
            this_or_that: Some(ThisOrThatChoice {
                id: Some(2),
                choice: Some("Slow Burn".to_string()),
            }),
            ..genres(&["thriller", "horror"])
        };
        assert_eq!(
            explain(&prefs),
            "because it combines thriller and horror elements, matches your emotional mood, \
             has a nostalgic visual style and offers a slow burn experience"
        );
    }

    #[test]
    fn test_visual_needs_exact_key() {
        let prefs = PreferenceInput {
            visual_choice: Some(VisualChoice::Id("Epic Space".to_string())),
            ..Default::default()
        };
        assert_eq!(explain(&prefs), "matches your preferences");

        let prefs = PreferenceInput {
            visual_choice: Some(VisualChoice::Id("epic-space".to_string())),
            ..Default::default()
        };
        assert_eq!(explain(&prefs), "because has a space visual style");
    }

    #[test]
    fn test_this_or_that_uses_raw_choice() {
        let prefs = PreferenceInput {
            this_or_that: Some(ThisOrThatChoice {
                id: Some(13),
                choice: Some("Vibrant Palette".to_string()),
            }),
            ..Default::default()
        };
        assert_eq!(explain(&prefs), "because offers a vibrant palette experience");
    }

    #[test]
    fn test_blank_genres_are_skipped() {
        assert_eq!(
            explain(&genres(&["action", "  "])),
            "because it's a action film"
        );
        assert_eq!(explain(&genres(&["", " "])), FALLBACK);
    }
}
