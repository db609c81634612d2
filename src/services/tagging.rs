use std::collections::HashSet;

use crate::{
    models::{PreferenceInput, PreferenceWeights, TagResult, TinderChoice, WeightOverrides},
    services::lookup,
};

/// Insertion-ordered tag collection that drops repeats
#[derive(Debug, Default)]
struct TagSet {
    tags: Vec<String>,
    seen: HashSet<String>,
}

impl TagSet {
    fn push(&mut self, tag: String) {
        if self.seen.insert(tag.clone()) {
            self.tags.push(tag);
        }
    }

    fn bare(&mut self, prefix: &str, value: &str) {
        self.push(format!("{}:{}", prefix, value));
    }

    fn weighted(&mut self, prefix: &str, value: &str, weight: u32) {
        self.push(format!("{}:{}:weight:{}", prefix, value, weight));
    }

    fn into_vec(self) -> Vec<String> {
        self.tags
    }
}

/// Lower-cases and trims a free-form name
pub(crate) fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Lower-cases an identifier and collapses each whitespace run into one hyphen
///
/// Leading and trailing runs are kept as hyphens, not trimmed.
pub(crate) fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut in_whitespace = false;

    for c in raw.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            slug.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }

    slug
}

/// Weight of the genre at `index`: full weight first, then one less per position, floored at 1
pub fn genre_weight(base: u32, index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base.saturating_sub(index).max(1)
}

/// Maps a preferences record to weighted tags plus summary fields
///
/// Pure and total: absent or unknown fields only shrink the output.
/// Tag groups are emitted in a fixed order (genres, mood, language, visual,
/// this-or-that, reactions) and deduplicated on first occurrence.
pub fn normalize(prefs: &PreferenceInput, overrides: &WeightOverrides) -> TagResult {
    let weights = overrides.apply();
    let resolved = prefs.resolve();
    let mut tags = TagSet::default();

    let primary_genres = add_genres(&mut tags, resolved.genres, &weights);
    let mood = resolved
        .mood
        .map(|mood| add_mood(&mut tags, mood, &primary_genres, &weights));
    let language_filter = resolved
        .language
        .map(|language| add_language(&mut tags, language, &weights));
    let era_preference = resolved
        .visual_id
        .and_then(|visual_id| add_visual(&mut tags, visual_id, &weights));
    if let Some(choice) = resolved.this_or_that {
        add_this_or_that(&mut tags, choice, &weights);
    }
    add_reactions(&mut tags, resolved.reactions, &weights);

    TagResult {
        tags: tags.into_vec(),
        primary_genres,
        mood,
        language_filter,
        era_preference,
    }
}

fn add_genres(tags: &mut TagSet, genres: &[String], weights: &PreferenceWeights) -> Vec<String> {
    let mut primary = Vec::with_capacity(genres.len());

    for (index, genre) in genres.iter().enumerate() {
        let genre = normalize_name(genre);

        if !genre.is_empty() {
            let weight = genre_weight(weights.genre, index);
            tags.push(genre.clone());
            if weight > 1 {
                tags.weighted("genre", &genre, weight);
            }
        }

        primary.push(genre);
    }

    primary
}

fn add_mood(
    tags: &mut TagSet,
    mood: &str,
    primary_genres: &[String],
    weights: &PreferenceWeights,
) -> String {
    let mood = normalize_name(mood);
    tags.bare("mood", &mood);

    if let Some(mapping) = lookup::mood(&mood) {
        for tag in mapping.tags {
            tags.push(tag.to_string());
            tags.weighted("mood-aspect", tag, weights.mood);
        }

        for related in mapping.related_genres {
            if !primary_genres.iter().any(|genre| genre == related) {
                tags.bare("mood-related-genre", related);
            }
        }
    }

    mood
}

fn add_language(tags: &mut TagSet, language: &str, weights: &PreferenceWeights) -> String {
    let language = normalize_name(language);
    tags.bare("lang", &language);
    tags.weighted("language", &language, weights.language);
    language
}

/// Returns the era of the matched visual style, if it has one
fn add_visual(tags: &mut TagSet, visual_id: &str, weights: &PreferenceWeights) -> Option<String> {
    let visual_id = slugify(visual_id);

    let Some(mapping) = lookup::find_visual(&visual_id) else {
        tags.bare("visual", &visual_id);
        return None;
    };

    if let Some(era) = mapping.era_tag {
        tags.bare("era", era);
    }

    for tag in mapping.aesthetic_tags {
        tags.bare("aesthetic", tag);
        tags.weighted("visual", tag, weights.visual);
    }

    mapping.era_tag.map(str::to_string)
}

fn add_this_or_that(tags: &mut TagSet, choice: &str, weights: &PreferenceWeights) {
    let choice = slugify(choice);

    if let Some(choice_tags) = lookup::this_or_that(&choice) {
        for tag in choice_tags {
            tags.push(tag.to_string());
            tags.weighted("preference", tag, weights.this_or_that);
        }
    }

    tags.bare("vibe", &choice);
}

fn add_reactions(tags: &mut TagSet, reactions: &[TinderChoice], weights: &PreferenceWeights) {
    for reaction in reactions.iter().filter(|r| r.liked) {
        if let Some(vibe) = reaction.vibe.as_deref().filter(|v| !v.trim().is_empty()) {
            let vibe = slugify(vibe);
            tags.bare("tinder-vibe", &vibe);
            tags.weighted("like", &vibe, weights.tinder);
        }

        if let Some(title) = reaction.title.as_deref().filter(|t| !t.trim().is_empty()) {
            tags.bare("tinder-title", &slugify(title));
        }
    }
}
