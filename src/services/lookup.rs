//! Static lookup tables shared by the tag mapper and the explanation generator.
//!
//! Built once on first use and never mutated afterwards.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Descriptive tags and related genres for one mood
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodMapping {
    pub id: &'static str,
    pub tags: &'static [&'static str],
    pub related_genres: &'static [&'static str],
}

/// Aesthetic tags and era for one visual style card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualMapping {
    pub id: &'static str,
    pub aesthetic_tags: &'static [&'static str],
    pub era_tag: Option<&'static str>,
}

static MOOD_TABLE: Lazy<HashMap<&'static str, MoodMapping>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert(
        "excited",
        MoodMapping {
            id: "excited",
            tags: &["high-energy", "fast-paced", "thrilling"],
            related_genres: &["action", "adventure", "thriller"],
        },
    );
    m.insert(
        "sad",
        MoodMapping {
            id: "sad",
            tags: &["emotional", "dramatic", "melancholic"],
            related_genres: &["drama", "romance"],
        },
    );
    m.insert(
        "inspired",
        MoodMapping {
            id: "inspired",
            tags: &["uplifting", "motivational", "thought-provoking"],
            related_genres: &["documentary", "biography", "drama"],
        },
    );
    m.insert(
        "chill",
        MoodMapping {
            id: "chill",
            tags: &["relaxed", "slow-paced", "cozy"],
            related_genres: &["comedy", "romance", "animation"],
        },
    );
    m.insert(
        "adventurous",
        MoodMapping {
            id: "adventurous",
            tags: &["epic", "discovery", "journey"],
            related_genres: &["adventure", "fantasy", "scifi"],
        },
    );
    // Display-name aliases of "sad" and "chill"
    m.insert(
        "melancholic",
        MoodMapping {
            id: "melancholic",
            tags: &["emotional", "dramatic", "melancholic"],
            related_genres: &["drama", "romance"],
        },
    );
    m.insert(
        "relaxed",
        MoodMapping {
            id: "relaxed",
            tags: &["relaxed", "slow-paced", "cozy"],
            related_genres: &["comedy", "romance", "animation"],
        },
    );

    m
});

static VISUAL_TABLE: Lazy<HashMap<&'static str, VisualMapping>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert(
        "epic-space",
        VisualMapping {
            id: "epic-space",
            aesthetic_tags: &["space", "cosmic", "grand-scale"],
            era_tag: Some("futuristic"),
        },
    );
    m.insert(
        "romantic-dream",
        VisualMapping {
            id: "romantic-dream",
            aesthetic_tags: &["dreamy", "intimate", "soft-focus"],
            era_tag: Some("timeless"),
        },
    );
    m.insert(
        "chill-vibes",
        VisualMapping {
            id: "chill-vibes",
            aesthetic_tags: &["lofi", "relaxed", "casual"],
            era_tag: Some("contemporary"),
        },
    );
    m.insert(
        "retro-action",
        VisualMapping {
            id: "retro-action",
            aesthetic_tags: &["nostalgic", "adrenaline", "classic"],
            era_tag: Some("retro"),
        },
    );
    m.insert(
        "neon-horror",
        VisualMapping {
            id: "neon-horror",
            aesthetic_tags: &["dark", "intense", "stylized"],
            era_tag: Some("modern"),
        },
    );

    m
});

static THIS_OR_THAT_TABLE: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| {
        let entries: [(&'static str, &'static [&'static str]); 10] = [
            ("story-driven", &["plot-focused", "character-development", "narrative"]),
            ("visual-spectacle", &["visually-stunning", "special-effects", "cinematography"]),
            ("slow-burn", &["methodical", "suspenseful", "atmospheric"]),
            ("fast-paced", &["energetic", "action-packed", "quick-cuts"]),
            ("feel-good", &["uplifting", "heartwarming", "positive"]),
            ("mind-bending", &["complex", "psychological", "thought-provoking"]),
            ("old-school", &["classic", "nostalgic", "traditional"]),
            ("modern-vibes", &["contemporary", "cutting-edge", "fresh"]),
            ("realistic", &["grounded", "authentic", "true-to-life"]),
            ("fantasy", &["imaginative", "magical", "otherworldly"]),
        ];
        entries.into_iter().collect()
    });

/// Looks up a mood by its normalized id
pub fn mood(id: &str) -> Option<&'static MoodMapping> {
    MOOD_TABLE.get(id)
}

/// Looks up a visual style by table key only
pub fn visual_by_key(id: &str) -> Option<&'static VisualMapping> {
    VISUAL_TABLE.get(id)
}

/// Looks up a visual style by table key, then by the entries' own ids
pub fn find_visual(id: &str) -> Option<&'static VisualMapping> {
    find_visual_in(&VISUAL_TABLE, id)
}

fn find_visual_in<'t>(
    table: &'t HashMap<&'static str, VisualMapping>,
    id: &str,
) -> Option<&'t VisualMapping> {
    table
        .get(id)
        .or_else(|| table.values().find(|visual| visual.id == id))
}

/// Descriptive tags for a normalized this-or-that choice
pub fn this_or_that(choice: &str) -> Option<&'static [&'static str]> {
    THIS_OR_THAT_TABLE.get(choice).copied()
}
