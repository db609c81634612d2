use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::WeightOverrides;

/// Visual aesthetic picked in the "visual vibes" step
///
/// Older clients send the bare card id, newer ones send the whole card.
/// Only the id is ever used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum VisualChoice {
    /// Bare identifier (e.g., "epic-space")
    Id(String),
    /// Card record as rendered by the picker
    Card {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
}

impl VisualChoice {
    pub fn id(&self) -> &str {
        match self {
            VisualChoice::Id(id) => id,
            VisualChoice::Card { id, .. } => id,
        }
    }

    /// Interprets an arbitrary JSON value as a visual choice
    ///
    /// Returns `None` for anything that is neither a string nor a record with a string `id`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(id) => Some(VisualChoice::Id(id)),
            Value::Object(mut card) => match card.remove("id") {
                Some(Value::String(id)) => {
                    let label = match card.remove("label") {
                        Some(Value::String(label)) => Some(label),
                        _ => None,
                    };
                    Some(VisualChoice::Card { id, label })
                }
                _ => None,
            },
            _ => None,
        }
    }
}

/// Malformed visual choices are dropped instead of failing the whole record
fn lenient_visual_choice<'de, D>(deserializer: D) -> Result<Option<VisualChoice>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(VisualChoice::from_value))
}

/// Any optional field whose value has the wrong shape reads as absent
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}

/// Only a literal `true` counts as a like
fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(matches!(value, Some(Value::Bool(true))))
}

/// A bare string or a list of strings; non-string entries are dropped
fn lenient_names<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(name)) => Some(vec![name]),
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(name) => Some(name),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    };
    Ok(names)
}

/// One reaction record or a list of them; entries that are not records are dropped
fn lenient_reactions<'de, D>(
    deserializer: D,
) -> Result<Option<OneOrMany<TinderChoice>>, D::Error>
where
    D: Deserializer<'de>,
{
    let reactions = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Some(OneOrMany::Many(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        )),
        Some(item) => serde_json::from_value(item).ok().map(OneOrMany::One),
        None => None,
    };
    Ok(reactions)
}

/// Forced binary pick from the "this or that" step
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThisOrThatChoice {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub choice: Option<String>,
}

/// One swipe reaction from the quick-reactions step
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TinderChoice {
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub vibe: Option<String>,
    /// Missing or non-boolean means the reaction was not a like
    #[serde(default, deserialize_with = "lenient_flag")]
    pub liked: bool,
}

/// A field that may hold either a single record or a list of them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => std::slice::from_ref(item),
        }
    }
}

/// Raw preferences assembled by the wizard across its steps
///
/// Genres, moods and swipe reactions can each arrive under two field names;
/// use [`PreferenceInput::resolve`] instead of reading those fields directly.
/// Genre and mood lists also accept a bare string. A field of the wrong shape
/// is read as absent so the rest of the record still counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceInput {
    #[serde(
        default,
        deserialize_with = "lenient_names",
        skip_serializing_if = "Option::is_none"
    )]
    pub genres: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient_names",
        skip_serializing_if = "Option::is_none"
    )]
    pub genre: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub mood: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_names",
        skip_serializing_if = "Option::is_none"
    )]
    pub moods: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub language: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_visual_choice",
        skip_serializing_if = "Option::is_none"
    )]
    pub visual_choice: Option<VisualChoice>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub this_or_that: Option<ThisOrThatChoice>,
    #[serde(
        default,
        deserialize_with = "lenient_reactions",
        skip_serializing_if = "Option::is_none"
    )]
    pub tinder_choices: Option<OneOrMany<TinderChoice>>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub movie_tinder_choice: Option<TinderChoice>,
}

/// Canonical view over a [`PreferenceInput`]
///
/// Values are borrowed as supplied by the caller; blank scalars resolve to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPreferences<'a> {
    pub genres: &'a [String],
    pub mood: Option<&'a str>,
    pub language: Option<&'a str>,
    pub visual_id: Option<&'a str>,
    pub this_or_that: Option<&'a str>,
    pub reactions: &'a [TinderChoice],
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl PreferenceInput {
    /// Folds the alternate field names into one interpretation
    ///
    /// `genres` wins over `genre` whenever it is present (even empty), `mood` wins over
    /// the first entry of `moods`, and `tinderChoices` wins over `movieTinderChoice`.
    /// The two spellings are never merged.
    pub fn resolve(&self) -> ResolvedPreferences<'_> {
        let genres = self
            .genres
            .as_deref()
            .or(self.genre.as_deref())
            .unwrap_or(&[]);

        let mood = present(self.mood.as_deref()).or_else(|| {
            present(
                self.moods
                    .as_ref()
                    .and_then(|moods| moods.first())
                    .map(String::as_str),
            )
        });

        let reactions = match (&self.tinder_choices, &self.movie_tinder_choice) {
            (Some(choices), _) => choices.as_slice(),
            (None, Some(choice)) => std::slice::from_ref(choice),
            (None, None) => &[],
        };

        ResolvedPreferences {
            genres,
            mood,
            language: present(self.language.as_deref()),
            visual_id: present(self.visual_choice.as_ref().map(VisualChoice::id)),
            this_or_that: present(
                self.this_or_that
                    .as_ref()
                    .and_then(|t| t.choice.as_deref()),
            ),
            reactions,
        }
    }
}

/// Request body shared by the tag and recommendation endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct PreferencesRequest {
    pub preferences: PreferenceInput,
    #[serde(default)]
    pub weights: WeightOverrides,
}
