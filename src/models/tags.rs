use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Importance scalar per preference source, attached to weighted tags
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceWeights {
    pub genre: u32,
    pub mood: u32,
    /// Language is treated as a hard filter downstream, so it ranks with genre
    pub language: u32,
    pub visual: u32,
    pub this_or_that: u32,
    pub tinder: u32,
}

impl Default for PreferenceWeights {
    fn default() -> Self {
        Self {
            genre: 5,
            mood: 4,
            language: 5,
            visual: 3,
            this_or_that: 4,
            tinder: 3,
        }
    }
}

/// Partial override of [`PreferenceWeights`]; unset fields keep their defaults
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeightOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub this_or_that: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tinder: Option<u32>,
}

impl WeightOverrides {
    /// Merges the overrides over the default weights
    pub fn apply(&self) -> PreferenceWeights {
        let defaults = PreferenceWeights::default();
        PreferenceWeights {
            genre: self.genre.unwrap_or(defaults.genre),
            mood: self.mood.unwrap_or(defaults.mood),
            language: self.language.unwrap_or(defaults.language),
            visual: self.visual.unwrap_or(defaults.visual),
            this_or_that: self.this_or_that.unwrap_or(defaults.this_or_that),
            tinder: self.tinder.unwrap_or(defaults.tinder),
        }
    }

    /// Rejects overrides that are explicitly set to zero
    pub fn validate(&self) -> AppResult<()> {
        let fields = [
            ("genre", self.genre),
            ("mood", self.mood),
            ("language", self.language),
            ("visual", self.visual),
            ("thisOrThat", self.this_or_that),
            ("tinder", self.tinder),
        ];

        let zeroed: Vec<&str> = fields
            .iter()
            .filter(|(_, weight)| *weight == Some(0))
            .map(|(name, _)| *name)
            .collect();

        if zeroed.is_empty() {
            Ok(())
        } else {
            Err(AppError::InvalidInput(format!(
                "Weights must be positive integers: {}",
                zeroed.join(", ")
            )))
        }
    }
}

/// Tags and summary fields derived from one preferences record
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TagResult {
    /// Deduplicated, in first-emitted order
    pub tags: Vec<String>,
    pub primary_genres: Vec<String>,
    pub mood: Option<String>,
    pub language_filter: Option<String>,
    pub era_preference: Option<String>,
}
