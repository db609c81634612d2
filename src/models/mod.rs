pub mod movie;
pub mod preferences;
pub mod tags;

pub use movie::{CatalogMovie, Recommendation, RecommendedMovie, VibeProfile};
pub use preferences::{
    OneOrMany, PreferenceInput, PreferencesRequest, ResolvedPreferences, ThisOrThatChoice,
    TinderChoice, VisualChoice,
};
pub use tags::{PreferenceWeights, TagResult, WeightOverrides};
