use serde::Serialize;

use super::TagResult;

/// A movie from the static recommendation catalog
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMovie {
    pub id: u32,
    pub title: &'static str,
    pub year: u16,
    pub rating: f32,
    pub genres: &'static [&'static str],
    pub language: &'static str,
    pub director: &'static str,
    pub description: &'static str,
    /// Streaming platforms carrying the title (e.g., "Netflix")
    pub available_on: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

/// Headline persona shown on the results screen
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VibeProfile {
    pub name: &'static str,
    pub theme_color: &'static str,
    pub vibe: &'static str,
}

/// Catalog movie with its resolved poster
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedMovie {
    #[serde(flatten)]
    pub movie: CatalogMovie,
    pub poster_url: String,
}

/// Everything the results screen renders for one preferences record
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub profile: VibeProfile,
    pub insight: String,
    pub explanation: String,
    pub tags: TagResult,
    pub movies: Vec<RecommendedMovie>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommended_movie_flattens_catalog_fields() {
        let movie = RecommendedMovie {
            movie: CatalogMovie {
                id: 7,
                title: "Coco",
                year: 2017,
                rating: 8.4,
                genres: &["Animation"],
                language: "English",
                director: "Lee Unkrich",
                description: "A boy journeys to the Land of the Dead.",
                available_on: &["Disney+"],
                keywords: &["family"],
            },
            poster_url: "/api/placeholder/300/450".to_string(),
        };

        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["title"], "Coco");
        assert_eq!(json["availableOn"][0], "Disney+");
        assert_eq!(json["posterUrl"], "/api/placeholder/300/450");
    }

    #[test]
    fn test_vibe_profile_serialization() {
        let profile = VibeProfile {
            name: "Cozy Dreamer",
            theme_color: "#00F5D4",
            vibe: "Warm stories.",
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(
            json,
            r##"{"name":"Cozy Dreamer","themeColor":"#00F5D4","vibe":"Warm stories."}"##
        );
    }
}
