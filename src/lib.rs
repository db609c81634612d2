//! Movie preference tagging service.
//!
//! Turns the choices collected by the movie-suggestion wizard into weighted tags,
//! a summary of the dominant preferences and a human-readable explanation, and
//! serves a mock recommendation screen built on top of them.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

pub use models::{PreferenceInput, TagResult, WeightOverrides};
pub use services::{explanation::explain, tagging::normalize};
