pub mod explanation;
pub mod lookup;
pub mod posters;
pub mod recommendations;
pub mod tagging;
