// Pipeline processing: cleaning, feature engineering, and downstream shaping

pub mod clean;
pub mod documents;
pub mod enrich;
pub mod summary;
