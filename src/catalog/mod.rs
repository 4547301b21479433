mod collection;
mod loader;
pub mod models;
mod normalization;

pub use collection::Catalog;
pub use loader::load_catalog;
pub use models::{Movie, MovieId, Rating, RatingValue, UserId};
pub use normalization::TitleNormalizer;
