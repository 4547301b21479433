use serde::{Deserialize, Serialize};

pub type MovieId = i64;
pub type UserId = i64;
pub type RatingValue = f64;

/// Catalog movie entry; title is normalized at load time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "movieId")]
    pub id: MovieId,
    pub title: String,
}

/// One historical rating; extra columns in the rating table are ignored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(rename = "movieId")]
    pub movie_id: MovieId,
    #[serde(rename = "rating")]
    pub value: RatingValue,
}
