//! News article record and fixture data

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single feed entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
}

impl Article {
    /// Create an article with a fresh random id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
        }
    }

    /// The five headlines used by the simulated feed and by previews
    pub fn fixtures() -> Vec<Article> {
        [
            "Apple Unveils New MacBook Pro with M3 Chip",
            "iOS 17 Release Date Announced by Apple",
            "Apple's Q3 2024 Earnings Exceed Expectations",
            "Apple Watch Series 9 Features Leaked",
            "Apple Expands Services with New Fitness+ Updates",
        ]
        .into_iter()
        .map(Article::new)
        .collect()
    }
}
