//! Book model

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Book record held by the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Book {
    /// Caller-supplied identifier, not checked for uniqueness
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Refactoring")]
    pub title: String,
    #[schema(example = "Martin Fowler")]
    pub author: String,
    /// Copies on the shelf
    #[schema(example = 2)]
    pub quantity: i64,
}

impl Book {
    pub fn new(id: &str, title: &str, author: &str, quantity: i64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            quantity,
        }
    }
}

/// Books loaded into a fresh catalog at startup
pub fn starter_catalog() -> Vec<Book> {
    vec![
        Book::new("1", "Refactoring", "Martin Fowler", 2),
        Book::new(
            "2",
            "Structure and Interpretation of Computer Programs",
            "Harold Abelson",
            5,
        ),
        Book::new("3", "Extreme Programming Explained", "Kent Beck", 8),
        Book::new("4", "System Design Interview", "Alex Xu", 1),
        Book::new("5", "Microservices Patterns", "Chris Richardson", 3),
    ]
}

/// Query string for the circulation endpoints
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CirculationQuery {
    /// Book identifier
    pub id: Option<String>,
}
