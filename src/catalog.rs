use log::error;
use serde::Deserialize;

use crate::state::filter::ALL;

const BUNDLED: &str = include_str!("../assets/catalog.json");

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Course {
    pub title: String,
    /// Comma-separated tags, e.g. `"Web Development, Design"`.
    pub category: String,
    pub description: String,
    pub instructor: String,
    pub duration: String,
    pub level: String,
    pub price: String,
    pub rating: f32,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Catalog {
    pub courses: Vec<Course>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

impl Catalog {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The catalog compiled into the binary; empty if it fails to parse.
    pub fn bundled() -> Self {
        match Self::parse(BUNDLED) {
            Ok(catalog) => catalog,
            Err(err) => {
                error!("Failed to parse course catalog: {}", err);
                Self::default()
            }
        }
    }

    /// Filter buttons: "All" followed by every course tag in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL.to_string()];
        let tags = self
            .courses
            .iter()
            .flat_map(|course| course.category.split(','))
            .map(str::trim)
            .filter(|tag| !tag.is_empty());
        for tag in tags {
            if !categories.iter().any(|known| known == tag) {
                categories.push(tag.to_string());
            }
        }
        categories
    }

    pub fn course_categories(&self) -> Vec<String> {
        self.courses.iter().map(|course| course.category.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"{
        "courses": [
            {"title": "A", "category": "Web Development, Design", "description": "",
             "instructor": "", "duration": "", "level": "", "price": "", "rating": 4.5},
            {"title": "B", "category": "Design", "description": "",
             "instructor": "", "duration": "", "level": "", "price": "", "rating": 4.0},
            {"title": "C", "category": "Marketing", "description": "",
             "instructor": "", "duration": "", "level": "", "price": "", "rating": 3.5}
        ]
    }"#;

    #[test]
    fn bundled_catalog_parses() {
        let catalog = Catalog::parse(BUNDLED).unwrap();
        assert!(!catalog.courses.is_empty());
        assert!(!catalog.features.is_empty());
        assert!(!catalog.stats.is_empty());
    }

    #[test]
    fn categories_split_tags_and_dedupe() {
        let catalog = Catalog::parse(SMALL).unwrap();
        assert_eq!(
            catalog.categories(),
            ["All", "Web Development", "Design", "Marketing"]
        );
        assert!(catalog.features.is_empty());
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        assert!(Catalog::parse("{\"courses\": 3}").is_err());
    }
}
