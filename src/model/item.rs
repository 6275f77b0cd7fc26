use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of catalog entry. Anything outside the fixed set read from a catalog
/// is kept verbatim as `Other` so loading never fails on it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Ingredient,
    Meal,
    Beverage,
    Dessert,
    Other(String),
}

impl Category {
    pub const KNOWN: [Category; 4] = [
        Category::Ingredient,
        Category::Meal,
        Category::Beverage,
        Category::Dessert,
    ];

    /// Lenient parse of the fixed enumeration, for user-facing arguments.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "ingredient" => Some(Category::Ingredient),
            "meal" => Some(Category::Meal),
            "beverage" => Some(Category::Beverage),
            "dessert" => Some(Category::Dessert),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Ingredient => "ingredient",
            Category::Meal => "meal",
            Category::Beverage => "beverage",
            Category::Dessert => "dessert",
            Category::Other(raw) => raw.as_str(),
        }
    }

}

/// Catalog values must match exactly; anything else is `Other`.
impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ingredient" => Category::Ingredient,
            "meal" => Category::Meal,
            "beverage" => Category::Beverage,
            "dessert" => Category::Dessert,
            _ => Category::Other(value),
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: Category,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        image: impl Into<String>,
        tags: &[&str],
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            category,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|own| own == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FilterState;

    #[test]
    fn unknown_category_is_kept_as_other() {
        let item: Item = serde_json::from_value(serde_json::json!({
            "id": "kombucha",
            "name": "Kombucha",
            "image": "https://example.invalid/kombucha.png",
            "category": "ferment"
        }))
        .unwrap();
        assert_eq!(item.category, Category::Other("ferment".to_string()));
        assert!(item.tags.is_empty());
    }

    #[test]
    fn category_round_trips_as_plain_string() {
        let value = serde_json::to_value(Category::Dessert).unwrap();
        assert_eq!(value, serde_json::json!("dessert"));
        assert_eq!(Category::from("meal".to_string()), Category::Meal);
    }

    #[test]
    fn catalog_categories_are_matched_exactly() {
        for raw in ["Meal", "Meal ", "MEAL"] {
            let item: Item = serde_json::from_value(serde_json::json!({
                "id": "soup",
                "name": "Soupe",
                "image": "",
                "category": raw
            }))
            .unwrap();
            assert_eq!(item.category, Category::Other(raw.to_string()));

            let meals = FilterState::new().with_categories(&[Category::Meal]);
            let catalog = [item];
            assert!(crate::engine::filter_items(&catalog, "", &meals).is_empty());
        }
        assert_eq!(Category::parse(" MEAL "), Some(Category::Meal));
    }
}
