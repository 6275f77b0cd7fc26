use super::provider::CatalogProvider;
use crate::errors::CookinError;
use crate::model::{Category, Item};
use async_trait::async_trait;

struct Entry {
    id: &'static str,
    name: &'static str,
    image: &'static str,
    tags: &'static [&'static str],
    category: &'static str,
}

const ENTRIES: &[Entry] = &[
    // Ingredients
    Entry {
        id: "tomato",
        name: "Tomate",
        image: "https://i.postimg.cc/k5tvZWNp/TOMATO-img.png",
        tags: &["fruit", "juicy", "seed", "mild", "healthy"],
        category: "ingredient",
    },
    Entry {
        id: "chicken_breast",
        name: "Poitrine de poulet",
        image: "https://i.postimg.cc/HnChcDHb/POITRINE-DE-POULET.png",
        tags: &["whitemeat", "dry", "healthy"],
        category: "ingredient",
    },
    Entry {
        id: "avocado",
        name: "Avocat",
        image: "https://i.postimg.cc/Kz6Rpsr1/AVOCADO.png",
        tags: &["fruit", "seed", "healthy"],
        category: "ingredient",
    },
    Entry {
        id: "salmon",
        name: "Saumon",
        image: "https://i.postimg.cc/RZ8GJ5Lq/SALMON.png",
        tags: &["fish", "moist", "healthy"],
        category: "ingredient",
    },
    Entry {
        id: "basil",
        name: "Basilic",
        image: "https://i.postimg.cc/xCHD0sMD/BASILIC.png",
        tags: &["herb", "aroma", "healthy"],
        category: "ingredient",
    },
    Entry {
        id: "lemon",
        name: "Citron",
        image: "https://i.postimg.cc/tRF0VmfY/LEMON.png",
        tags: &["fruit", "juicy", "acidic", "healthy", "seed"],
        category: "ingredient",
    },
    Entry {
        id: "orange",
        name: "Orange",
        image: "https://i.postimg.cc/wBKfj42s/ORANGE.png",
        tags: &["fruit", "juicy", "acidic", "sweet", "healthy", "seed"],
        category: "ingredient",
    },
    Entry {
        id: "lime",
        name: "Lime",
        image: "https://i.postimg.cc/jdxCGsrD/LIME.png",
        tags: &["fruit", "juicy", "acidic", "healthy", "seed"],
        category: "ingredient",
    },
    Entry {
        id: "mozzarella",
        name: "Mozzarella",
        image: "https://i.postimg.cc/KvbFYy09/MOZZARELLA.png",
        tags: &["cheese", "dairy", "salty", "soft"],
        category: "ingredient",
    },
    Entry {
        id: "carrot",
        name: "Carotte",
        image: "https://i.postimg.cc/8zwFtYpD/CARROT.png",
        tags: &["vegetable", "hard", "healthy"],
        category: "ingredient",
    },
    Entry {
        id: "apple",
        name: "Pomme",
        image: "https://i.postimg.cc/jdMwh9dT/APPLE.png",
        tags: &["fruit", "juicy", "hard", "sweet", "healthy"],
        category: "ingredient",
    },
    Entry {
        id: "banana",
        name: "Banane",
        image: "https://i.postimg.cc/SRWQHvg7/BANANA.png",
        tags: &["fruit", "soft", "sweet", "healthy"],
        category: "ingredient",
    },
    Entry {
        id: "greenbellpepper",
        name: "Poivron Vert",
        image: "https://i.postimg.cc/dVzCMzBg/POIVRON-VERT.png",
        tags: &["vegetable", "mild", "healthy"],
        category: "ingredient",
    },
    Entry {
        id: "redbellpepper",
        name: "Poivron Rouge",
        image: "https://i.postimg.cc/R0ZD8pSr/POIVRON-ROUGE.png",
        tags: &["vegetable", "mild", "healthy"],
        category: "ingredient",
    },
    Entry {
        id: "orangebellpepper",
        name: "Poivron Orange",
        image: "https://i.postimg.cc/jqpCSzNJ/POIVRON-ORANGE.png",
        tags: &["vegetable", "mild", "healthy"],
        category: "ingredient",
    },
    Entry {
        id: "yellowbellpepper",
        name: "Poivron Jaune",
        image: "https://i.postimg.cc/TPdzxYc4/POIVRON-JAUNE.png",
        tags: &["vegetable", "mild", "healthy"],
        category: "ingredient",
    },
    // Dishes
    Entry {
        id: "minestronesoup",
        name: "Soupe Minestrone",
        image: "https://i.postimg.cc/rpzLWwtt/SOUPE-MINESTRONE.png",
        tags: &["soup", "salty", "warm", "vegetable", "bean", "herb", "healthy"],
        category: "meal",
    },
    Entry {
        id: "shangainoodles",
        name: "Nouilles sautées à la Shanghai",
        image: "https://i.postimg.cc/5Nv54B7X/NOUILLES-SAUT-ES-A-LA-SHANGHAI.png",
        tags: &["pasta", "salty", "warm", "vegetable", "gluten", "aroma", "herb"],
        category: "meal",
    },
];

/// The catalog bundled with the app.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn items() -> Vec<Item> {
        ENTRIES
            .iter()
            .map(|entry| {
                Item::new(
                    entry.id,
                    entry.name,
                    entry.image,
                    entry.tags,
                    Category::from(entry.category.to_string()),
                )
            })
            .collect()
    }
}

#[async_trait]
impl CatalogProvider for BuiltinCatalog {
    fn name(&self) -> &str {
        "builtin"
    }

    async fn get_items(&self) -> Result<Vec<Item>, CookinError> {
        Ok(Self::items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::TagVocabulary;

    #[test]
    fn bundled_items_are_valid() {
        let catalog = Catalog::new(BuiltinCatalog::items()).unwrap();
        assert_eq!(catalog.len(), 18);
        let vocabulary = TagVocabulary::builtin();
        for item in catalog.items() {
            for tag in &item.tags {
                assert!(vocabulary.contains(tag), "{} uses unknown tag {}", item.id, tag);
            }
        }
        let meals = catalog
            .items()
            .iter()
            .filter(|item| item.category == Category::Meal)
            .count();
        assert_eq!(meals, 2);
    }
}
