use super::filters::FilterState;
use super::item::Item;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagInfo {
    pub label: String,
    pub icon: String,
}

/// How a tag shows up on a result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TagBadge {
    Icon { tag: String, label: String, icon: String },
    Text { text: String },
}

/// Ordered tag table. Order is the legend/selector order.
#[derive(Debug, Clone, Default)]
pub struct TagVocabulary {
    entries: Vec<(String, TagInfo)>,
    index: HashMap<String, usize>,
}

const BUILTIN_TAGS: &[(&str, &str, &str)] = &[
    ("nuts", "Contient des noix", "Nuts"),
    ("creamy", "Crémeux", "Creamy"),
    ("dry", "Sec", "Dry"),
    ("seed", "Graines/noyaux", "Seed"),
    ("acidic", "Acide", "Acidic"),
    ("gluten", "Contient du gluten", "Gluten"),
    ("cheese", "Fromage", "Cheese"),
    ("warm", "Se consomme chaud", "Warm"),
    ("mild", "Doux", "Mild"),
    ("aroma", "Arôme ou odeur distincte", "Aroma"),
    ("sweet", "Sucré", "Sweet"),
    ("hot", "Piquant", "Hot"),
    ("bean", "Légumineuse", "Bean"),
    ("redmeat", "Viande rouge", "RedMeat"),
    ("bitter", "Amer", "Bitter"),
    ("whitemeat", "Viande blanche", "WhiteMeat"),
    ("fish", "Poisson", "Fish"),
    ("seafood", "Fruit de mer", "Seafood"),
    ("cold", "Se consomme froid", "Cold"),
    ("moist", "Texture humide", "Moist"),
    ("healthy", "Bon pour la santé", "Healthy"),
    ("vegetarian", "Végétarien", "Vegetarian"),
    ("juicy", "Juteux", "Juicy"),
    ("fruit", "Fruit", "Fruit"),
    ("herb", "Herbes/aromates", "Herb"),
    ("vegetable", "Légume", "Vegetable"),
    ("vegan", "Végétalien", "Vegan"),
    ("unhealthy", "Moins bon pour la santé", "Unhealthy"),
    ("spice", "Épices/assaisonnement", "Spice"),
    ("hard", "Dur", "Hard"),
    ("salty", "Salé", "Salty"),
    ("dairy", "Produit laitier", "Dairy"),
    ("soft", "Texture molle", "Soft"),
    ("soup", "Soupe", "Soup"),
    ("salad", "Salade", "Salad"),
    ("pasta", "Pâtes", "Pasta"),
    ("bread", "Pain", "Bread"),
    ("sandwich", "Sandwich", "Sandwich"),
];

static BUILTIN: Lazy<TagVocabulary> = Lazy::new(|| {
    TagVocabulary::new(BUILTIN_TAGS.iter().map(|(tag, label, icon)| {
        (
            tag.to_string(),
            TagInfo {
                label: label.to_string(),
                icon: format!("icons/{}.png", icon),
            },
        )
    }))
});

impl TagVocabulary {
    /// Later duplicates of a tag id are ignored.
    pub fn new(entries: impl IntoIterator<Item = (String, TagInfo)>) -> Self {
        let mut vocabulary = Self::default();
        for (tag, info) in entries {
            if vocabulary.index.contains_key(&tag) {
                continue;
            }
            vocabulary
                .index
                .insert(tag.clone(), vocabulary.entries.len());
            vocabulary.entries.push((tag, info));
        }
        vocabulary
    }

    pub fn builtin() -> &'static TagVocabulary {
        &BUILTIN
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, tag: &str) -> Option<&TagInfo> {
        self.index
            .get(tag)
            .and_then(|idx| self.entries.get(*idx))
            .map(|(_, info)| info)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.index.contains_key(tag)
    }

    pub fn label(&self, tag: &str) -> Option<&str> {
        self.get(tag).map(|info| info.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagInfo)> {
        self.entries.iter().map(|(tag, info)| (tag.as_str(), info))
    }

    /// Tag selections with no vocabulary entry. They are tolerated by the
    /// engine; callers only report them.
    pub fn unknown_tags(&self, filters: &FilterState) -> Vec<String> {
        filters
            .include_tags
            .iter()
            .chain(filters.exclude_tags.iter())
            .filter(|tag| !self.contains(tag))
            .cloned()
            .collect()
    }

    pub fn badge(&self, tag: &str) -> TagBadge {
        match self.get(tag) {
            Some(info) => TagBadge::Icon {
                tag: tag.to_string(),
                label: info.label.clone(),
                icon: info.icon.clone(),
            },
            None => TagBadge::Text {
                text: format!("#{}", tag),
            },
        }
    }

    pub fn badges(&self, item: &Item) -> Vec<TagBadge> {
        item.tags.iter().map(|tag| self.badge(tag)).collect()
    }
}
