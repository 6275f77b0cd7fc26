use super::item::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Current include/exclude selection. An empty field constrains nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub include_ingredients: BTreeSet<String>,
    pub exclude_ingredients: BTreeSet<String>,
    pub include_tags: BTreeSet<String>,
    pub exclude_tags: BTreeSet<String>,
    pub categories: BTreeSet<Category>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    IncludeIngredients,
    ExcludeIngredients,
    IncludeTags,
    ExcludeTags,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.include_ingredients.is_empty()
            && self.exclude_ingredients.is_empty()
            && self.include_tags.is_empty()
            && self.exclude_tags.is_empty()
            && self.categories.is_empty()
    }

    pub fn selection(&self, field: FilterField) -> &BTreeSet<String> {
        match field {
            FilterField::IncludeIngredients => &self.include_ingredients,
            FilterField::ExcludeIngredients => &self.exclude_ingredients,
            FilterField::IncludeTags => &self.include_tags,
            FilterField::ExcludeTags => &self.exclude_tags,
        }
    }

    fn selection_mut(&mut self, field: FilterField) -> &mut BTreeSet<String> {
        match field {
            FilterField::IncludeIngredients => &mut self.include_ingredients,
            FilterField::ExcludeIngredients => &mut self.exclude_ingredients,
            FilterField::IncludeTags => &mut self.include_tags,
            FilterField::ExcludeTags => &mut self.exclude_tags,
        }
    }

    /// Flips `value` in `field`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, field: FilterField, value: &str) -> bool {
        let set = self.selection_mut(field);
        if set.remove(value) {
            return false;
        }
        set.insert(value.to_string());
        true
    }

    pub fn toggle_category(&mut self, category: Category) -> bool {
        if self.categories.remove(&category) {
            return false;
        }
        self.categories.insert(category);
        true
    }

    pub fn with(mut self, field: FilterField, values: &[&str]) -> Self {
        self.selection_mut(field)
            .extend(values.iter().map(|value| value.to_string()));
        self
    }

    pub fn with_categories(mut self, categories: &[Category]) -> Self {
        self.categories.extend(categories.iter().cloned());
        self
    }
}

/// Staged copy of a [`FilterState`] while the user edits it. Nothing reaches
/// the live state until [`FilterDraft::apply`]; dropping the draft cancels.
#[derive(Debug, Clone, Default)]
pub struct FilterDraft {
    staged: FilterState,
}

impl FilterDraft {
    pub fn open(current: &FilterState) -> Self {
        Self {
            staged: current.clone(),
        }
    }

    pub fn staged(&self) -> &FilterState {
        &self.staged
    }

    pub fn toggle(&mut self, field: FilterField, value: &str) -> bool {
        self.staged.toggle(field, value)
    }

    pub fn toggle_category(&mut self, category: Category) -> bool {
        self.staged.toggle_category(category)
    }

    /// Empties one field, like the per-dialog "Vider" button.
    pub fn clear_field(&mut self, field: FilterField) {
        self.staged.selection_mut(field).clear();
    }

    pub fn clear(&mut self) {
        self.staged = FilterState::default();
    }

    pub fn apply(self) -> FilterState {
        self.staged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut filters = FilterState::new();
        assert!(filters.toggle(FilterField::IncludeTags, "fruit"));
        assert!(filters.include_tags.contains("fruit"));
        assert!(!filters.toggle(FilterField::IncludeTags, "fruit"));
        assert!(filters.is_empty());
    }

    #[test]
    fn draft_edits_do_not_touch_the_source_until_applied() {
        let current = FilterState::new().with(FilterField::ExcludeTags, &["hot"]);
        let mut draft = FilterDraft::open(&current);
        draft.toggle(FilterField::ExcludeTags, "hot");
        draft.toggle(FilterField::IncludeIngredients, "Poivron");
        draft.toggle_category(Category::Meal);

        assert!(current.exclude_tags.contains("hot"));

        let applied = draft.apply();
        assert!(applied.exclude_tags.is_empty());
        assert!(applied.include_ingredients.contains("Poivron"));
        assert!(applied.categories.contains(&Category::Meal));
    }

    #[test]
    fn draft_clear_resets_every_field() {
        let current = FilterState::new()
            .with(FilterField::IncludeTags, &["fruit"])
            .with_categories(&[Category::Ingredient]);
        let mut draft = FilterDraft::open(&current);
        draft.clear_field(FilterField::IncludeTags);
        assert!(!draft.staged().categories.is_empty());
        draft.clear();
        assert!(draft.apply().is_empty());
    }

    #[test]
    fn deserializes_camel_case_with_missing_fields() {
        let filters: FilterState = serde_json::from_value(serde_json::json!({
            "includeTags": ["fruit"],
            "categories": ["ingredient"]
        }))
        .unwrap();
        assert!(filters.include_tags.contains("fruit"));
        assert!(filters.categories.contains(&Category::Ingredient));
        assert!(filters.exclude_ingredients.is_empty());
    }
}
