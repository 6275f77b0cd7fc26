use crate::model::{FilterState, Item};
use std::collections::BTreeSet;

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.contains(&needle.to_lowercase())
}

fn matches_search(name: &str, query: &str) -> bool {
    query.is_empty() || contains_folded(name, query)
}

fn matches_category(item: &Item, filters: &FilterState) -> bool {
    filters.categories.is_empty() || filters.categories.contains(&item.category)
}

fn matches_include_ingredients(name: &str, include: &BTreeSet<String>) -> bool {
    include.iter().all(|entry| contains_folded(name, entry))
}

fn matches_exclude_ingredients(name: &str, exclude: &BTreeSet<String>) -> bool {
    !exclude.iter().any(|entry| contains_folded(name, entry))
}

fn matches_include_tags(item: &Item, include: &BTreeSet<String>) -> bool {
    include.iter().all(|tag| item.has_tag(tag))
}

fn matches_exclude_tags(item: &Item, exclude: &BTreeSet<String>) -> bool {
    !exclude.iter().any(|tag| item.has_tag(tag))
}

/// True when `item` passes the query and every filter field. Empty fields
/// hold vacuously; exclusions win over inclusions.
pub fn matches(item: &Item, query: &str, filters: &FilterState) -> bool {
    let name = item.name.to_lowercase();
    matches_search(&name, query)
        && matches_category(item, filters)
        && matches_include_ingredients(&name, &filters.include_ingredients)
        && matches_exclude_ingredients(&name, &filters.exclude_ingredients)
        && matches_include_tags(item, &filters.include_tags)
        && matches_exclude_tags(item, &filters.exclude_tags)
}

/// Stable filter: matching items in catalog order.
pub fn filter_items<'a>(
    catalog: &'a [Item],
    query: &str,
    filters: &FilterState,
) -> Vec<&'a Item> {
    catalog
        .iter()
        .filter(|item| matches(item, query, filters))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, FilterField};

    fn names<'a>(items: &[&'a Item]) -> Vec<&'a str> {
        items.iter().map(|item| item.name.as_str()).collect()
    }

    fn fixture() -> Vec<Item> {
        vec![
            Item::new(
                "tomato",
                "Tomate",
                "",
                &["fruit", "acidic"],
                Category::Ingredient,
            ),
            Item::new("chicken", "Poulet", "", &["whitemeat"], Category::Ingredient),
            Item::new(
                "greenbellpepper",
                "Poivron Vert",
                "",
                &["vegetable", "mild"],
                Category::Ingredient,
            ),
            Item::new("apple", "Pomme", "", &["fruit", "sweet"], Category::Ingredient),
            Item::new(
                "minestrone",
                "Soupe Minestrone",
                "",
                &["soup", "vegetable", "warm"],
                Category::Meal,
            ),
            Item::new("kombucha", "Kombucha", "", &[], Category::Other("ferment".into())),
        ]
    }

    #[test]
    fn empty_query_and_filters_return_whole_catalog_in_order() {
        let catalog = fixture();
        let result = filter_items(&catalog, "", &FilterState::new());
        assert_eq!(result.len(), catalog.len());
        assert!(result.iter().zip(catalog.iter()).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = fixture();
        let result = filter_items(&catalog, "POM", &FilterState::new());
        assert_eq!(names(&result), vec!["Pomme"]);
        let result = filter_items(&catalog, "vert", &FilterState::new());
        assert_eq!(names(&result), vec!["Poivron Vert"]);
    }

    #[test]
    fn include_tags_scenario() {
        let catalog = vec![
            Item::new("tomato", "Tomate", "", &["fruit", "acidic"], Category::Ingredient),
            Item::new("chicken", "Poulet", "", &["whitemeat"], Category::Ingredient),
        ];
        let filters = FilterState::new().with(FilterField::IncludeTags, &["fruit"]);
        let result = filter_items(&catalog, "", &filters);
        assert_eq!(names(&result), vec!["Tomate"]);
    }

    #[test]
    fn include_tags_require_every_tag_exactly() {
        let catalog = fixture();
        let filters = FilterState::new().with(FilterField::IncludeTags, &["fruit", "sweet"]);
        assert_eq!(names(&filter_items(&catalog, "", &filters)), vec!["Pomme"]);

        let partial = FilterState::new().with(FilterField::IncludeTags, &["fru"]);
        assert!(filter_items(&catalog, "", &partial).is_empty());
    }

    #[test]
    fn exclusion_wins_over_inclusion() {
        let catalog = fixture();
        let filters = FilterState::new()
            .with(FilterField::IncludeTags, &["fruit"])
            .with(FilterField::ExcludeTags, &["acidic"]);
        assert_eq!(names(&filter_items(&catalog, "", &filters)), vec!["Pomme"]);

        let both = FilterState::new()
            .with(FilterField::IncludeIngredients, &["pomme"])
            .with(FilterField::ExcludeIngredients, &["POM"]);
        assert!(filter_items(&catalog, "", &both).is_empty());
    }

    #[test]
    fn ingredient_filters_match_substrings_of_the_name() {
        let catalog = fixture();
        let include = FilterState::new().with(FilterField::IncludeIngredients, &["poivron", "VERT"]);
        assert_eq!(names(&filter_items(&catalog, "", &include)), vec!["Poivron Vert"]);

        let exclude = FilterState::new().with(FilterField::ExcludeIngredients, &["po"]);
        assert_eq!(
            names(&filter_items(&catalog, "", &exclude)),
            vec!["Tomate", "Soupe Minestrone", "Kombucha"]
        );
    }

    #[test]
    fn category_facets_never_match_unknown_categories() {
        let catalog = fixture();
        let meals = FilterState::new().with_categories(&[Category::Meal]);
        assert_eq!(names(&filter_items(&catalog, "", &meals)), vec!["Soupe Minestrone"]);

        let all_known = FilterState::new().with_categories(&Category::KNOWN);
        let result = filter_items(&catalog, "", &all_known);
        assert!(!names(&result).contains(&"Kombucha"));
    }

    #[test]
    fn unknown_tags_exclude_silently() {
        let catalog = fixture();
        let filters = FilterState::new().with(FilterField::IncludeTags, &["not-a-tag"]);
        assert!(filter_items(&catalog, "", &filters).is_empty());
    }

    #[test]
    fn narrowing_filters_yield_subsets() {
        let catalog = fixture();
        let loose = FilterState::new().with(FilterField::ExcludeTags, &["warm"]);
        let tight = loose
            .clone()
            .with(FilterField::ExcludeTags, &["sweet"])
            .with(FilterField::IncludeIngredients, &["o"]);
        let wide = filter_items(&catalog, "", &loose);
        let narrow = filter_items(&catalog, "", &tight);
        assert!(narrow.len() < wide.len());
        assert!(narrow.iter().all(|item| wide.iter().any(|w| w.id == item.id)));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let catalog = fixture();
        let filters = FilterState::new().with(FilterField::ExcludeTags, &["soup"]);
        assert_eq!(
            filter_items(&catalog, "o", &filters),
            filter_items(&catalog, "o", &filters)
        );
    }
}
