use crate::catalog::{BuiltinCatalog, Catalog, CatalogProvider, JsonFileCatalog};
use crate::config::Config;
use crate::errors::CookinError;
use crate::model::{Category, FilterField, FilterState, Item, TagBadge, TagVocabulary};
use crate::services::logger::Logger;
use crate::session::{BrowseSession, BrowseView};
use clap::{Args, Parser, Subcommand};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "getcookin", version, about = "Search the GetCookin! ingredient catalog")]
pub struct Cli {
    /// JSON catalog file (overrides GETCOOKIN_CATALOG)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filter the catalog by name, ingredients, tags and category
    Search(SearchArgs),
    /// Print the tag legend
    Tags,
    /// Show a single item by id
    Show { id: String },
}

#[derive(Debug, Default, Args)]
pub struct SearchArgs {
    pub query: Option<String>,

    #[arg(long = "include-ingredient", value_name = "NAME")]
    pub include_ingredients: Vec<String>,

    #[arg(long = "exclude-ingredient", value_name = "NAME")]
    pub exclude_ingredients: Vec<String>,

    #[arg(long = "include-tag", value_name = "TAG")]
    pub include_tags: Vec<String>,

    #[arg(long = "exclude-tag", value_name = "TAG")]
    pub exclude_tags: Vec<String>,

    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    pub fn filters(&self) -> Result<FilterState, CookinError> {
        let mut filters = FilterState::new();
        let fields = [
            (FilterField::IncludeIngredients, &self.include_ingredients),
            (FilterField::ExcludeIngredients, &self.exclude_ingredients),
            (FilterField::IncludeTags, &self.include_tags),
            (FilterField::ExcludeTags, &self.exclude_tags),
        ];
        for (field, values) in fields {
            let values: Vec<&str> = values.iter().map(String::as_str).collect();
            filters = filters.with(field, &values);
        }
        for raw in &self.categories {
            let category = Category::parse(raw).ok_or_else(|| {
                CookinError::invalid_data(format!("Unknown category '{}'", raw))
                    .with_hint("Use one of: ingredient, meal, beverage, dessert.")
            })?;
            filters.categories.insert(category);
        }
        Ok(filters)
    }
}

async fn load_catalog(config: &Config, logger: &Logger) -> Result<Catalog, CookinError> {
    let provider: Box<dyn CatalogProvider> = match &config.catalog_path {
        Some(path) => Box::new(JsonFileCatalog::new(path.clone())),
        None => Box::new(BuiltinCatalog),
    };
    let catalog = Catalog::load(provider.as_ref()).await?;
    logger.debug(
        "Catalog ready",
        Some(&serde_json::json!({ "provider": provider.name(), "items": catalog.len() })),
    );
    Ok(catalog)
}

fn render_badges(badges: &[TagBadge]) -> String {
    badges
        .iter()
        .map(|badge| match badge {
            TagBadge::Icon { label, .. } => label.clone(),
            TagBadge::Text { text } => text.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_row(item: &Item, vocabulary: &TagVocabulary) -> String {
    format!(
        "{:<32} {:<11} {}",
        item.name,
        item.category,
        render_badges(&vocabulary.badges(item))
    )
}

fn render_search(
    view: &BrowseView,
    vocabulary: &TagVocabulary,
    json: bool,
) -> Result<String, CookinError> {
    if json {
        return serde_json::to_string_pretty(view)
            .map_err(|err| CookinError::internal(err.to_string()));
    }
    if let Some(message) = view.empty_state_message() {
        return Ok(message);
    }
    let rows: Vec<String> = view
        .items
        .iter()
        .map(|item| render_row(item, vocabulary))
        .collect();
    Ok(rows.join("\n"))
}

fn render_tags(vocabulary: &TagVocabulary) -> String {
    vocabulary
        .iter()
        .map(|(tag, info)| format!("{:<12} {:<28} {}", tag, info.label, info.icon))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_item(item: &Item, vocabulary: &TagVocabulary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", item.name, item.id);
    let _ = writeln!(out, "category: {}", item.category);
    let _ = writeln!(out, "image:    {}", item.image);
    for badge in vocabulary.badges(item) {
        match badge {
            TagBadge::Icon { tag, label, icon } => {
                let _ = writeln!(out, "  {:<12} {} [{}]", tag, label, icon);
            }
            TagBadge::Text { text } => {
                let _ = writeln!(out, "  {}", text);
            }
        }
    }
    out.trim_end().to_string()
}

/// Executes one CLI invocation and returns what should go to stdout.
pub async fn run(cli: Cli) -> Result<String, CookinError> {
    let logger = Logger::new("getcookin").child("cli");
    let config = Config::from_env().with_catalog_path(cli.catalog);
    let vocabulary = TagVocabulary::builtin();

    match cli.command {
        Command::Tags => Ok(render_tags(vocabulary)),
        Command::Show { id } => {
            let catalog = load_catalog(&config, &logger).await?;
            let item = catalog.find(&id).ok_or_else(|| {
                CookinError::not_found(format!("No catalog item with id '{}'", id))
            })?;
            Ok(render_item(item, vocabulary))
        }
        Command::Search(args) => {
            let filters = args.filters()?;
            let unknown = vocabulary.unknown_tags(&filters);
            if !unknown.is_empty() {
                logger.warn(
                    "Unknown tags in filters",
                    Some(&serde_json::json!({ "tags": unknown })),
                );
            }
            let catalog = load_catalog(&config, &logger).await?;
            let mut session =
                BrowseSession::from_config(logger.clone(), Arc::new(vocabulary.clone()), &config)
                    .with_catalog(catalog);
            session.apply_filters(filters);
            session.commit_query(args.query.as_deref().unwrap_or_default());
            render_search(&session.view(), vocabulary, args.json)
        }
    }
}
