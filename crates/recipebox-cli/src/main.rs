//! `recipebox` command line
//!
//! A terminal front end over the recipe catalogue: list, show, add, edit and
//! toggle recipes stored in a JSON file.

mod render;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use recipebox_catalog::{Catalog, CatalogConfig, JsonFileStore};
use recipebox_model::{FormData, MealCourse, Recipe, RecipeId, ScaleFactor};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "recipebox", version, about = "Personal recipe catalogue")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalogue file (overrides the configured store_path)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List recipes, optionally for one course
    List {
        #[arg(long)]
        course: Option<MealCourse>,
    },
    /// Show a recipe
    Show {
        /// Recipe name or id
        recipe: String,
        /// Scale factor: 0.5, 1 or 2
        #[arg(long)]
        scale: Option<ScaleFactor>,
    },
    /// Flip a recipe's previously-prepared mark
    Toggle {
        /// Recipe name or id
        recipe: String,
    },
    /// Add a recipe
    Add {
        #[arg(long)]
        name: String,
        #[command(flatten)]
        fields: FormFields,
    },
    /// Edit a recipe's details
    Edit {
        /// Recipe name or id
        recipe: String,
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        fields: FormFields,
        /// Clear the previously-prepared mark
        #[arg(long, conflicts_with = "prepared_at")]
        not_prepared: bool,
    },
    /// Delete a recipe
    Remove {
        /// Recipe name or id
        recipe: String,
    },
    /// Insert the preview recipes if the catalogue is empty
    Seed,
}

#[derive(Args, Debug, Default)]
struct FormFields {
    #[arg(long)]
    details: Option<String>,
    #[arg(long)]
    credit: Option<String>,
    #[arg(long)]
    course: Option<MealCourse>,
    #[arg(long)]
    thumbnail: Option<String>,
    /// RFC 3339 timestamp; marks the recipe as prepared
    #[arg(long)]
    prepared_at: Option<DateTime<Utc>>,
    #[arg(long)]
    notes: Option<String>,
}

impl FormFields {
    fn apply_to(self, form: &mut FormData) {
        if let Some(details) = self.details {
            form.details = details;
        }
        if let Some(credit) = self.credit {
            form.credit = credit;
        }
        if let Some(course) = self.course {
            form.meal_course = course;
        }
        if let Some(thumbnail) = self.thumbnail {
            form.thumbnail_url = thumbnail;
        }
        if let Some(at) = self.prepared_at {
            form.last_prepared_at = at;
            form.previously_prepared = true;
        }
        if let Some(notes) = self.notes {
            form.notes = notes;
        }
    }
}

fn resolve(catalog: &Catalog<JsonFileStore>, key: &str) -> Result<Recipe> {
    if let Ok(id) = key.parse::<RecipeId>() {
        return catalog.get(id).context("looking up recipe by id");
    }
    catalog
        .find_by_name(key)?
        .with_context(|| format!("no recipe named '{key}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CatalogConfig::load_or_default(cli.config.as_deref())
        .context("loading configuration")?;
    if let Some(store) = cli.store {
        config.store_path = store;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let store = JsonFileStore::open(&config.store_path)
        .with_context(|| format!("opening {}", config.store_path.display()))?;
    let catalog = Catalog::new(store, config);

    if !matches!(cli.command, Commands::Seed) {
        catalog.bootstrap()?;
    }
    run(&catalog, cli.command)
}

fn run(catalog: &Catalog<JsonFileStore>, command: Commands) -> Result<()> {
    match command {
        Commands::List { course } => {
            let recipes = match course {
                Some(course) => catalog.recipes_for_course(course)?,
                None => catalog.recipes()?,
            };
            for recipe in &recipes {
                println!("{}", render::row(recipe));
            }
        }
        Commands::Show { recipe, scale } => {
            let recipe = resolve(catalog, &recipe)?;
            let scale = scale.unwrap_or(catalog.config().default_scale);
            print!("{}", render::detail(&recipe, scale.value()));
        }
        Commands::Toggle { recipe } => {
            let recipe = resolve(catalog, &recipe)?;
            match catalog.toggle_prepared(recipe.id, Utc::now())? {
                Some(at) => println!("{} prepared at {}", recipe.name, at.to_rfc3339()),
                None => println!("{} marked as not prepared", recipe.name),
            }
        }
        Commands::Add { name, fields } => {
            let mut form = FormData::new();
            form.name = name;
            fields.apply_to(&mut form);
            let id = catalog.create_from_form(&form)?;
            println!("Added {} ({id})", form.name);
        }
        Commands::Edit {
            recipe,
            name,
            fields,
            not_prepared,
        } => {
            let recipe = resolve(catalog, &recipe)?;
            let mut form = recipe.begin_edit();
            if let Some(name) = name {
                form.name = name;
            }
            fields.apply_to(&mut form);
            if not_prepared {
                form.previously_prepared = false;
            }
            catalog.update_from_form(recipe.id, &form)?;
            info!(recipe_id = %recipe.id, "edited recipe");
            println!("Updated {}", form.name);
        }
        Commands::Remove { recipe } => {
            let recipe = resolve(catalog, &recipe)?;
            catalog.remove(recipe.id)?;
            println!("Removed {}", recipe.name);
        }
        Commands::Seed => {
            let count = catalog.bootstrap()?;
            println!("Seeded {count} recipes");
        }
    }
    Ok(())
}
