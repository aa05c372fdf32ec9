mod commands;
mod config;
mod output;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "skinsense",
    version,
    about = "Ingredient composition and routine scoring for skincare products"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate ingredient function percentages (ingredient list JSON or a catalog product)
    Compose {
        /// JSON file with an array of ingredients
        #[arg(required_unless_present = "product")]
        input_file: Option<PathBuf>,

        /// Analyze this catalog product instead of an ingredient file
        #[arg(long)]
        product: Option<String>,

        /// Catalog JSON file to look the product up in
        #[arg(short, long, value_name = "FILE", conflicts_with = "preset")]
        catalog: Option<PathBuf>,

        /// Predefined catalog: sample, reference (default: sample)
        #[arg(short, long, value_name = "NAME")]
        preset: Option<String>,

        /// Reject negative values, values above 100 and totals above 100
        #[arg(long)]
        strict: bool,

        /// Output format: table (default) or json
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Score a routine layer by layer (routine JSON or a catalog routine)
    Routine {
        /// JSON file with a routine ({"name": ..., "layers": {...}})
        #[arg(required_unless_present = "name")]
        input_file: Option<PathBuf>,

        /// Named routine from the catalog
        #[arg(short, long)]
        name: Option<String>,

        /// Catalog JSON file holding the routine
        #[arg(short, long, value_name = "FILE", conflicts_with = "preset")]
        catalog: Option<PathBuf>,

        /// Predefined catalog: sample, reference (default: sample)
        #[arg(short, long, value_name = "NAME")]
        preset: Option<String>,

        /// Output format: table (default) or json
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show the tier and star rating for an effectiveness score
    Tier {
        /// Score between 0 and 100
        score: Decimal,
    },
    /// Inspect and validate catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List predefined catalogs
    List,
    /// Show the ingredients and products of a predefined catalog
    Show {
        /// Preset name (e.g., "reference")
        preset: String,

        /// Only list ingredients serving this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a catalog file
    Validate {
        /// Path to catalog JSON file
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let result = config::UserConfig::load().and_then(|config| match cli.command {
        Commands::Compose {
            input_file,
            product,
            catalog,
            preset,
            strict,
            output,
        } => commands::compose::run(
            &config,
            input_file,
            product,
            commands::CatalogSource::new(catalog, preset),
            strict,
            output.as_deref(),
        ),
        Commands::Routine {
            input_file,
            name,
            catalog,
            preset,
            output,
        } => commands::routine::run(
            &config,
            input_file,
            name,
            commands::CatalogSource::new(catalog, preset),
            output.as_deref(),
        ),
        Commands::Tier { score } => commands::tier::run(score),
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(),
            CatalogAction::Show { preset, category } => {
                commands::catalog::show(&preset, category.as_deref())
            }
            CatalogAction::Schema => commands::catalog::schema(),
            CatalogAction::Validate { file } => commands::catalog::validate(&file),
        },
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
