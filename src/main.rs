use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::debug;
use recipe_browser::{BrowserConfig, Navigation, RecipeBrowser};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Json,
}

/// Render a page of the recipe browser
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Page location, e.g. `search.html?ingredients=egg%2Cmilk`
    #[arg(default_value = "index.html")]
    location: String,

    /// Dataset path or URL, relative to the base location
    #[arg(long)]
    dataset: Option<String>,

    /// Base URL or directory (defaults to the current directory)
    #[arg(long)]
    base: Option<String>,

    /// Dataset request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Select a tag on the home page and submit the search
    #[arg(long = "select", value_name = "TAG")]
    selections: Vec<String>,

    /// Press the back control on a recipe page
    #[arg(long)]
    back: bool,

    /// Seed for the carousel sample
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = BrowserConfig::load()?;
    debug!("{:?}", config);

    let mut builder = RecipeBrowser::builder().config(config).location(&cli.location);
    if let Some(dataset) = cli.dataset {
        builder = builder.dataset(dataset);
    }
    if let Some(base) = cli.base {
        builder = builder.base(base);
    }
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    if cli.back {
        builder = builder.back();
    }
    for tag in cli.selections {
        builder = builder.select(tag);
    }

    let result = builder.build().await?;

    match cli.format {
        Format::Html => {
            for (mount, html) in result.surface.rendered() {
                println!("<!-- {mount} -->");
                println!("{html}");
            }
            match result.navigation {
                Some(Navigation::Location(target)) => println!("navigate: {target}"),
                Some(Navigation::Back) => println!("navigate: back"),
                None => {}
            }
        }
        Format::Json => {
            let output = serde_json::json!({
                "recipes": result.recipe_count,
                "page": result.page,
                "navigation": result.navigation,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
