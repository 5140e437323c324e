use std::num::NonZeroUsize;

use clap::Parser;
use env_logger::Env;
use wikilead::{configuration::get_configuration, services::WikiLookup};

/// Look up a Wikipedia article and print its lead paragraphs.
#[derive(Parser)]
#[command(name = "wikilead", version)]
struct Cli {
    /// Search text; multiple words are joined with spaces
    #[arg(required = true)]
    query: Vec<String>,

    /// Wikipedia language code, e.g. `tr` or `en`
    #[arg(long)]
    lang: Option<String>,

    /// Search region code
    #[arg(long)]
    region: Option<String>,

    /// Stop once this many period-delimited segments are collected
    #[arg(long)]
    min_sentences: Option<NonZeroUsize>,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut configuration = get_configuration()?;

    if let Some(lang) = cli.lang {
        configuration.lookup.lang = lang;
    }
    if let Some(region) = cli.region {
        configuration.lookup.region = region;
    }
    if let Some(min_sentences) = cli.min_sentences {
        configuration.lookup.min_sentences = min_sentences;
    }

    let lookup = WikiLookup::from_settings(&configuration)?;
    let outcome = lookup.run(&cli.query.join(" ")).await;

    match cli.json {
        true => println!("{}", serde_json::to_string_pretty(&outcome)?),
        false => {
            print!("{}", outcome.content);
            if !outcome.content.ends_with('\n') {
                println!();
            }
            match outcome.url {
                Some(url) => println!("Source: {}", url),
                None => println!("Source: not found"),
            }
        }
    }

    Ok(())
}
