use anyhow::Context;
use ayah_search::cli::{Cli, Commands};
use ayah_search::config::Config;
use ayah_search::error::Result;
use ayah_search::{Searcher, content, filter_surahs, format, normalize};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    ayah_search::tracing::init(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    tracing::info!("Starting ayah-search");

    let output = match cli.command {
        Commands::Search {
            query,
            corpus,
            translation,
            json,
        } => {
            let records = content::load_corpus(&corpus, translation.as_deref())
                .with_context(|| format!("Failed to load corpus {}", corpus.display()))?;
            let mut searcher = Searcher::new(config.cache.capacity);
            let hits = searcher.search(&records, &query);

            if json || config.output.json {
                serde_json::to_string_pretty(&hits).context("Failed to serialize results")?
            } else {
                format::format_hits(&records, &hits, &config.output)
            }
        }
        Commands::Surahs { query, list, json } => {
            let surahs = content::load_surah_list(&list)
                .with_context(|| format!("Failed to load chapter list {}", list.display()))?;
            let hits = filter_surahs(&surahs, &query);

            if json || config.output.json {
                serde_json::to_string_pretty(&hits).context("Failed to serialize results")?
            } else {
                format::format_surah_hits(&hits, &config.output)
            }
        }
        Commands::Normalize { text } => normalize(&text),
    };

    println!("{}", output.trim_end());
    Ok(())
}
