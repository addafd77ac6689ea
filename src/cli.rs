use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ayah-search")]
#[command(about = "Search Quran verses and chapters ignoring diacritics, spelling variants, spacing and case", long_about = None)]
pub struct Cli {
    /// Config file (defaults to <config dir>/ayah-search/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Log search details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter verses and highlight matches
    Search {
        query: String,
        /// Record array, or script edition payload
        #[arg(long)]
        corpus: PathBuf,
        /// Translation edition payload to merge with the script edition
        #[arg(short, long)]
        translation: Option<PathBuf>,
        /// Print JSON instead of marked-up text
        #[arg(long)]
        json: bool,
    },
    /// Filter the chapter list
    Surahs {
        query: String,
        /// Chapter list payload
        #[arg(short, long)]
        list: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Print the canonical search form of some text
    Normalize { text: String },
}
