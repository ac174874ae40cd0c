use clap::{Parser, Subcommand};
use kiji::preview::{load_config, render_results, render_stats};
use kiji::{CliError, FilesystemIndexSource};
use kiji_core::stats;
use std::path::PathBuf;

/// Preview kiji's quick search and reading statistics against a built site.
#[derive(Parser)]
#[command(name = "kiji")]
#[command(about = "Preview quick search and reading statistics for a static blog")]
struct Cli {
    /// JSON config file (same shape as the browser config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the quick results a visitor would get for a query
    Search {
        /// Output directory of the site build (contains the search index)
        site_dir: PathBuf,
        query: String,
        /// Print the panel markup instead of plain text
        #[arg(long)]
        html: bool,
    },

    /// Show character count and reading time of a text file
    Stats { file: PathBuf },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Search {
            site_dir,
            query,
            html,
        } => {
            if !kiji_core::search::meets_threshold(&config.search, &query) {
                eprintln!(
                    "note: the widget only searches from {} characters; \"{}\" is shorter",
                    config.search.min_query_chars,
                    query.trim()
                );
            }

            let source = FilesystemIndexSource::new(&site_dir, config.search.index_url.clone());
            let results = kiji_core::search::search(&source, &query, &config.search).await?;
            if html {
                println!("{}", results.to_html(&config.search.labels));
            } else {
                print!("{}", render_results(&results));
            }
        }
        Commands::Stats { file } => {
            let text = std::fs::read_to_string(&file)?;
            let reading = stats::reading_stats(&text, config.stats.chars_per_minute);
            log::debug!("{}: {:?}", file.display(), reading);
            print!("{}", render_stats(&reading, &config.stats));
        }
    }
    Ok(())
}
