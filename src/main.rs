mod cli_args;
mod config;
mod extract;

use std::{fs::File, io::BufWriter};

use clap::Parser;
use indicatif::{MultiProgress, ProgressBar};
use indicatif_log_bridge::LogWrapper;

use crate::cli_args::{Cli, Commands};
use crate::config::extract::Config;
use crate::extract::flatten_pages;

fn main() -> anyhow::Result<()> {
    match Cli::parse().command {
        Commands::Wikiquote(extract_args) => {
            // ./quotedex \
            //     wikiquote \
            //     --wiki-xml \
            //     enwikiquote-latest-pages-articles.xml \
            //     --output \
            //     quotes.json
            let logger =
                env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                    .build();

            let multi_progress = MultiProgress::new();

            LogWrapper::new(multi_progress.clone(), logger)
                .try_init()
                .unwrap();

            let config = Config::from(extract_args);

            log::info!("\n{config}");

            let progress = multi_progress.add(ProgressBar::new_spinner());
            progress.set_message("Wikiquote Dump");

            let pages = extract::extract_file(&config.wiki_xml, config.ingest_limit, &progress)?;
            progress.finish_and_clear();

            let quotes = flatten_pages(&pages);
            log::info!("{} pages", pages.len());
            log::info!("{} quotes", quotes.len());

            let output = File::create(&config.output)?;
            serde_json::to_writer(BufWriter::new(output), &quotes)?;
            Ok(())
        }
    }
}
