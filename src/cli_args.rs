use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}
#[derive(Subcommand)]
pub(crate) enum Commands {
    Wikiquote(WikiquoteExtractArgs),
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct WikiquoteExtractArgs {
    #[arg(long)]
    pub(crate) wiki_xml: PathBuf,
    #[arg(long)]
    pub(crate) output: PathBuf,
    #[arg(long, default_value_t = 0)]
    pub(crate) ingest_limit: usize,
}
