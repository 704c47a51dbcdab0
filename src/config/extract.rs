use crate::cli_args::WikiquoteExtractArgs;
use colored::Colorize;
use std::{fmt::Display, path::PathBuf};

#[derive(Debug)]
pub(crate) struct Config {
    pub(crate) wiki_xml: PathBuf,
    pub(crate) output: PathBuf,
    pub(crate) ingest_limit: usize,
}

impl From<WikiquoteExtractArgs> for Config {
    fn from(value: WikiquoteExtractArgs) -> Self {
        Config {
            wiki_xml: value.wiki_xml,
            output: value.output,
            ingest_limit: value.ingest_limit,
        }
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Config {
            wiki_xml,
            output,
            ingest_limit: _,
        } = self;

        let wiki_xml = wiki_xml.display();
        let output = output.display().to_string().blue();

        write!(
            f,
            "Extract running.\n\tUsing wikiquote xml dump at {wiki_xml}.\n\tWriting quotes at {output}.",
        )
    }
}
