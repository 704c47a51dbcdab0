mod document;
mod dump_reader;
mod error;
mod line;
mod markup;
mod page;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use indicatif::ProgressBar;

use dump_reader::DumpTraversal;
use page::PageQuoteExtractor;

pub(crate) use document::{flatten_pages, PageResult};
pub(crate) use error::ExtractError;

/// Runs the extraction over a dump file, one page at a time.
pub(crate) fn extract_file(
    path: &Path,
    limit: usize,
    progress: &ProgressBar,
) -> Result<Vec<PageResult>, ExtractError> {
    let file = File::open(path)?;
    let source = BufReader::with_capacity(2 * 1024 * 1024, file);
    extract_from_source(source, limit, progress)
}

pub(crate) fn extract_from_source<R: BufRead>(
    source: R,
    limit: usize,
    progress: &ProgressBar,
) -> Result<Vec<PageResult>, ExtractError> {
    let extractor = PageQuoteExtractor::new();
    let mut results = Vec::new();
    for page in DumpTraversal::new(source, limit) {
        let page = page?;
        results.push(extractor.extract(&page.title, &page.text));
        progress.inc(1);
        // `page` drops here, before the traversal parses the next one.
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::{extract_from_source, flatten_pages};
    use indicatif::ProgressBar;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    const DUMP: &str = r#"<mediawiki xmlns="http://www.mediawiki.org/xml/export-0.10/">
  <page>
    <title>William Shakespeare</title>
    <ns>0</ns>
    <revision>
      <text>=== ''Hamlet'' ===
* To [[be]] or not to be
** Act III

* quotable without attribution</text>
    </revision>
  </page>
  <page>
    <title>Talk:William Shakespeare</title>
    <ns>1</ns>
    <revision>
      <text>* not extracted</text>
    </revision>
  </page>
</mediawiki>"#;

    #[test]
    fn extracts_and_flattens_a_small_dump() {
        let pages =
            extract_from_source(Cursor::new(DUMP), 0, &ProgressBar::hidden()).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].title, "William Shakespeare");

        // The second quote never gets a closing blank line and is lost.
        let quotes = flatten_pages(&pages);
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].body, "To be or not to be");
        assert_eq!(quotes[0].attr, "William Shakespeare, Hamlet, Act III");
    }

    #[test]
    fn malformed_dump_propagates_an_error() {
        let result =
            extract_from_source(Cursor::new("<mediawiki><page>"), 0, &ProgressBar::hidden());
        assert!(result.is_err());
    }
}
