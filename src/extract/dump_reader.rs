use std::io::BufRead;

use parse_mediawiki_dump_reboot::{schema::Namespace, Page, Parser};

use super::error::DumpReaderError;

/// Streaming traversal of a pages-articles dump.
///
/// Yields one owned `Page` at a time; the consumer drops each page before
/// the next is parsed, so memory stays bounded by one page regardless of
/// dump size. Non-main-namespace pages and pages with an empty body are
/// skipped. A structural parse error ends the traversal.
pub(crate) struct DumpTraversal<R: BufRead> {
    pages: Parser<R>,
    remaining: usize,
    failed: bool,
}

impl<R: BufRead> DumpTraversal<R> {
    pub(crate) fn new(source: R, limit: usize) -> Self {
        let remaining = if limit == 0 { usize::MAX } else { limit };
        Self {
            pages: parse_mediawiki_dump_reboot::parse(source),
            remaining,
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for DumpTraversal<R> {
    type Item = Result<Page, DumpReaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.remaining == 0 {
            return None;
        }
        loop {
            match self.pages.next()? {
                Err(error) => {
                    self.failed = true;
                    return Some(Err(DumpReaderError::MalformedDump(error.to_string())));
                }
                Ok(page) if page_filter(&page) => {
                    self.remaining -= 1;
                    return Some(Ok(page));
                }
                Ok(skipped) => {
                    log::debug!("skipping page {}", skipped.title);
                }
            }
        }
    }
}

fn page_filter(page: &Page) -> bool {
    page.namespace == Namespace::Main && !page.text.is_empty()
}
