use super::document::{PageResult, QuoteRecord};
use super::line::{LineClassifier, LineKind};
use super::markup::MarkupCleaner;

/// Turns one page body into quote records.
///
/// A record accumulates quote and dialogue lines until a blank line closes
/// it; a record still open at the end of the page is dropped. The active
/// context label carries across record boundaries until a new header
/// replaces it.
pub(crate) struct PageQuoteExtractor {
    cleaner: MarkupCleaner,
    classifier: LineClassifier,
}

impl PageQuoteExtractor {
    pub(crate) fn new() -> Self {
        Self {
            cleaner: MarkupCleaner::new(),
            classifier: LineClassifier::new(),
        }
    }

    /// Borrows the page only for the duration of the call.
    pub(crate) fn extract(&self, title: &str, text: &str) -> PageResult {
        let text = self.cleaner.strip_citations(text);

        let mut active_context = String::new();
        let mut current = QuoteRecord::new(String::new());
        let mut quotes = Vec::new();

        for line in text.split('\n') {
            for kind in self.classifier.classify(line) {
                match kind {
                    LineKind::ContextHeader(inner) => {
                        active_context = self
                            .cleaner
                            .clean(inner)
                            .trim_matches(|c| c == '=' || c == ' ')
                            .to_string();
                        current.context = active_context.clone();
                    }
                    LineKind::Quote(payload) | LineKind::Dialogue(payload) => {
                        current.body.push(self.cleaner.clean(payload));
                    }
                    LineKind::Attribution(payload) => {
                        current.attribution = Some(self.cleaner.clean(payload));
                    }
                    LineKind::Blank => {
                        if !current.body.is_empty() {
                            let closed = std::mem::replace(
                                &mut current,
                                QuoteRecord::new(active_context.clone()),
                            );
                            quotes.push(closed);
                        }
                    }
                    LineKind::Other => {}
                }
            }
        }
        // A record left open here never got a closing blank line; it is
        // dropped to match the validated output counts.

        PageResult {
            title: self.cleaner.clean(title),
            quotes,
        }
    }
}
