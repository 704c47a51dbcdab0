use serde::Serialize;

/// One quotation accumulated from a page, before flattening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QuoteRecord {
    pub(crate) body: Vec<String>,
    pub(crate) context: String,
    pub(crate) attribution: Option<String>,
}

impl QuoteRecord {
    pub(crate) fn new(context: String) -> Self {
        Self {
            body: Vec::new(),
            context,
            attribution: None,
        }
    }
}

/// The extraction result for one main-namespace page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PageResult {
    pub(crate) title: String,
    pub(crate) quotes: Vec<QuoteRecord>,
}

/// The flat output record: quote text plus a single attribution string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Quote {
    pub(crate) body: String,
    pub(crate) attr: String,
}

/// Combines every page's records into one list, joining title, context and
/// attribution with ", " and dropping the empty parts.
pub(crate) fn flatten_pages(pages: &[PageResult]) -> Vec<Quote> {
    let mut quotes = Vec::new();
    for page in pages {
        for record in &page.quotes {
            let mut attr = page.title.clone();
            if !record.context.is_empty() {
                attr.push_str(", ");
                attr.push_str(&record.context);
            }
            if let Some(attribution) = record.attribution.as_deref() {
                if !attribution.is_empty() {
                    attr.push_str(", ");
                    attr.push_str(attribution);
                }
            }
            quotes.push(Quote {
                body: record.body.join("\n"),
                attr,
            });
        }
    }
    quotes
}
