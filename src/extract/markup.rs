use regex::Regex;

// [[w:Rush Rhees|Rush Rhees]]
const LINK: &str = r"\[\[[^|\]]+\|([^\]]+)\]\]";
// [[strength]]
const SIMPLE_LINK: &str = r"\[\[([^\]]+)]\]";
// [http://example.com/review ''The New York Times'' (17 July 1983)]
const URL: &str = r"\[http:[^\s]+\s([^\]]+)\]";
// [http://example.com/articlePage.aspx?articleid=294756]
const SIMPLE_URL: &str = r"\[http:[^\s]+\]";
// <!-- most likely 17th April -->
const COMMENT: &str = r"<!--[^-]+-->";
// {{gutenberg author|id=Archimedes|name=Archimedes}}
const CITATION: &str = r"\{\{[^\}]+\}\}";

#[derive(Clone)]
pub(crate) struct Regexes {
    pub(crate) link: Regex,
    pub(crate) simple_link: Regex,
    pub(crate) url: Regex,
    pub(crate) simple_url: Regex,
    pub(crate) comment: Regex,
    pub(crate) citation: Regex,
}

impl Regexes {
    pub(crate) fn new() -> Regexes {
        Regexes {
            link: Regex::new(LINK).unwrap(),
            simple_link: Regex::new(SIMPLE_LINK).unwrap(),
            url: Regex::new(URL).unwrap(),
            simple_url: Regex::new(SIMPLE_URL).unwrap(),
            comment: Regex::new(COMMENT).unwrap(),
            citation: Regex::new(CITATION).unwrap(),
        }
    }
}

/// Rewrites wiki markup out of an extracted text fragment.
///
/// The passes run in a fixed order and each runs once; nested constructs
/// whose replacement re-forms an earlier pattern stay uncleaned.
#[derive(Clone)]
pub(crate) struct MarkupCleaner {
    regexes: Regexes,
}

impl MarkupCleaner {
    pub(crate) fn new() -> Self {
        Self {
            regexes: Regexes::new(),
        }
    }

    pub(crate) fn clean(&self, text: &str) -> String {
        let text = self.regexes.link.replace_all(text, "$1");
        let text = self.regexes.simple_link.replace_all(&text, "$1");
        let text = self.regexes.url.replace_all(&text, "$1");
        let text = self.regexes.simple_url.replace_all(&text, "");
        let text = self.regexes.comment.replace_all(&text, "");
        let text = text.replace("''", "");
        text.trim().to_string()
    }

    /// Strips `{{ ... }}` citation templates from a whole page body. Runs
    /// once per page, before line splitting.
    pub(crate) fn strip_citations(&self, text: &str) -> String {
        self.regexes.citation.replace_all(text, "").into_owned()
    }
}
