use regex::Regex;

// === The Work Title ===
const CONTEXT: &str = r"^={3}\s?(.+)\s?={3}";
// * A quote line; a second leading star means attribution, not quote.
const QUOTE: &str = r"^\*[^*]";
const QUOTE_STRIP: &str = r"^\*\s?";
// ** The attribution line under a quote.
const ATTRIBUTION_STRIP: &str = r"^\*\*\s?";

/// One classification of a raw line, with the extracted payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    ContextHeader(&'a str),
    Quote(&'a str),
    Dialogue(&'a str),
    Attribution(&'a str),
    Blank,
    Other,
}

pub(crate) struct LineClassifier {
    context: Regex,
    quote: Regex,
    quote_strip: Regex,
    attribution_strip: Regex,
}

impl LineClassifier {
    pub(crate) fn new() -> Self {
        Self {
            context: Regex::new(CONTEXT).unwrap(),
            quote: Regex::new(QUOTE).unwrap(),
            quote_strip: Regex::new(QUOTE_STRIP).unwrap(),
            attribution_strip: Regex::new(ATTRIBUTION_STRIP).unwrap(),
        }
    }

    /// Reports every pattern the line matches, in extraction order. The
    /// checks are independent: a context header that also opens with a
    /// marker contributes more than one kind.
    pub(crate) fn classify<'a>(&self, line: &'a str) -> Vec<LineKind<'a>> {
        let mut kinds = Vec::new();

        if let Some(captures) = self.context.captures(line) {
            if let Some(inner) = captures.get(1) {
                kinds.push(LineKind::ContextHeader(inner.as_str()));
            }
        }
        if self.quote.is_match(line) {
            if let Some(marker) = self.quote_strip.find(line) {
                kinds.push(LineKind::Quote(&line[marker.end()..]));
            }
        }
        if let Some(payload) = line.strip_prefix(':') {
            kinds.push(LineKind::Dialogue(payload));
        }
        if line.starts_with("**") {
            if let Some(marker) = self.attribution_strip.find(line) {
                kinds.push(LineKind::Attribution(&line[marker.end()..]));
            }
        }
        if line.is_empty() {
            kinds.push(LineKind::Blank);
        }

        if kinds.is_empty() {
            kinds.push(LineKind::Other);
        }
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::{LineClassifier, LineKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn single_star_is_a_quote() {
        let classifier = LineClassifier::new();
        assert_eq!(
            classifier.classify("* To be or not to be"),
            vec![LineKind::Quote("To be or not to be")]
        );
    }

    #[test]
    fn double_star_is_attribution_not_quote() {
        let classifier = LineClassifier::new();
        assert_eq!(
            classifier.classify("** William Shakespeare"),
            vec![LineKind::Attribution("William Shakespeare")]
        );
    }

    #[test]
    fn triple_star_keeps_the_extra_star_in_payload() {
        let classifier = LineClassifier::new();
        assert_eq!(
            classifier.classify("*** nested"),
            vec![LineKind::Attribution("* nested")]
        );
    }

    #[test]
    fn context_header_captures_inner_text() {
        let classifier = LineClassifier::new();
        assert_eq!(
            classifier.classify("=== Hamlet (1600) ==="),
            vec![LineKind::ContextHeader("Hamlet (1600) ")]
        );
    }

    #[test]
    fn colon_line_is_dialogue() {
        let classifier = LineClassifier::new();
        assert_eq!(
            classifier.classify(": Ay, there's the rub."),
            vec![LineKind::Dialogue(" Ay, there's the rub.")]
        );
    }

    #[test]
    fn empty_line_is_blank() {
        let classifier = LineClassifier::new();
        assert_eq!(classifier.classify(""), vec![LineKind::Blank]);
    }

    #[test]
    fn whitespace_only_line_is_not_blank() {
        let classifier = LineClassifier::new();
        assert_eq!(classifier.classify("  "), vec![LineKind::Other]);
    }

    #[test]
    fn bare_star_matches_nothing() {
        // The quote pattern requires a character after the star.
        let classifier = LineClassifier::new();
        assert_eq!(classifier.classify("*"), vec![LineKind::Other]);
    }

    #[test]
    fn marker_strips_at_most_one_space() {
        let classifier = LineClassifier::new();
        assert_eq!(
            classifier.classify("*  double spaced"),
            vec![LineKind::Quote(" double spaced")]
        );
    }
}
