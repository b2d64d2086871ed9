//! Backend strategy selection.

use std::fmt;
use turbo_catalog::search::SearchRequest;

/// Which backends take part in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMode {
    /// A phrase is present: AI-search ranks, catalog supplies detail.
    Search,
    /// No phrase: catalog only.
    Browse,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Search => "search",
            SearchMode::Browse => "browse",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the mode for a request. Pure and total.
pub fn select_mode(request: &SearchRequest) -> SearchMode {
    match request.trimmed_phrase() {
        Some(_) => SearchMode::Search,
        None => SearchMode::Browse,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_selects_search() {
        let request = SearchRequest::new().with_phrase(" shoes ");
        assert_eq!(select_mode(&request), SearchMode::Search);
    }

    #[test]
    fn test_blank_or_missing_phrase_selects_browse() {
        assert_eq!(select_mode(&SearchRequest::new()), SearchMode::Browse);
        assert_eq!(
            select_mode(&SearchRequest::new().with_phrase("")),
            SearchMode::Browse
        );
        assert_eq!(
            select_mode(&SearchRequest::new().with_phrase(" \n\t ")),
            SearchMode::Browse
        );
    }
}
