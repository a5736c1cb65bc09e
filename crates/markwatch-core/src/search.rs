//! Trademark search planning.

use crate::api::TextSearch;

/// Inputs of the search form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    pub words: String,
    pub class_filter: String,
}

impl SearchQuery {
    /// Trimmed wire body.
    #[must_use]
    pub fn to_body(&self) -> TextSearch {
        TextSearch {
            words: self.words.trim().to_owned(),
            class_filter: self.class_filter.trim().to_owned(),
        }
    }

    #[must_use]
    pub fn has_terms(&self) -> bool {
        !self.words.trim().is_empty() || !self.class_filter.trim().is_empty()
    }
}

/// Which request a search press issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPlan {
    /// Multipart image search, carrying the text fields too.
    Image,
    Text,
    /// Nothing to search for; the results stay hidden.
    Nothing,
}

#[must_use]
pub fn plan_search(has_image: bool, query: &SearchQuery) -> SearchPlan {
    if has_image {
        SearchPlan::Image
    } else if query.has_terms() {
        SearchPlan::Text
    } else {
        SearchPlan::Nothing
    }
}

/// Split a class filter such as `"9, 42 ,35"` into class numbers,
/// skipping anything that is not a number.
#[must_use]
pub fn parse_classes(filter: &str) -> Vec<u16> {
    filter
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter_map(|s| s.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_wins_over_text() {
        let q = SearchQuery {
            words: "apple".into(),
            class_filter: String::new(),
        };
        assert_eq!(plan_search(true, &q), SearchPlan::Image);
        assert_eq!(plan_search(false, &q), SearchPlan::Text);
    }

    #[test]
    fn blank_form_searches_nothing() {
        let q = SearchQuery {
            words: "  ".into(),
            class_filter: " ".into(),
        };
        assert_eq!(plan_search(false, &q), SearchPlan::Nothing);
    }

    #[test]
    fn class_filter_alone_is_a_text_search() {
        let q = SearchQuery {
            words: String::new(),
            class_filter: "9".into(),
        };
        assert_eq!(plan_search(false, &q), SearchPlan::Text);
        assert_eq!(q.to_body().class_filter, "9");
    }

    #[test]
    fn classes_parse_loosely() {
        assert_eq!(parse_classes("9, 42 ,x,35"), vec![9, 42, 35]);
        assert!(parse_classes("").is_empty());
    }
}
