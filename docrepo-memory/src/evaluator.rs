//! Search request evaluation for in-memory document filtering.
//!
//! This module decides whether a single document satisfies a
//! [`SearchRequest`]. The request is a conjunction; each criterion is
//! checked only when present and, for list criteria, non-empty.

use chrono::{DateTime, Utc};

use docrepo_core::{document::Document, query::SearchRequest};

/// Evaluates a [`SearchRequest`] against one document.
pub(crate) struct RequestEvaluator<'a> {
    document: &'a Document,
}

impl<'a> RequestEvaluator<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// True when the document satisfies every present criterion.
    ///
    /// A document missing a field that a present criterion inspects does
    /// not match.
    pub fn matches(&self, request: &SearchRequest) -> bool {
        self.matches_title(&request.title_prefixes)
            && self.matches_content(&request.contains_contents)
            && self.matches_author(&request.author_ids)
            && self.matches_created(request.created_from, request.created_to)
    }

    /// Filters an iterator of documents down to those matching the request.
    pub fn filter_documents(
        documents: impl IntoIterator<Item = &'a Document>,
        request: &SearchRequest,
    ) -> Vec<Document> {
        documents
            .into_iter()
            .filter(|document| RequestEvaluator::new(document).matches(request))
            .cloned()
            .collect()
    }

    // OR across the prefixes.
    fn matches_title(&self, prefixes: &Option<Vec<String>>) -> bool {
        match constrained(prefixes) {
            None => true,
            Some(prefixes) => match self.document.title.as_deref() {
                Some(title) => prefixes.iter().any(|prefix| title.starts_with(prefix.as_str())),
                None => false,
            },
        }
    }

    // AND across the substrings.
    fn matches_content(&self, substrings: &Option<Vec<String>>) -> bool {
        match constrained(substrings) {
            None => true,
            Some(substrings) => match self.document.content.as_deref() {
                Some(content) => substrings
                    .iter()
                    .all(|substring| content.contains(substring.as_str())),
                None => false,
            },
        }
    }

    fn matches_author(&self, author_ids: &Option<Vec<String>>) -> bool {
        match constrained(author_ids) {
            None => true,
            Some(ids) => match self.document.author.as_ref() {
                Some(author) => ids.iter().any(|id| *id == author.id),
                None => false,
            },
        }
    }

    // Both bounds are inclusive.
    fn matches_created(&self, from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> bool {
        if from.is_none() && to.is_none() {
            return true;
        }

        match self.document.created {
            Some(created) => {
                from.is_none_or(|from| created >= from) && to.is_none_or(|to| created <= to)
            }
            None => false,
        }
    }
}

/// Present-but-empty list criteria place no constraint, same as absent ones.
fn constrained(list: &Option<Vec<String>>) -> Option<&[String]> {
    list.as_deref().filter(|items| !items.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use docrepo_core::document::Author;

    fn report(title: &str, content: &str, author_id: &str) -> Document {
        Document::builder()
            .title(title)
            .content(content)
            .author(Author::new(author_id, "Ada"))
            .created(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
            .build()
    }

    #[test]
    fn empty_request_matches_any_document() {
        let document = report("Alpha report", "quarterly results", "a1");
        assert!(RequestEvaluator::new(&document).matches(&SearchRequest::new()));

        let bare = Document::default();
        assert!(RequestEvaluator::new(&bare).matches(&SearchRequest::new()));
    }

    #[test]
    fn title_prefixes_use_or_semantics() {
        let document = report("Beta notes", "text", "a1");
        let request = SearchRequest::builder()
            .title_prefixes(["Alpha", "Beta"])
            .build();

        assert!(RequestEvaluator::new(&document).matches(&request));

        let miss = SearchRequest::builder().title_prefixes(["Gamma"]).build();
        assert!(!RequestEvaluator::new(&document).matches(&miss));
    }

    #[test]
    fn contains_contents_use_and_semantics() {
        let document = report("Alpha report", "quarterly results for q2", "a1");

        let both = SearchRequest::builder()
            .contains_contents(["quarterly", "q2"])
            .build();
        assert!(RequestEvaluator::new(&document).matches(&both));

        let one_missing = SearchRequest::builder()
            .contains_contents(["quarterly", "q3"])
            .build();
        assert!(!RequestEvaluator::new(&document).matches(&one_missing));
    }

    #[test]
    fn author_filter_checks_membership() {
        let document = report("Alpha report", "text", "a1");

        let hit = SearchRequest::builder().author_ids(["a2", "a1"]).build();
        assert!(RequestEvaluator::new(&document).matches(&hit));

        let miss = SearchRequest::builder().author_ids(["a2"]).build();
        assert!(!RequestEvaluator::new(&document).matches(&miss));
    }

    #[test]
    fn created_bounds_are_inclusive() {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let document = report("Alpha report", "text", "a1");

        let exact = SearchRequest::builder()
            .created_from(created)
            .created_to(created)
            .build();
        assert!(RequestEvaluator::new(&document).matches(&exact));

        let after = SearchRequest::builder()
            .created_from(created + chrono::Duration::seconds(1))
            .build();
        assert!(!RequestEvaluator::new(&document).matches(&after));

        let before = SearchRequest::builder()
            .created_to(created - chrono::Duration::seconds(1))
            .build();
        assert!(!RequestEvaluator::new(&document).matches(&before));
    }

    #[test]
    fn absent_fields_fail_present_criteria() {
        let bare = Document::default();

        let by_title = SearchRequest::builder().title_prefixes(["Alpha"]).build();
        assert!(!RequestEvaluator::new(&bare).matches(&by_title));

        let by_content = SearchRequest::builder().contains_contents(["text"]).build();
        assert!(!RequestEvaluator::new(&bare).matches(&by_content));

        let by_author = SearchRequest::builder().author_ids(["a1"]).build();
        assert!(!RequestEvaluator::new(&bare).matches(&by_author));

        let by_created = SearchRequest::builder()
            .created_from(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
            .build();
        assert!(!RequestEvaluator::new(&bare).matches(&by_created));
    }

    #[test]
    fn empty_list_criteria_place_no_constraint() {
        let bare = Document::default();
        let request = SearchRequest::builder()
            .title_prefixes(Vec::<String>::new())
            .contains_contents(Vec::<String>::new())
            .author_ids(Vec::<String>::new())
            .build();

        assert!(RequestEvaluator::new(&bare).matches(&request));
    }
}
