//! Title and label predicates applied to each pull request.
//!
//! Patterns are compiled once when the filter is built and reused for every
//! pull request in the query. Matching is an unanchored search: `bug` matches
//! `type: bug`, and callers wanting a whole-string match write `^bug$`.

use regex::Regex;

use crate::github::error::QueryError;
use crate::github::models::LabelSet;

/// Configuration field names used in pattern errors.
pub const LABEL_PATTERN_FIELD: &str = "label_regexp";
/// Configuration field names used in pattern errors.
pub const TITLE_PATTERN_FIELD: &str = "title_regexp";

/// Outcome of evaluating a pull request against the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    /// Both predicates passed.
    Include,
    /// A label pattern is configured and no label matched it.
    ExcludedByLabels,
    /// A title pattern is configured and the title did not match it.
    ExcludedByTitle,
}

impl FilterDecision {
    /// Returns true for [`FilterDecision::Include`].
    #[must_use]
    pub const fn is_included(self) -> bool {
        matches!(self, Self::Include)
    }
}

/// Compiled label and title predicates.
#[derive(Debug, Clone, Default)]
pub struct PullRequestFilter {
    label: Option<Regex>,
    title: Option<Regex>,
}

impl PullRequestFilter {
    /// Compiles the optional label and title patterns.
    ///
    /// An empty pattern matches everything, so it is treated as unset: an
    /// empty label pattern keeps pull requests without labels.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidPattern`] naming the offending field when
    /// either pattern is not a valid regular expression.
    pub fn compile(label: Option<&str>, title: Option<&str>) -> Result<Self, QueryError> {
        Ok(Self {
            label: compile_pattern(LABEL_PATTERN_FIELD, label)?,
            title: compile_pattern(TITLE_PATTERN_FIELD, title)?,
        })
    }

    /// A filter that accepts every pull request.
    #[must_use]
    pub const fn unfiltered() -> Self {
        Self {
            label: None,
            title: None,
        }
    }

    /// Passes when no label pattern is set, or when any label matches it.
    ///
    /// An empty label set never satisfies a configured pattern.
    #[must_use]
    pub fn accepts_labels(&self, labels: &LabelSet) -> bool {
        self.label
            .as_ref()
            .is_none_or(|pattern| labels.iter().any(|label| pattern.is_match(label)))
    }

    /// Passes when no title pattern is set, or when the title matches it.
    #[must_use]
    pub fn accepts_title(&self, title: &str) -> bool {
        self.title
            .as_ref()
            .is_none_or(|pattern| pattern.is_match(title))
    }

    /// Evaluates both predicates, labels first.
    #[must_use]
    pub fn evaluate(&self, title: &str, labels: &LabelSet) -> FilterDecision {
        if !self.accepts_labels(labels) {
            FilterDecision::ExcludedByLabels
        } else if !self.accepts_title(title) {
            FilterDecision::ExcludedByTitle
        } else {
            FilterDecision::Include
        }
    }

    /// Returns the configured label pattern source, if any.
    #[must_use]
    pub fn label_pattern(&self) -> Option<&str> {
        self.label.as_ref().map(Regex::as_str)
    }

    /// Returns the configured title pattern source, if any.
    #[must_use]
    pub fn title_pattern(&self) -> Option<&str> {
        self.title.as_ref().map(Regex::as_str)
    }
}

fn compile_pattern(field: &'static str, pattern: Option<&str>) -> Result<Option<Regex>, QueryError> {
    pattern
        .filter(|source| !source.is_empty())
        .map(|source| {
            Regex::new(source).map_err(|error| QueryError::InvalidPattern {
                field,
                message: error.to_string(),
            })
        })
        .transpose()
}
