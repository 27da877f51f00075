use crate::record::Record;

/// Categorical predicates applied after ranking.
///
/// - `passed`: `Some(true)` keeps grades A/B, `Some(false)` keeps C/D/F,
///   `None` keeps both.
/// - `science`: `Some(true)` keeps science subjects; `None` and `Some(false)`
///   do not filter on subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub passed: Option<bool>,
    pub science: Option<bool>,
}

impl SearchFilter {
    pub fn new(passed: Option<bool>, science: Option<bool>) -> Self {
        Self { passed, science }
    }

    pub fn passed() -> Self {
        Self::new(Some(true), None)
    }

    pub fn failed() -> Self {
        Self::new(Some(false), None)
    }

    pub fn science() -> Self {
        Self::new(None, Some(true))
    }

    /// True when no predicate would remove anything
    pub fn is_noop(&self) -> bool {
        self.passed.is_none() && self.science != Some(true)
    }

    #[inline]
    pub fn matches_grade(&self, record: &Record) -> bool {
        self.passed.map_or(true, |passed| record.is_passed() == passed)
    }

    #[inline]
    pub fn matches_category(&self, record: &Record) -> bool {
        self.science != Some(true) || record.has_science()
    }

    #[inline]
    pub fn matches(&self, record: &Record) -> bool {
        self.matches_grade(record) && self.matches_category(record)
    }

    /// Grade predicate, then category predicate, keeping candidate order
    pub fn apply<'a>(&self, mut candidates: Vec<&'a Record>) -> Vec<&'a Record> {
        if self.passed.is_some() {
            candidates.retain(|r| self.matches_grade(r));
        }
        if self.science == Some(true) {
            candidates.retain(|r| self.matches_category(r));
        }
        candidates
    }
}
