use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Subject keywords that put a record into the science category.
pub const SCIENCE_KEYWORDS: [&str; 4] = ["physics", "chemistry", "biology", "science"];

/// Letter grade of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    /// Parse a grade letter, ignoring case.
    pub fn from_char(c: char) -> Result<Self, SearchError> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Grade::A),
            'B' => Ok(Grade::B),
            'C' => Ok(Grade::C),
            'D' => Ok(Grade::D),
            'F' => Ok(Grade::F),
            _ => Err(SearchError::InvalidGrade(c)),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::F => 'F',
        }
    }

    /// A and B pass; C, D and F fail.
    #[inline]
    pub fn is_passing(self) -> bool {
        matches!(self, Grade::A | Grade::B)
    }
}

impl TryFrom<char> for Grade {
    type Error = SearchError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Grade::from_char(c)
    }
}

impl From<Grade> for char {
    fn from(grade: Grade) -> Self {
        grade.as_char()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One entry of the searchable collection.
/// Immutable once built; `id` is unique within a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub school: String,
    pub subject: String,
    pub grade: Grade,
}

impl Record {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        address: impl Into<String>,
        school: impl Into<String>,
        subject: impl Into<String>,
        grade: Grade,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            school: school.into(),
            subject: subject.into(),
            grade,
        }
    }

    #[inline]
    pub fn is_passed(&self) -> bool {
        self.grade.is_passing()
    }

    /// True when the subject mentions any of [`SCIENCE_KEYWORDS`], case-insensitively.
    pub fn has_science(&self) -> bool {
        let subject = self.subject.to_lowercase();
        SCIENCE_KEYWORDS.iter().any(|kw| subject.contains(kw))
    }
}

/// Fails on the first id that appears twice.
pub fn ensure_unique_ids(records: &[Record]) -> Result<(), SearchError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            return Err(SearchError::DuplicateId(record.id));
        }
    }
    Ok(())
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Address: {}, School: {}, Subject: {}, Grade: {}",
            self.id, self.name, self.address, self.school, self.subject, self.grade
        )
    }
}
