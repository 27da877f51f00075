use crate::record::Record;

/// Lowercase search text of a record.
///
/// Name, address, school and subject are joined with spaces and the grade is
/// appended as `grade` + letter, so "gradea" is one token and never collides
/// with a stray single letter elsewhere in the text.
pub fn canonicalize(record: &Record) -> String {
    format!(
        "{} {} {} {} grade{}",
        record.name, record.address, record.school, record.subject, record.grade
    )
    .to_lowercase()
}
