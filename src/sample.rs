//! Record collection providers: a seeded sample generator and a JSON loader.

use std::path::Path;

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::error::Result;
use crate::record::{ensure_unique_ids, Grade, Record};

pub const DEFAULT_SAMPLE_COUNT: u32 = 100;
pub const DEFAULT_SAMPLE_SEED: u64 = 42;

const FIRST_NAMES: &[&str] = &[
    "Aarav", "Vivaan", "Aditya", "Arjun", "Rohan", "Karan", "Priya", "Anjali", "Sneha", "Kavya",
    "Ananya", "Diya", "Sophia", "Emma", "Olivia", "Mia", "John", "Michael", "David", "James",
    "Daniel", "Samuel", "Henry", "Peter",
];

const LAST_NAMES: &[&str] = &[
    "Singh", "Kumar", "Patel", "Sharma", "Gupta", "Rao", "Nair", "Iyer", "Reddy", "Joshi",
    "Smith", "Johnson", "Brown", "Garcia", "Miller", "Wilson", "Taylor", "Clark", "Walker",
    "Parker",
];

const SCHOOLS: &[&str] = &[
    "Delhi Public School",
    "Doon School",
    "Mayo College",
    "Modern School",
    "Sanskriti School",
    "Springdales School",
    "Amity International School",
    "Bishop Cotton School",
    "Heritage School",
    "Ryan International School",
    "Indian Public School",
];

const SUBJECTS: &[&str] = &[
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "English",
    "Hindi",
    "History",
    "Geography",
    "Science",
    "Computer Science",
    "Economics",
    "Political Science",
    "Psychology",
    "Art",
    "Music",
    "Accountancy",
];

const CITIES: &[&str] = &[
    "Delhi", "Mumbai", "Bangalore", "Pune", "Chennai", "Kolkata", "Hyderabad", "Jaipur",
    "Lucknow", "Chandigarh", "New York", "Chicago", "Houston", "San Diego", "Austin",
];

const STREETS: &[&str] = &[
    "Main Street",
    "Oak Avenue",
    "Maple Drive",
    "Pine Road",
    "Cedar Lane",
    "Willow Way",
    "Market Street",
    "Park Avenue",
    "Garden Road",
    "Lake Drive",
];

fn pick<'a>(rng: &mut StdRng, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// 30% A, 40% B, 20% C, 5% D, 5% F
fn pick_grade(rng: &mut StdRng) -> Grade {
    match rng.gen_range(0..100) {
        0..=29 => Grade::A,
        30..=69 => Grade::B,
        70..=89 => Grade::C,
        90..=94 => Grade::D,
        _ => Grade::F,
    }
}

/// Generate `count` records with ids `1..=count`.
/// The same seed always yields the same collection.
pub fn sample_records(count: u32, seed: u64) -> Vec<Record> {
    let mut rng = StdRng::seed_from_u64(seed);
    let records: Vec<Record> = (1..=count)
        .map(|id| {
            let name = format!("{} {}", pick(&mut rng, FIRST_NAMES), pick(&mut rng, LAST_NAMES));
            let city = pick(&mut rng, CITIES);
            let street = pick(&mut rng, STREETS);
            let house: u32 = rng.gen_range(1..999);
            let school = pick(&mut rng, SCHOOLS);
            let subject = pick(&mut rng, SUBJECTS);
            Record::new(
                id,
                name,
                format!("{house} {street}, {city}"),
                school,
                subject,
                pick_grade(&mut rng),
            )
        })
        .collect();
    debug!(count, seed, "generated sample records");
    records
}

/// Load a JSON array of records. Ids must be unique.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    let records: Vec<Record> = serde_json::from_str(&raw)?;
    ensure_unique_ids(&records)?;
    debug!(count = records.len(), path = %path.as_ref().display(), "loaded records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;

    #[test]
    fn same_seed_same_collection() {
        assert_eq!(sample_records(25, 7), sample_records(25, 7));
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let records = sample_records(10, DEFAULT_SAMPLE_SEED);
        let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn last_id_equals_count() {
        let records = sample_records(300, 2);
        assert_eq!(records.len(), 300);
        assert_eq!(records.last().map(|r| r.id), Some(300));
        assert!(sample_records(0, 2).is_empty());
    }

    #[test]
    fn fields_come_from_the_pools() {
        for r in sample_records(50, 3) {
            assert!(SCHOOLS.contains(&r.school.as_str()));
            assert!(SUBJECTS.contains(&r.subject.as_str()));
            assert!(r.address.contains(", "));
            assert_eq!(r.name.split(' ').count(), 2);
        }
    }

    #[test]
    fn grade_distribution_favours_passing() {
        let records = sample_records(2000, 11);
        let passed = records.iter().filter(|r| r.is_passed()).count();
        // expected 70%
        assert!(passed > 1200 && passed < 1600, "passed = {passed}");
    }

    #[test]
    fn load_round_trips_generated_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        let records = sample_records(5, 1);
        std::fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();
        assert_eq!(load_records(&path).unwrap(), records);
    }

    #[test]
    fn load_rejects_duplicate_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dup.json");
        let mut records = sample_records(2, 1);
        records[1].id = records[0].id;
        std::fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();
        assert!(matches!(load_records(&path), Err(SearchError::DuplicateId(1))));
    }

    #[test]
    fn load_reports_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(load_records(&path), Err(SearchError::Json(_))));
    }
}
