use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;
use tracing::debug;

pub fn run<S: DataStore>(store: &S, term: &str) -> Result<CmdResult> {
    let records = store.load_or_empty()?;
    let matches: Vec<_> = records.into_iter().filter(|r| r.matches(term)).collect();
    debug!(term, hits = matches.len(), "search finished");
    Ok(CmdResult::default().with_listed_records(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn missing_storage_yields_empty() {
        let store = InMemoryStore::new();
        assert!(run(&store, "anything").unwrap().listed_records.is_empty());
    }

    #[test]
    fn name_match_is_case_insensitive_substring() {
        let store = StoreFixture::new()
            .with_student(1, "Alice Smith", 20, "A")
            .with_student(2, "Bob Jones", 21, "B")
            .store;

        for term in ["smith", "ALICE", "ice Sm"] {
            let found = run(&store, term).unwrap().listed_records;
            assert_eq!(found.len(), 1, "term {}", term);
            assert_eq!(found[0].student_id, 1);
        }
    }

    #[test]
    fn id_match_is_exact_text() {
        let store = StoreFixture::new()
            .with_student(1, "Jane", 20, "A")
            .with_student(11, "John", 21, "B")
            .store;

        let found = run(&store, "1").unwrap().listed_records;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].student_id, 1);
    }

    #[test]
    fn returns_all_matches_in_collection_order() {
        let store = StoreFixture::new()
            .with_student(3, "Ann Lee", 20, "A")
            .with_student(1, "Bo", 21, "B")
            .with_student(2, "Anna Park", 22, "C")
            .store;

        let ids: Vec<_> = run(&store, "ann")
            .unwrap()
            .listed_records
            .iter()
            .map(|r| r.student_id)
            .collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let store = StoreFixture::new().with_students(3).store;
        assert!(run(&store, "zzz").unwrap().listed_records.is_empty());
    }
}
