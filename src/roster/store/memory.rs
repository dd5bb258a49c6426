use super::DataStore;
use crate::error::Result;
use crate::model::StudentRecord;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Option<Vec<StudentRecord>>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `save` was called; lets tests assert that nothing was written.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Option<Vec<StudentRecord>>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[StudentRecord]) -> Result<()> {
        self.records = Some(records.to_vec());
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_student(mut self, id: i64, name: &str, age: u32, grade: &str) -> Self {
            let mut records = self.store.load_or_empty().unwrap();
            records.push(StudentRecord::new(id, name, age, grade));
            self.store.records = Some(records);
            self
        }

        pub fn with_students(mut self, count: usize) -> Self {
            for i in 0..count {
                let id = i as i64 + 1;
                self = self.with_student(id, &format!("Student {}", id), 18, "B");
            }
            self
        }

        pub fn empty_but_present(mut self) -> Self {
            self.store.records = Some(Vec::new());
            self
        }
    }
}
