//! Insertion-ordered record collection.

use super::RecordKey;

/// A stored record with an integer identifier.
pub trait Record: Clone {
    /// Identifier type of the record.
    type Id: RecordKey;

    /// Returns the record identifier.
    fn id(&self) -> Self::Id;
}

/// Ordered collection of records backing one in-memory store.
///
/// Every read returns owned clones, so callers can never mutate stored
/// state through a returned value.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> Collection<T> {
    /// Creates a collection pre-populated with `records` in the given order.
    #[must_use]
    pub const fn from_records(records: Vec<T>) -> Self {
        Self { records }
    }

    /// Returns the identifier the next inserted record receives.
    ///
    /// This is `max(existing) + 1`, or `1` for an empty collection.
    #[must_use]
    pub fn next_id(&self) -> T::Id {
        let max = self
            .records
            .iter()
            .map(|record| record.id().value())
            .max()
            .unwrap_or(0);
        T::Id::from_value(max.saturating_add(1))
    }

    /// Returns copies of every record in insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<T> {
        self.records.clone()
    }

    /// Returns copies of the records matching `predicate`, in insertion order.
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
        self.records
            .iter()
            .filter(|record| predicate(*record))
            .cloned()
            .collect()
    }

    /// Returns `true` when any record matches `predicate`.
    pub fn any(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.records.iter().any(predicate)
    }

    /// Returns a copy of the record with the given identifier.
    #[must_use]
    pub fn get(&self, id: T::Id) -> Option<T> {
        self.records.iter().find(|record| record.id() == id).cloned()
    }

    /// Appends a record and returns a copy of it.
    pub fn push(&mut self, record: T) -> T {
        self.records.push(record.clone());
        record
    }

    /// Mutates the record with the given identifier in place and returns a
    /// copy of the result, or `None` when no record matches.
    pub fn update_with(&mut self, id: T::Id, mutate: impl FnOnce(&mut T)) -> Option<T> {
        let record = self.records.iter_mut().find(|record| record.id() == id)?;
        mutate(record);
        Some(record.clone())
    }

    /// Removes and returns the record with the given identifier.
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let index = self.records.iter().position(|record| record.id() == id)?;
        Some(self.records.remove(index))
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
