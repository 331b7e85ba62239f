use std::collections::HashSet;

use crate::entity_store::core::{Entity, Record, RecordId, StoreError};

use super::id_generator::IdGenerator;

// ============================================================================
// Generic Entity Store - In-Memory Record Collection
// ============================================================================
//
// This is a GENERIC store that works with ANY entity type.
//
// Type Parameter:
// - `T`: The record fields (must implement the Entity trait)
//
// Responsibilities:
// 1. Keep records in insertion order (insertion order = display order)
// 2. Hand out ids strictly greater than any id the store ever held
// 3. Patch records in place, keeping position and id
// 4. Delete idempotently
//
// Invariant: record ids are pairwise distinct between any two operations.
//
// ============================================================================

#[derive(Debug, Clone)]
pub struct EntityStore<T: Entity> {
    records: Vec<Record<T>>,
    ids: IdGenerator,
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            ids: IdGenerator::new(),
        }
    }

    /// Build a store from records that already carry ids.
    ///
    /// Ids must be distinct; the next generated id is max-plus-one.
    pub fn seeded(records: Vec<Record<T>>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut ids = IdGenerator::new();

        for record in &records {
            if !seen.insert(record.id) {
                tracing::warn!(entity = T::KIND, id = %record.id, "duplicate id in seed data");
                return Err(StoreError::DuplicateId {
                    entity: T::KIND,
                    id: record.id,
                });
            }
            record.fields.validate()?;
            ids.observe(record.id);
        }

        tracing::debug!(entity = T::KIND, count = records.len(), "store seeded");
        Ok(Self { records, ids })
    }

    /// Build a store from bare fields, assigning ids 1..=n in order.
    pub fn from_fields(fields: impl IntoIterator<Item = T>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for item in fields {
            store.create(item)?;
        }
        Ok(store)
    }

    /// Append a new record with a freshly generated id.
    pub fn create(&mut self, fields: T) -> Result<Record<T>, StoreError> {
        if let Err(e) = fields.validate() {
            tracing::warn!(entity = T::KIND, error = %e, "create rejected");
            return Err(e);
        }

        let Some(id) = self.ids.next() else {
            tracing::warn!(entity = T::KIND, floor = %self.ids.floor(), "create rejected, ids exhausted");
            return Err(StoreError::IdsExhausted { entity: T::KIND });
        };

        let record = Record::new(id, fields);
        self.records.push(record.clone());

        tracing::debug!(entity = T::KIND, id = %record.id, "record created");
        Ok(record)
    }

    /// Replace the fields of one record in place, keeping its id and position.
    pub fn patch<F>(&mut self, id: RecordId, updater: F) -> Result<Record<T>, StoreError>
    where
        F: FnOnce(T) -> T,
    {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            tracing::warn!(entity = T::KIND, %id, "patch target not found");
            return Err(StoreError::NotFound {
                entity: T::KIND,
                id,
            });
        };

        record.fields = updater(record.fields.clone());

        tracing::debug!(entity = T::KIND, %id, "record patched");
        Ok(record.clone())
    }

    /// Remove the record with this id. Absent ids are a no-op.
    pub fn delete(&mut self, id: RecordId) {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);

        if self.records.len() < before {
            tracing::debug!(entity = T::KIND, %id, "record deleted");
        } else {
            tracing::debug!(entity = T::KIND, %id, "delete of absent id ignored");
        }
    }

    /// Snapshot of every record in insertion order.
    pub fn list(&self) -> Vec<Record<T>> {
        self.records.clone()
    }

    pub fn get(&self, id: RecordId) -> Option<&Record<T>> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Like `get`, but an absent id is a `NotFound` error.
    pub fn require(&self, id: RecordId) -> Result<&Record<T>, StoreError> {
        self.get(id).ok_or(StoreError::NotFound {
            entity: T::KIND,
            id,
        })
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record<T>> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity_store::core::is_present;

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        nom: String,
        ville: String,
    }

    impl Person {
        fn named(nom: &str) -> Self {
            Self {
                nom: nom.to_string(),
                ville: "Paris".to_string(),
            }
        }
    }

    impl Entity for Person {
        const KIND: &'static str = "person";

        fn required_fields(&self) -> Vec<(&'static str, bool)> {
            vec![("nom", is_present(&self.nom))]
        }
    }

    fn dupont_martin() -> EntityStore<Person> {
        EntityStore::seeded(vec![
            Record::new(1, Person::named("Dupont")),
            Record::new(2, Person::named("Martin")),
        ])
        .unwrap()
    }

    fn ids(store: &EntityStore<Person>) -> Vec<u64> {
        store.list().iter().map(|r| r.id.value()).collect()
    }

    #[test]
    fn test_delete_then_create_does_not_reuse_live_id() {
        let mut store = dupont_martin();

        store.delete(RecordId(1));
        store.create(Person::named("Durand")).unwrap();

        let listed: Vec<(u64, String)> = store
            .list()
            .into_iter()
            .map(|r| (r.id.value(), r.fields.nom))
            .collect();
        assert_eq!(
            listed,
            vec![(2, "Martin".to_string()), (3, "Durand".to_string())]
        );
    }

    #[test]
    fn test_ids_stay_distinct_across_creates_and_deletes() {
        let mut store = EntityStore::new();
        for round in 0..20 {
            let record = store.create(Person::named(&format!("p{round}"))).unwrap();
            if round % 3 == 0 {
                store.delete(record.id);
            }
            if round % 5 == 0 {
                store.delete(RecordId(1));
            }
        }

        let all = ids(&store);
        let unique: HashSet<u64> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len());
    }

    #[test]
    fn test_create_above_max_id_fails_without_wrapping() {
        let mut store =
            EntityStore::seeded(vec![Record::new(u64::MAX, Person::named("Dupont"))]).unwrap();

        let result = store.create(Person::named("Martin"));

        assert!(matches!(
            result,
            Err(StoreError::IdsExhausted { entity: "person" })
        ));
        assert_eq!(ids(&store), vec![u64::MAX]);
    }

    #[test]
    fn test_deleting_last_record_does_not_recycle_its_id() {
        let mut store = dupont_martin();
        store.delete(RecordId(2));

        let created = store.create(Person::named("Durand")).unwrap();
        assert_eq!(created.id, RecordId(3));
    }

    #[test]
    fn test_create_appends_exactly_one_record() {
        let mut store = dupont_martin();
        let before = store.list();

        let created = store.create(Person::named("Bernard")).unwrap();
        let after = store.list();

        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last(), Some(&created));
        assert_eq!(&after[..before.len()], &before[..]);
    }

    #[test]
    fn test_create_with_missing_required_field_fails() {
        let mut store = dupont_martin();

        let result = store.create(Person::named("  "));

        assert!(matches!(
            result,
            Err(StoreError::Validation { entity: "person", field: "nom" })
        ));
        assert_eq!(ids(&store), vec![1, 2]);
    }

    #[test]
    fn test_failed_create_does_not_consume_an_id() {
        let mut store = dupont_martin();
        let _ = store.create(Person::named(""));

        let created = store.create(Person::named("Durand")).unwrap();
        assert_eq!(created.id, RecordId(3));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = dupont_martin();

        store.delete(RecordId(1));
        assert!(!store.contains(RecordId(1)));

        store.delete(RecordId(1));
        store.delete(RecordId(99));
        assert_eq!(ids(&store), vec![2]);
    }

    #[test]
    fn test_patch_keeps_position_and_id() {
        let mut store = dupont_martin();
        store.create(Person::named("Durand")).unwrap();

        let patched = store
            .patch(RecordId(2), |p| Person { ville: "Lyon".to_string(), ..p })
            .unwrap();

        assert_eq!(patched.id, RecordId(2));
        assert_eq!(patched.fields.ville, "Lyon");
        assert_eq!(ids(&store), vec![1, 2, 3]);

        let listed = store.list();
        assert_eq!(listed[0].fields, Person::named("Dupont"));
        assert_eq!(listed[1].fields.ville, "Lyon");
        assert_eq!(listed[2].fields, Person::named("Durand"));
    }

    #[test]
    fn test_patch_absent_id_leaves_store_unchanged() {
        let mut store = dupont_martin();
        let before = store.list();

        let result = store.patch(RecordId(42), |p| Person::named(&p.nom.to_uppercase()));

        assert!(matches!(
            result,
            Err(StoreError::NotFound { entity: "person", id: RecordId(42) })
        ));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_list_is_a_snapshot() {
        let store = dupont_martin();

        let mut snapshot = store.list();
        snapshot[0].fields.nom = "Changed".to_string();
        snapshot.clear();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(RecordId(1)).unwrap().fields.nom, "Dupont");
    }

    #[test]
    fn test_seeded_rejects_duplicate_ids() {
        let result = EntityStore::seeded(vec![
            Record::new(1, Person::named("Dupont")),
            Record::new(1, Person::named("Martin")),
        ]);

        assert!(matches!(
            result,
            Err(StoreError::DuplicateId { entity: "person", id: RecordId(1) })
        ));
    }

    #[test]
    fn test_seeded_rejects_invalid_records() {
        let result = EntityStore::seeded(vec![Record::new(1, Person::named(""))]);
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_seeded_with_gaps_continues_after_max() {
        let mut store = EntityStore::seeded(vec![
            Record::new(10, Person::named("Dupont")),
            Record::new(4, Person::named("Martin")),
        ])
        .unwrap();

        let created = store.create(Person::named("Durand")).unwrap();
        assert_eq!(created.id, RecordId(11));
        assert_eq!(ids(&store), vec![10, 4, 11]);
    }

    #[test]
    fn test_from_fields_numbers_from_one() {
        let store =
            EntityStore::from_fields(vec![Person::named("Dupont"), Person::named("Martin")])
                .unwrap();

        assert_eq!(ids(&store), vec![1, 2]);
    }

    #[test]
    fn test_require_reports_missing_id() {
        let store = dupont_martin();
        assert_eq!(store.require(RecordId(2)).unwrap().fields.nom, "Martin");
        assert!(store.require(RecordId(3)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_empty_store() {
        let store: EntityStore<Person> = EntityStore::default();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
        assert!(store.get(RecordId(1)).is_none());
    }
}
