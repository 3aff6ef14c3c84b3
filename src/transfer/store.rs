//! In-memory store for transfer records, keyed by record identifier.
use std::collections::HashMap;

use crate::transfer::{TransferRecord, types::RecordId};

/// Holds every transfer record and hands out identifiers on insertion.
pub struct Store {
    /// A map of record ids to their records.
    records: HashMap<RecordId, TransferRecord>,
    /// The id the next inserted record will receive.
    next_id: RecordId,
}

impl Store {
    /// Creates an empty store. Ids start at 1.
    pub fn new() -> Self {
        Store {
            records: HashMap::new(),
            next_id: 1,
        }
    }

    /// Inserts a record, stamping it with a fresh id. Returns the id.
    pub fn insert(&mut self, mut record: TransferRecord) -> RecordId {
        let id = self.next_id;
        self.next_id += 1;
        record.set_id(id);
        self.records.insert(id, record);
        id
    }

    /// Looks up a record by id.
    pub fn get(&self, id: RecordId) -> Option<&TransferRecord> {
        self.records.get(&id)
    }

    /// Looks up a record by id for in-place modification.
    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut TransferRecord> {
        self.records.get_mut(&id)
    }

    /// Removes a record by id, returning it if it existed.
    pub fn remove(&mut self, id: RecordId) -> Option<TransferRecord> {
        self.records.remove(&id)
    }

    /// Retrieves all records in the store.
    pub fn get_all(&self) -> &HashMap<RecordId, TransferRecord> {
        &self.records
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new()
    }
}
