//! Session facade over the record store
//!
//! [`Custodia`] is the surface a presentation layer embeds. The engine
//! itself is single-threaded; this crate adds the serialization a
//! concurrent host needs: mutating calls go through a write lock, read
//! calls share a read lock and return owned snapshots, so no caller ever
//! observes a partially-mutated collection.
//!
//! # Example
//!
//! ```ignore
//! use custodia_api::Custodia;
//! use custodia_core::{SortKey, SortOrder};
//!
//! let sessions = Custodia::seeded()?;
//! let roster = sessions.sorted(SortKey::Name, SortOrder::Ascending);
//! let hits = sessions.search_by_name_or_crime("rob");
//! ```

#![warn(clippy::all)]

use parking_lot::RwLock;

use custodia_core::error::Result;
use custodia_core::record::{Record, RecordDraft};
use custodia_core::types::{RecordId, SortKey, SortOrder};
use custodia_engine::{RecordStore, StoreConfig};

/// Thread-safe handle to one records session
pub struct Custodia {
    store: RwLock<RecordStore>,
}

impl Custodia {
    /// An empty session with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// An empty session with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            store: RwLock::new(RecordStore::with_config(config)),
        }
    }

    /// A session pre-populated with the standard intake records.
    pub fn seeded() -> Result<Self> {
        Ok(Self {
            store: RwLock::new(RecordStore::seeded(StoreConfig::default())?),
        })
    }

    // ========================================================================
    // Mutations — serialized through the write lock
    // ========================================================================

    /// Admit a new record. See [`RecordStore::create`].
    pub fn create(&self, draft: RecordDraft) -> Result<RecordId> {
        self.store.write().create(draft)
    }

    /// Overwrite a record's attributes. See [`RecordStore::update`].
    pub fn update(&self, id: RecordId, draft: RecordDraft) -> Result<()> {
        self.store.write().update(id, draft)
    }

    /// Move a record to the trash. See [`RecordStore::delete`].
    pub fn delete(&self, id: RecordId) -> Result<Record> {
        self.store.write().delete(id)
    }

    /// Bring back the most recently deleted record.
    pub fn restore(&self) -> Result<Record> {
        self.store.write().restore()
    }

    /// Discard the trash contents; returns how many records were dropped.
    pub fn purge_trash(&self) -> usize {
        self.store.write().purge_trash()
    }

    // ========================================================================
    // Reads — consistent snapshots under the read lock
    // ========================================================================

    /// Look up a single record by id.
    pub fn read(&self, id: RecordId) -> Option<Record> {
        self.store.read().read(id).cloned()
    }

    /// Case-insensitive substring search over name and crime type.
    pub fn search_by_name_or_crime(&self, term: &str) -> Vec<Record> {
        self.store
            .read()
            .search_by_name_or_crime(term)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Exact id lookup via the bisecting path.
    pub fn search_by_id(&self, id: RecordId) -> Option<Record> {
        self.store.read().search_by_id(id)
    }

    /// A sorted snapshot of the live collection.
    pub fn sorted(&self, key: SortKey, order: SortOrder) -> Vec<Record> {
        self.store.read().sorted(key, order)
    }

    /// The most recently admitted records, newest first.
    pub fn recent_activity(&self) -> Vec<Record> {
        self.store.read().recent_activity()
    }

    /// The trash contents, most recent deletion first.
    pub fn trash_view(&self) -> Vec<Record> {
        self.store.read().trash_view()
    }

    /// The id the next admission would take, without allocating it.
    pub fn next_available_id(&self) -> RecordId {
        self.store.read().next_available_id()
    }

    /// Read-only view for a family member presenting an access code.
    pub fn family_view(&self, code: &str) -> Result<Record> {
        self.store.read().find_by_access_code(code).cloned()
    }

    /// The live collection in admission order.
    pub fn list(&self) -> Vec<Record> {
        self.store.read().records().to_vec()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    /// True when no records are live.
    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }
}

impl Default for Custodia {
    fn default() -> Self {
        Self::new()
    }
}
