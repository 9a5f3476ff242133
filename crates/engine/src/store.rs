//! The record store: authoritative owner of the live collection
//!
//! ## Design
//!
//! `RecordStore` holds the live records in admission order and composes
//! the validation rules, the query engine, and the two bounded side
//! structures behind the CRUD surface. All state is in memory and every
//! operation runs to completion on the caller's thread; mutations touch
//! only the live collection, the trash stack, and the activity queue.
//!
//! ## Invariants
//!
//! - Ids are unique for the store's lifetime and allocation is
//!   monotonically non-decreasing; a deleted record's id is never reused.
//! - No two live records share a case-insensitive name.
//! - A deleted record lives in the trash stack, never in both places.
//! - The release date always equals admission date plus sentence months.
//!
//! ## Trash semantics
//!
//! Delete moves the record value itself into the trash stack — the same
//! logical entity, not a copy — so restore re-links it intact. The stack's
//! capacity is hard: a sixth pending deletion is refused before the live
//! collection is touched, and the caller sees the overflow.

use custodia_core::error::{Error, Result};
use custodia_core::record::{Record, RecordDraft};
use custodia_core::types::{RecordId, SortKey, SortOrder};
use custodia_core::validation;
use chrono::NaiveDate;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::containers::{BoundedQueue, BoundedStack};
use crate::query::{search, sort};
use crate::seed;

/// In-memory store for custodial records
pub struct RecordStore {
    config: StoreConfig,
    records: Vec<Record>,
    next_id: u64,
    trash: BoundedStack<Record>,
    recent: BoundedQueue<RecordId>,
}

impl RecordStore {
    /// Create an empty store with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        let trash = BoundedStack::new(config.trash_capacity);
        let recent = BoundedQueue::new(config.recent_capacity);
        Self {
            next_id: config.first_id,
            records: Vec::new(),
            trash,
            recent,
            config,
        }
    }

    /// Create a store pre-populated with the standard intake records,
    /// admitted through the normal create path.
    pub fn seeded(config: StoreConfig) -> Result<Self> {
        let mut store = Self::with_config(config);
        for draft in seed::sample_drafts() {
            let id = store.create(draft)?;
            debug!(id = id.value(), "seed record admitted");
        }
        Ok(store)
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    /// Admit a new record.
    ///
    /// Runs the full rule set, enforces case-insensitive name uniqueness,
    /// allocates the next id, derives the release date, and registers the
    /// admission on the activity feed. A draft without an access code gets
    /// a minted one.
    pub fn create(&mut self, draft: RecordDraft) -> Result<RecordId> {
        let mut draft = draft.normalized();
        validation::validate_draft(&draft, today()).map_err(Error::Validation)?;
        if self.name_taken(&draft.name, None) {
            return Err(Error::DuplicateName(draft.name));
        }
        if draft.family_access_code.is_none() {
            draft.family_access_code = Some(mint_access_code());
        }

        let id = self.allocate_id();
        let record = Record::new(id, draft);
        info!(id = id.value(), name = %record.name, "record admitted");
        self.records.push(record);
        if let Some(evicted) = self.recent.push(id) {
            debug!(id = evicted.value(), "activity feed rotated");
        }
        Ok(id)
    }

    /// Look up a live record by id. Linear, no ordering assumption.
    pub fn read(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Overwrite a record's attributes.
    ///
    /// Validates like create, with the uniqueness check excluding the
    /// record's own current name; the release date is recomputed whenever
    /// the admission date or sentence duration changed.
    pub fn update(&mut self, id: RecordId, draft: RecordDraft) -> Result<()> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(Error::NotFound(id))?;
        let draft = draft.normalized();
        validation::validate_draft(&draft, today()).map_err(Error::Validation)?;
        if self.name_taken(&draft.name, Some(id)) {
            return Err(Error::DuplicateName(draft.name));
        }
        self.records[pos].apply(draft);
        info!(id = id.value(), "record updated");
        Ok(())
    }

    /// Move a record to the trash, returning a display copy.
    ///
    /// Refused outright when the trash is full — the record stays live and
    /// the caller decides whether to restore or purge first.
    pub fn delete(&mut self, id: RecordId) -> Result<Record> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(Error::NotFound(id))?;
        if self.trash.is_full() {
            return Err(Error::TrashFull {
                capacity: self.trash.capacity(),
            });
        }

        let record = self.records.remove(pos);
        let copy = record.clone();
        // fullness was checked above; re-insert on the unreachable refusal
        // rather than losing the record
        if let Err(rejected) = self.trash.push(record) {
            self.records.insert(pos, rejected);
            return Err(Error::TrashFull {
                capacity: self.trash.capacity(),
            });
        }
        info!(id = id.value(), "record moved to trash");
        Ok(copy)
    }

    /// Bring back the most recently deleted record.
    pub fn restore(&mut self) -> Result<Record> {
        let record = self.trash.pop().ok_or(Error::TrashEmpty)?;
        let copy = record.clone();
        self.records.push(record);
        info!(id = copy.id().value(), "record restored");
        Ok(copy)
    }

    /// Discard everything in the trash, irreversibly.
    ///
    /// Returns how many records were dropped.
    pub fn purge_trash(&mut self) -> usize {
        let discarded = self.trash.clear();
        if discarded > 0 {
            warn!(discarded, "trash purged");
        }
        discarded
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Case-insensitive substring search over name and crime type,
    /// in live-collection order.
    pub fn search_by_name_or_crime(&self, term: &str) -> Vec<&Record> {
        search::by_name_or_crime(&self.records, term)
    }

    /// Exact id lookup: sorts a snapshot ascending by id, then bisects it.
    pub fn search_by_id(&self, id: RecordId) -> Option<Record> {
        let snapshot = sort::sorted_by(
            &self.records,
            SortKey::Id,
            SortOrder::Ascending,
            self.config.small_sort_threshold,
        );
        search::binary_by_id(&snapshot, id).map(|idx| snapshot[idx].clone())
    }

    /// A freshly sorted snapshot; the live collection keeps its order.
    pub fn sorted(&self, key: SortKey, order: SortOrder) -> Vec<Record> {
        sort::sorted_by(&self.records, key, order, self.config.small_sort_threshold)
    }

    /// The most recently admitted records, newest first.
    ///
    /// Entries that have been purged from both the live collection and the
    /// trash simply fall out of the feed.
    pub fn recent_activity(&self) -> Vec<Record> {
        self.recent
            .iter()
            .rev()
            .filter_map(|&id| self.find_anywhere(id))
            .cloned()
            .collect()
    }

    /// The trash contents in display order, most recent deletion first.
    pub fn trash_view(&self) -> Vec<Record> {
        self.trash.iter().rev().cloned().collect()
    }

    /// The id the next admission would take, without allocating it.
    pub fn next_available_id(&self) -> RecordId {
        RecordId::new((self.current_max_id() + 1).max(self.next_id))
    }

    /// Read access for a family member presenting an access code.
    ///
    /// The code is checked against the credential rule first; a
    /// well-formed code that matches no live record is an access failure.
    pub fn find_by_access_code(&self, code: &str) -> Result<&Record> {
        validation::check_access_code(code).map_err(|v| Error::Validation(vec![v]))?;
        let code = code.trim();
        self.records
            .iter()
            .find(|r| r.family_access_code == code)
            .ok_or(Error::AccessDenied)
    }

    /// The live collection in admission order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records are live.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records waiting in the trash.
    pub fn trash_len(&self) -> usize {
        self.trash.len()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn allocate_id(&mut self) -> RecordId {
        let id = (self.current_max_id() + 1).max(self.next_id);
        self.next_id = id + 1;
        RecordId::new(id)
    }

    fn current_max_id(&self) -> u64 {
        self.records
            .iter()
            .map(|r| r.id().value())
            .max()
            .unwrap_or(0)
    }

    fn name_taken(&self, name: &str, exclude: Option<RecordId>) -> bool {
        let needle = name.to_lowercase();
        self.records
            .iter()
            .any(|r| Some(r.id()) != exclude && r.name.to_lowercase() == needle)
    }

    fn find_anywhere(&self, id: RecordId) -> Option<&Record> {
        self.read(id)
            .or_else(|| self.trash.iter().find(|r| r.id() == id))
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

fn mint_access_code() -> String {
    Uuid::new_v4().simple().to_string()
}
