//! Profile editing session.

use tracing::debug;
use umacard_schemas::{Mode, ProfileDocument, RaceEntry};
use umacard_stats::{RaceTotals, compute_totals, format_fans, format_prize};

use crate::error::EditorError;
use crate::fields::{FictionalField, OriginalField};
use crate::pending::PendingOp;
use crate::validate::validate_entry;

/// Owns one profile document and mediates every mutation on it.
///
/// The session is the single caller the model assumes: one document,
/// one pending-state machine, no concurrent access. The presentation
/// layer reads through [`document`](Self::document) and
/// [`pending`](Self::pending) and mutates only through the methods
/// here.
#[derive(Debug, Clone, Default)]
pub struct ProfileSession {
    document: ProfileDocument,
    pending: PendingOp,
}

impl ProfileSession {
    /// Starts a session on a fresh default document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session on an existing document (e.g. a loaded one).
    /// The cached career totals are refreshed immediately so they never
    /// drift from the loaded race list.
    pub fn with_document(document: ProfileDocument) -> Self {
        let mut session = Self {
            document,
            pending: PendingOp::Idle,
        };
        session.refresh_totals();
        session
    }

    /// The current document, for rendering and export.
    pub fn document(&self) -> &ProfileDocument {
        &self.document
    }

    /// Consumes the session, yielding the document.
    pub fn into_document(self) -> ProfileDocument {
        self.document
    }

    /// The current pending-operation state.
    pub fn pending(&self) -> PendingOp {
        self.pending
    }

    /// The race list, in display order.
    pub fn races(&self) -> &[RaceEntry] {
        &self.document.races
    }

    /// Recomputes aggregate totals from the current race list.
    pub fn totals(&self) -> RaceTotals {
        compute_totals(&self.document.races)
    }

    /// Begins editing entry `index`, returning a copy of it for the
    /// caller's scratch buffer. Any pending operation is discarded
    /// first; entering edit mode never queues.
    ///
    /// # Errors
    ///
    /// [`EditorError::IndexOutOfRange`] when `index` is invalid; the
    /// pending state is left as it was.
    pub fn begin_edit(&mut self, index: usize) -> crate::Result<RaceEntry> {
        let entry = self
            .document
            .races
            .get(index)
            .cloned()
            .ok_or(EditorError::IndexOutOfRange {
                index,
                len: self.document.races.len(),
            })?;
        self.pending = PendingOp::Editing(index);
        debug!(index, "race edit started");
        Ok(entry)
    }

    /// Begins inserting a new entry after entry `index`. Any pending
    /// operation is discarded first. Insertion is always relative to an
    /// existing entry; prepending at the head is what a commit in the
    /// idle state does.
    ///
    /// # Errors
    ///
    /// [`EditorError::IndexOutOfRange`] when `index` is invalid.
    pub fn begin_insert_after(&mut self, index: usize) -> crate::Result<()> {
        let len = self.document.races.len();
        if index >= len {
            return Err(EditorError::IndexOutOfRange { index, len });
        }
        self.pending = PendingOp::Inserting(index + 1);
        debug!(position = index + 1, "race insert started");
        Ok(())
    }

    /// Cancels any pending edit or insert.
    pub fn cancel(&mut self) {
        self.pending = PendingOp::Idle;
    }

    /// Validates and commits a race entry according to the pending
    /// state: editing replaces in place, inserting splices at the
    /// pending position, idle prepends at the head. On success the
    /// session returns to idle and the cached totals are refreshed.
    ///
    /// # Errors
    ///
    /// [`EditorError::Validation`] with every violated check; the race
    /// list and pending state are untouched.
    /// [`EditorError::IndexOutOfRange`] if the pending index no longer
    /// fits the list (cannot happen through this API, but fails loudly
    /// rather than corrupting the list).
    pub fn commit(&mut self, entry: RaceEntry) -> crate::Result<()> {
        validate_entry(&entry).map_err(EditorError::Validation)?;

        let len = self.document.races.len();
        match self.pending {
            PendingOp::Editing(index) => {
                let slot = self
                    .document
                    .races
                    .get_mut(index)
                    .ok_or(EditorError::IndexOutOfRange { index, len })?;
                *slot = entry;
                debug!(index, "race entry replaced");
            }
            PendingOp::Inserting(index) => {
                if index > len {
                    return Err(EditorError::IndexOutOfRange { index, len });
                }
                self.document.races.insert(index, entry);
                debug!(index, "race entry inserted");
            }
            PendingOp::Idle => {
                self.document.races.insert(0, entry);
                debug!("race entry prepended");
            }
        }

        self.pending = PendingOp::Idle;
        self.refresh_totals();
        Ok(())
    }

    /// Removes entry `index`. The pending state resets to idle
    /// unconditionally, whatever its index was; no index adjustment is
    /// attempted. Returns the removed entry.
    ///
    /// Confirmation is a presentation-layer concern; this operation is
    /// unconditional.
    ///
    /// # Errors
    ///
    /// [`EditorError::IndexOutOfRange`] when `index` is invalid; the
    /// pending state is left as it was.
    pub fn remove(&mut self, index: usize) -> crate::Result<RaceEntry> {
        let len = self.document.races.len();
        if index >= len {
            return Err(EditorError::IndexOutOfRange { index, len });
        }
        let entry = self.document.races.remove(index);
        self.pending = PendingOp::Idle;
        self.refresh_totals();
        debug!(index, "race entry removed");
        Ok(entry)
    }

    /// Switches the active mode. The inactive record's data is kept.
    pub fn set_mode(&mut self, mode: Mode) {
        self.document.mode = mode;
    }

    /// Sets a user-authored field of the fictional record.
    pub fn set_fictional(&mut self, field: FictionalField, value: impl Into<String>) {
        field.apply(&mut self.document.fictional, value.into());
    }

    /// Sets a user-authored field of the original record.
    pub fn set_original(&mut self, field: OriginalField, value: impl Into<String>) {
        field.apply(&mut self.document.original, value.into());
    }

    /// Rewrites the cached projection fields from the current race
    /// list. Both records carry the career summary; prize money belongs
    /// to the fictional record and the fan count to the original one.
    fn refresh_totals(&mut self) {
        let totals = compute_totals(&self.document.races);
        self.document.fictional.total_prize = format_prize(totals.total_prize);
        self.document.original.total_fans = format_fans(totals.total_fans);
        self.document.fictional.total_results = totals.summary.clone();
        self.document.original.total_results = totals.summary;
    }
}
