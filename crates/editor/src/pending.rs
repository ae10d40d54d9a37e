//! Pending-operation state machine.

/// The editor's transient state for an uncommitted race-list operation.
///
/// At most one pending operation exists at a time. Entering edit or
/// insert mode is unconditional: any prior pending state is discarded,
/// never queued. Deleting an entry resets to [`PendingOp::Idle`]
/// regardless of index relationship (no index adjustment is attempted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingOp {
    /// No operation in progress; commits prepend at the head.
    #[default]
    Idle,
    /// Editing the entry at this index in place.
    Editing(usize),
    /// Inserting a new entry at this position.
    Inserting(usize),
}

impl PendingOp {
    /// True when no edit or insert is in progress.
    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}
