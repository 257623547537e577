use derive_more::Display;

use crate::data_structure::stack::Stack;

/// The net effect of one applied operation on the accumulator.
pub type Delta = i64;

/// A running integer total with undo/redo over the applied-operation history.
///
/// Two stacks of deltas carry the history: `applied` holds the operations
/// currently reflected in the accumulator, `redo` holds the inverses of
/// undone operations. Undo and redo each move one element between the stacks,
/// negating it on the way, so both directions share the same
/// subtract-and-restore shape rather than keeping a separate log of original
/// deltas.
///
/// Fresh operations never clear the redo stack, so history undone earlier
/// stays replayable even after new operations land on top of it. The redo
/// stack only empties by being drained through [`EventSourcer::redo`].
///
/// Every operation is synchronous and touches a stack and the accumulator
/// non-atomically; sharing an instance across threads needs one external lock
/// around every call.
#[derive(Debug, Display)]
#[display(fmt = "{}", value)]
pub struct EventSourcer {
    value: Delta,
    applied: Stack<Delta>,
    redo: Stack<Delta>,
}

impl Default for EventSourcer {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSourcer {
    pub fn new() -> Self {
        Self {
            value: 0,
            applied: Stack::new(),
            redo: Stack::new(),
        }
    }

    /// The current accumulator value: the sum of all applied deltas.
    pub fn value(&self) -> Delta {
        self.value
    }

    /// Applies `n` to the total and records it in the history.
    pub fn add(&mut self, n: Delta) {
        self.applied.push(n);
        self.value += n;
        log::trace!("Applied delta {} for value {}", n, self.value);
    }

    /// Subtracts `n` from the total, recorded as a negated delta.
    pub fn subtract(&mut self, n: Delta) {
        self.add(-n);
    }

    /// Reverts the most recent applied operation. No-op when the applied
    /// history is empty. The inverse of the undone delta is kept so that
    /// [`EventSourcer::redo`] can restore it.
    pub fn undo(&mut self) {
        if let Ok(delta) = self.applied.pop() {
            self.value -= delta;
            self.redo.push(-delta);
            log::trace!("Undid delta {} to value {}", delta, self.value);
        }
    }

    /// Reapplies the most recently undone operation. No-op when there is
    /// nothing to redo.
    pub fn redo(&mut self) {
        if let Ok(delta) = self.redo.pop() {
            // The redo stack holds inverses, so subtracting restores the
            // original effect and negating again recovers the original delta.
            self.value -= delta;
            self.applied.push(-delta);
            log::trace!("Redid delta {} to value {}", -delta, self.value);
        }
    }

    /// Performs up to `n` undos, stopping short once the applied history is
    /// exhausted.
    pub fn bulk_undo(&mut self, n: usize) {
        for _ in 0..n {
            if self.applied.is_empty() {
                break;
            }
            self.undo();
        }
    }

    /// Performs up to `n` redos, stopping short once the redo history is
    /// exhausted.
    pub fn bulk_redo(&mut self, n: usize) {
        for _ in 0..n {
            if self.redo.is_empty() {
                break;
            }
            self.redo();
        }
    }
}
