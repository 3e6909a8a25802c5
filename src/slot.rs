//! Single-slot handoff between interrupt context and the polling loop.

use core::cell::Cell;
use critical_section::Mutex;

use crate::types::PressEvent;

/// Holds at most one unconsumed [`PressEvent`].
///
/// The producer stores a complete event, the consumer swaps it out and leaves
/// the slot empty. Neither side ever edits an event in place, and every access
/// runs inside a critical section, so a press written from an interrupt cannot
/// be observed half-written by the loop.
pub struct PressSlot<I> {
    cell: Mutex<Cell<Option<PressEvent<I>>>>,
}

impl<I> PressSlot<I> {
    /// Creates an empty slot.
    pub const fn new() -> Self {
        Self {
            cell: Mutex::new(Cell::new(None)),
        }
    }

    /// Stores `event` if the slot is empty.
    ///
    /// # Errors
    /// Returns the event unchanged when an earlier one has not been taken yet.
    pub fn offer(&self, event: PressEvent<I>) -> Result<(), PressEvent<I>> {
        critical_section::with(|cs| {
            let cell = self.cell.borrow(cs);
            match cell.take() {
                Some(waiting) => {
                    cell.set(Some(waiting));
                    Err(event)
                }
                None => {
                    cell.set(Some(event));
                    Ok(())
                }
            }
        })
    }

    /// Takes the waiting event, leaving the slot empty.
    pub fn take(&self) -> Option<PressEvent<I>> {
        critical_section::with(|cs| self.cell.borrow(cs).take())
    }

    /// Returns true while an event is waiting.
    pub fn is_occupied(&self) -> bool {
        critical_section::with(|cs| {
            let cell = self.cell.borrow(cs);
            let waiting = cell.take();
            let occupied = waiting.is_some();
            cell.set(waiting);
            occupied
        })
    }
}

impl<I> Default for PressSlot<I> {
    fn default() -> Self {
        Self::new()
    }
}
