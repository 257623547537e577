//! A minimal in-memory calculator that tracks a running integer total and
//! supports undo/redo of arithmetic operations.
//!
//! [`EventSourcer`] keeps the accumulator and two stacks of deltas, one for
//! applied operations and one for undone ones. The whole state is in-memory
//! and per-instance; nothing is persisted and no configuration is read.
//!
//! ```
//! use tally::EventSourcer;
//!
//! let mut sourcer = EventSourcer::new();
//! sourcer.add(5);
//! sourcer.subtract(3);
//! assert_eq!(sourcer.value(), 2);
//! sourcer.undo();
//! assert_eq!(sourcer.value(), 5);
//! sourcer.redo();
//! assert_eq!(sourcer.value(), 2);
//! ```

pub use crate::{
    data_structure::stack::{EmptyStackError, Stack},
    sourcer::{Delta, EventSourcer},
};

pub mod data_structure;
pub mod sourcer;
