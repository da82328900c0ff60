//! In-process adapters: fixed readers and clocks.

mod clock;
mod readers;

pub use clock::{FixedClock, SystemClock};
pub use readers::{InMemoryNoteReader, InMemoryPatientReader};
