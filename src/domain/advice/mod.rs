//! Advice module - the session-scoped community advice board.
//!
//! A plain CRUD list with like counting: seeded example entries, new
//! submissions prepended, likes incremented in place. Nothing here is
//! persisted beyond the session.

mod board;
mod entry;

pub use board::AdviceBoard;
pub use entry::AdviceEntry;
