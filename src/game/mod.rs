//! Pure game logic: pagination, search matching, and quiz question selection.
//!
//! Everything here is a pure function over data already fetched from the
//! database; no I/O, no shared state. Failure modes that belong to the
//! request domain (page out of range, quiz exhausted) are ordinary return
//! values, never errors — status-code mapping happens at the HTTP boundary.

mod paging;
mod search;
mod select;

pub use paging::{PageError, QUESTIONS_PER_PAGE, validate_page};
pub use search::matches;
pub use select::select_next;
