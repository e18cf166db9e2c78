//! Game rules for ring sorting.
//!
//! Pure functions over a board. Rules are kept apart from peg storage so
//! contracts and the session can compose them.

pub mod win;

pub use win::{WinSummary, evaluate};
