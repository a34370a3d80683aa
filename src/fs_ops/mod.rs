//! Filesystem operations: inbox listing and document moves.

mod atomic;
mod copy;
mod file_move;
mod helpers;
mod inbox;
mod util;

pub use file_move::move_document;
pub use inbox::list_inbox;
