//! Filesystem operations: listing, collision-free naming and the move primitive.

mod atomic;
mod copy;
mod file_move;
mod helpers;
mod io_copy;
mod listing;
mod meta;
mod resolve;
mod util;

pub use copy::copy_then_remove;
pub use file_move::{MoveMethod, move_file};
pub use helpers::io_hint;
pub use listing::{FileRecord, list_source};
pub use resolve::{MAX_NAME_ATTEMPTS, candidate_name, resolve_destination};
