pub mod todo_row;
pub mod tombstone_row;

pub use todo_row::TodoRow;
pub use tombstone_row::TombstoneRow;
