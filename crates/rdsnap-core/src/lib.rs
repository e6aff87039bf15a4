pub mod error;
pub mod page;
pub mod rank;
pub mod snapshot;

pub use error::CoreError;
pub use page::PageSize;
pub use rank::{compare_snapshots, rank, select_latest, sort_snapshots, NoneReason, Selection};
pub use snapshot::{Snapshot, STATUS_AVAILABLE};
