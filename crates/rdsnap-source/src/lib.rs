pub mod client;
pub mod error;
pub mod fetch;
pub mod http_source;
pub mod source;

pub use client::SnapshotClient;
pub use error::SourceError;
pub use fetch::fetch_all_snapshots;
pub use source::{SnapshotPage, SnapshotSource, SourceConfig};
