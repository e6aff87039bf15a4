use async_trait::async_trait;

use rdsnap_core::{PageSize, Snapshot};

use crate::SourceError;

/// Where to list snapshots from.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub base_url: String,
    pub bearer_token: Option<String>,
}

/// One page of a snapshot listing.
#[derive(Debug, Clone, Default)]
pub struct SnapshotPage {
    pub snapshots: Vec<Snapshot>,
    /// Continuation marker; `None` on the last page.
    pub marker: Option<String>,
}

/// A paginated snapshot listing capability.
#[async_trait]
pub trait SnapshotSource: Send {
    /// Fetch one page. An empty `filter` lists snapshots of every instance;
    /// `marker` is `None` on the first call.
    async fn fetch_page(
        &mut self,
        filter: &str,
        page_size: PageSize,
        marker: Option<&str>,
    ) -> Result<SnapshotPage, SourceError>;
}

