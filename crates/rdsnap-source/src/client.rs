use rdsnap_core::{PageSize, Snapshot};

use crate::fetch::fetch_all_snapshots;
use crate::http_source::HttpSnapshotSource;
use crate::source::{SnapshotSource, SourceConfig};
use crate::SourceError;

/// Front door for listing snapshots from a configured source.
pub struct SnapshotClient {
    inner: Box<dyn SnapshotSource>,
    page_size: PageSize,
}

impl SnapshotClient {
    pub fn connect(config: SourceConfig) -> Result<Self, SourceError> {
        let source = HttpSnapshotSource::from_config(config)?;
        Ok(Self::with_source(Box::new(source)))
    }

    pub fn with_source(inner: Box<dyn SnapshotSource>) -> Self {
        Self {
            inner,
            page_size: PageSize::default(),
        }
    }

    pub fn page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Every snapshot matching `instance_filter`, across all pages.
    pub async fn list_snapshots(
        &mut self,
        instance_filter: &str,
    ) -> Result<Vec<Snapshot>, SourceError> {
        fetch_all_snapshots(&mut *self.inner, instance_filter, self.page_size).await
    }
}
