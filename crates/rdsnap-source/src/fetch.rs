use std::collections::HashSet;

use rdsnap_core::{PageSize, Snapshot};

use crate::source::SnapshotSource;
use crate::SourceError;

/// Follow continuation markers until the listing is exhausted.
///
/// Pages are requested one at a time and appended in arrival order. The
/// first failing page aborts the whole listing; nothing accumulated so far
/// is returned.
pub async fn fetch_all_snapshots<S>(
    source: &mut S,
    filter: &str,
    page_size: PageSize,
) -> Result<Vec<Snapshot>, SourceError>
where
    S: SnapshotSource + ?Sized,
{
    let mut snapshots = Vec::new();
    let mut marker: Option<String> = None;
    let mut seen_markers: HashSet<String> = HashSet::new();
    let mut page_no: usize = 0;

    loop {
        page_no += 1;
        let page = source
            .fetch_page(filter, page_size, marker.as_deref())
            .await?;

        let next = page.marker.filter(|m| !m.is_empty());
        tracing::debug!(
            page = page_no,
            records = page.snapshots.len(),
            more = next.is_some(),
            "fetched snapshot page"
        );
        snapshots.extend(page.snapshots);

        match next {
            Some(next) => {
                // A marker handed out twice means the listing cycles.
                if !seen_markers.insert(next.clone()) {
                    return Err(SourceError::Pagination(format!(
                        "remote repeated marker {next:?} on page {page_no}"
                    )));
                }
                marker = Some(next);
            }
            None => break,
        }
    }

    tracing::info!(
        filter,
        pages = page_no,
        total = snapshots.len(),
        "snapshot listing complete"
    );
    Ok(snapshots)
}
