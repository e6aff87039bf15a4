use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use rdsnap_core::{rank, NoneReason, PageSize, Selection, Snapshot};
use rdsnap_source::{SnapshotClient, SnapshotPage, SnapshotSource, SourceError};

type Calls = Arc<Mutex<Vec<(String, usize, Option<String>)>>>;

/// Replays a fixed list of pages and records every call it receives.
struct PagedSource {
    pages: VecDeque<Result<SnapshotPage, SourceError>>,
    calls: Calls,
}

#[async_trait]
impl SnapshotSource for PagedSource {
    async fn fetch_page(
        &mut self,
        filter: &str,
        page_size: PageSize,
        marker: Option<&str>,
    ) -> Result<SnapshotPage, SourceError> {
        self.calls.lock().unwrap().push((
            filter.to_string(),
            page_size.get(),
            marker.map(str::to_string),
        ));
        self.pages
            .pop_front()
            .unwrap_or_else(|| Err(SourceError::ConnectionFailed("no more pages".into())))
    }
}

fn scripted_client(pages: Vec<Result<SnapshotPage, SourceError>>) -> (SnapshotClient, Calls) {
    let calls = Calls::default();
    let source = PagedSource {
        pages: pages.into(),
        calls: calls.clone(),
    };
    (SnapshotClient::with_source(Box::new(source)), calls)
}

/// Split `snaps` into pages of at most `size`, chained with markers.
fn paginate(snaps: Vec<Snapshot>, size: usize) -> Vec<Result<SnapshotPage, SourceError>> {
    let chunks: Vec<Vec<Snapshot>> = snaps.chunks(size).map(<[Snapshot]>::to_vec).collect();
    if chunks.is_empty() {
        return vec![Ok(SnapshotPage::default())];
    }
    let last = chunks.len() - 1;
    chunks
        .into_iter()
        .enumerate()
        .map(|(i, snapshots)| {
            Ok(SnapshotPage {
                snapshots,
                marker: (i < last).then(|| format!("marker-{}", i + 1)),
            })
        })
        .collect()
}

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 2, hour, 0, 0).unwrap()
}

fn snap(id: &str, status: &str, hour: Option<u32>) -> Snapshot {
    let s = Snapshot::new(id, status).with_instance("orders");
    match hour {
        Some(h) => s.with_create_time(at(h)),
        None => s,
    }
}

async fn fetch_and_rank(pages: Vec<Result<SnapshotPage, SourceError>>, latest: bool) -> Selection {
    let (mut client, _) = scripted_client(pages);
    let snaps = client.list_snapshots("orders").await.unwrap();
    rank(snaps, latest)
}

#[tokio::test]
async fn pagination_collects_every_record_once() {
    let input: Vec<Snapshot> = (0..23)
        .map(|i| snap(&format!("snap-{i:02}"), "available", Some(i % 24)))
        .collect();
    let (client, calls) = scripted_client(paginate(input.clone(), 5));
    let mut client = client.page_size(PageSize::new(5).unwrap());

    let fetched = client.list_snapshots("orders").await.unwrap();
    assert_eq!(fetched.len(), input.len());
    let unique: HashSet<_> = fetched.iter().map(|s| s.identifier().to_string()).collect();
    assert_eq!(unique.len(), input.len());

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 5);
    assert_eq!(calls[0], ("orders".to_string(), 5, None));
    assert_eq!(calls[4].2.as_deref(), Some("marker-4"));
}

#[tokio::test]
async fn failing_page_returns_no_partial_results() {
    let mut pages = paginate(
        (0..10).map(|i| snap(&format!("s{i}"), "available", Some(i))).collect(),
        4,
    );
    pages[1] = Err(SourceError::Remote {
        status: 500,
        body: "internal failure".into(),
    });
    let (mut client, calls) = scripted_client(pages);

    let err = client.list_snapshots("orders").await.unwrap_err();
    assert!(err.to_string().contains("internal failure"));
    assert_eq!(calls.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn latest_returns_newest_available_across_pages() {
    let pages = vec![
        Ok(SnapshotPage {
            snapshots: vec![snap("noon", "available", Some(12))],
            marker: Some("next".into()),
        }),
        Ok(SnapshotPage {
            snapshots: vec![
                snap("broken", "unavailable", None),
                snap("ten", "available", Some(10)),
            ],
            marker: None,
        }),
    ];
    match fetch_and_rank(pages, true).await {
        Selection::Latest(s) => assert_eq!(s.identifier(), "noon"),
        other => panic!("expected Latest, got {other:?}"),
    }
}

#[tokio::test]
async fn latest_skips_trailing_non_available() {
    let pages = paginate(
        vec![
            snap("nine", "available", Some(9)),
            snap("going", "deleting", None),
        ],
        100,
    );
    match fetch_and_rank(pages, true).await {
        Selection::Latest(s) => assert_eq!(s.identifier(), "nine"),
        other => panic!("expected Latest, got {other:?}"),
    }
}

#[tokio::test]
async fn latest_reports_none_when_nothing_available() {
    let pages = paginate(
        vec![snap("a", "creating", None), snap("b", "deleting", None)],
        1,
    );
    assert_eq!(
        fetch_and_rank(pages, true).await,
        Selection::NoneFound(NoneReason::NoneAvailable { examined: 2 })
    );
}

#[tokio::test]
async fn empty_listing() {
    assert_eq!(
        fetch_and_rank(paginate(Vec::new(), 100), false).await,
        Selection::All(Vec::new())
    );
    assert_eq!(
        fetch_and_rank(paginate(Vec::new(), 100), true).await,
        Selection::NoneFound(NoneReason::Empty)
    );
}

#[tokio::test]
async fn full_listing_orders_usable_first() {
    let pages = paginate(
        vec![
            snap("late", "available", Some(18)),
            snap("creating", "creating", Some(20)),
            snap("early", "available", Some(6)),
            snap("untimed", "available", None),
            snap("mid", "available", Some(12)),
        ],
        2,
    );
    let Selection::All(all) = fetch_and_rank(pages, false).await else {
        panic!("expected full listing");
    };
    let ids: Vec<_> = all.iter().map(Snapshot::identifier).collect();
    assert_eq!(&ids[..3], &["early", "mid", "late"]);

    let tail: HashSet<_> = ids[3..].iter().copied().collect();
    assert_eq!(tail, HashSet::from(["creating", "untimed"]));
}
