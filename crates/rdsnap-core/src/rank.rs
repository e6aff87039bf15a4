//! Availability-aware ordering and latest-only selection.

use std::cmp::Ordering;

use crate::Snapshot;

/// Why latest-only selection came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoneReason {
    /// Nothing was listed at all.
    Empty,
    /// Snapshots were listed but none had the `available` status.
    NoneAvailable { examined: usize },
}

/// Result of ranking a fetched collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Every snapshot, ascending: usable ones by creation time, then the rest.
    All(Vec<Snapshot>),
    /// The most recent `available` snapshot.
    Latest(Snapshot),
    NoneFound(NoneReason),
}

/// Total order used for ranking.
///
/// Usable snapshots (available with a creation time) come first, earliest
/// first. Everything else compares equal and sorts after them, so relative
/// order among unusable entries or identical timestamps is unspecified.
pub fn compare_snapshots(a: &Snapshot, b: &Snapshot) -> Ordering {
    match (usable_time(a), usable_time(b)) {
        (Some(ta), Some(tb)) => ta.cmp(&tb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn usable_time(snap: &Snapshot) -> Option<chrono::DateTime<chrono::Utc>> {
    snap.snapshot_create_time.filter(|_| snap.is_available())
}

pub fn sort_snapshots(snaps: &mut [Snapshot]) {
    snaps.sort_unstable_by(compare_snapshots);
}

/// Scan a sorted slice from the end for the first `available` snapshot.
///
/// Only the status is checked here; an available snapshot without a creation
/// time is still eligible.
pub fn select_latest(sorted: &[Snapshot]) -> Option<&Snapshot> {
    latest_index(sorted).map(|idx| &sorted[idx])
}

fn latest_index(sorted: &[Snapshot]) -> Option<usize> {
    sorted.iter().rposition(Snapshot::is_available)
}

/// Sort `snaps` and, when `latest_only` is set, reduce them to one entry.
pub fn rank(mut snaps: Vec<Snapshot>, latest_only: bool) -> Selection {
    sort_snapshots(&mut snaps);

    let usable = snaps.iter().filter(|s| s.is_usable()).count();
    tracing::debug!(
        total = snaps.len(),
        usable,
        unusable = snaps.len() - usable,
        "ranked snapshots"
    );

    if !latest_only {
        return Selection::All(snaps);
    }

    if snaps.is_empty() {
        return Selection::NoneFound(NoneReason::Empty);
    }

    let examined = snaps.len();
    match latest_index(&snaps) {
        Some(idx) => Selection::Latest(snaps.swap_remove(idx)),
        None => Selection::NoneFound(NoneReason::NoneAvailable { examined }),
    }
}
