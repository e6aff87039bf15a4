use rdsnap_core::{NoneReason, Selection, Snapshot};

/// Format a key-value pair for display.
pub fn kv(key: &str, value: &str) -> String {
    format!("{key:>20}: {value}")
}

/// Format a header line.
pub fn header(title: &str) -> String {
    format!("=== {title} ===")
}

fn created(snap: &Snapshot) -> String {
    snap.snapshot_create_time
        .map(|t| t.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
        .unwrap_or_else(|| "-".to_string())
}

fn row(snap: &Snapshot) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        snap.identifier(),
        snap.db_instance_identifier.as_deref().unwrap_or("-"),
        snap.status,
        created(snap)
    )
}

fn detail(snap: &Snapshot) -> Vec<String> {
    let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
    vec![
        kv("snapshot", snap.identifier()),
        kv("instance", &opt(&snap.db_instance_identifier)),
        kv("status", &snap.status),
        kv("created", &created(snap)),
        kv("engine", &opt(&snap.engine)),
        kv("engine version", &opt(&snap.engine_version)),
        kv("type", &opt(&snap.snapshot_type)),
        kv(
            "allocated storage",
            &snap
                .allocated_storage
                .map(|gb| format!("{gb} GiB"))
                .unwrap_or_else(|| "-".to_string()),
        ),
        kv("availability zone", &opt(&snap.availability_zone)),
    ]
}

pub fn render_text(selection: &Selection) -> String {
    let mut lines = Vec::new();
    match selection {
        Selection::All(snaps) => {
            lines.push(header(&format!("{} snapshot(s)", snaps.len())));
            lines.extend(snaps.iter().map(row));
        }
        Selection::Latest(snap) => {
            lines.push(header("latest available snapshot"));
            lines.extend(detail(snap));
        }
        Selection::NoneFound(NoneReason::Empty) => {
            lines.push("No available snapshot found (no snapshots listed)".to_string());
        }
        Selection::NoneFound(NoneReason::NoneAvailable { examined }) => {
            lines.push(format!(
                "No available snapshot found ({examined} snapshot(s) examined)"
            ));
        }
    }
    lines.join("\n")
}

pub fn render_json(selection: &Selection) -> anyhow::Result<String> {
    let out = match selection {
        Selection::All(snaps) => serde_json::to_string_pretty(snaps)?,
        Selection::Latest(snap) => serde_json::to_string_pretty(snap)?,
        Selection::NoneFound(_) => "null".to_string(),
    };
    Ok(out)
}
