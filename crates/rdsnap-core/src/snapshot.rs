use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const STATUS_AVAILABLE: &str = "available";

/// One backup point of a database instance, as returned by the management API.
///
/// Only `status` and `snapshot_create_time` drive ranking. Every field the
/// API sends that is not named here lands in `extra` and is written back out
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(
        rename = "DBSnapshotIdentifier",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub db_snapshot_identifier: Option<String>,
    #[serde(
        rename = "DBInstanceIdentifier",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub db_instance_identifier: Option<String>,
    #[serde(rename = "Status", default, deserialize_with = "lenient::status")]
    pub status: String,
    #[serde(
        rename = "SnapshotCreateTime",
        default,
        deserialize_with = "lenient::create_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub snapshot_create_time: Option<DateTime<Utc>>,
    #[serde(rename = "Engine", default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(
        rename = "EngineVersion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub engine_version: Option<String>,
    #[serde(
        rename = "SnapshotType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub snapshot_type: Option<String>,
    #[serde(
        rename = "AllocatedStorage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub allocated_storage: Option<i64>,
    #[serde(
        rename = "AvailabilityZone",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub availability_zone: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Ranking fields decode leniently: a record with a null or mistyped status,
/// or an unparseable creation time, is kept and ranks as unusable.
mod lenient {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn status<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::String(s)) => s,
            _ => String::new(),
        })
    }

    pub fn create_time<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::String(s)) => DateTime::parse_from_rfc3339(&s)
                .ok()
                .map(|t| t.with_timezone(&Utc)),
            _ => None,
        })
    }
}

impl Snapshot {
    pub fn new(identifier: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            db_snapshot_identifier: Some(identifier.into()),
            db_instance_identifier: None,
            status: status.into(),
            snapshot_create_time: None,
            engine: None,
            engine_version: None,
            snapshot_type: None,
            allocated_storage: None,
            availability_zone: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_create_time(mut self, created: DateTime<Utc>) -> Self {
        self.snapshot_create_time = Some(created);
        self
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(instance.into());
        self
    }

    /// Exact, case-sensitive match on the `available` status.
    pub fn is_available(&self) -> bool {
        self.status == STATUS_AVAILABLE
    }

    /// Available and carrying a known creation time.
    pub fn is_usable(&self) -> bool {
        self.is_available() && self.snapshot_create_time.is_some()
    }

    pub fn identifier(&self) -> &str {
        self.db_snapshot_identifier.as_deref().unwrap_or("-")
    }
}
