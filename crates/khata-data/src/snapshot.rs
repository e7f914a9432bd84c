use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Person, Transaction};

/// Version written into every exported snapshot document.
pub const SNAPSHOT_VERSION: &str = "1.0.0";

fn default_version() -> String {
    SNAPSHOT_VERSION.to_string()
}

/// The complete export of all persons and transactions at a
/// point in time. Also the on-disk backup file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "Utc::now")]
    pub export_date: DateTime<Utc>,
    pub persons: Vec<Person>,
    pub transactions: Vec<Transaction>,
}

impl Snapshot {
    pub fn new(persons: Vec<Person>, transactions: Vec<Transaction>) -> Self {
        Self {
            version: SNAPSHOT_VERSION.to_string(),
            export_date: Utc::now(),
            persons,
            transactions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TxnKind;

    #[test]
    fn test_snapshot_round_trip() {
        let person = Person::new("p1", "Alice");
        let tx = Transaction::new("t1", "p1", 100.0, TxnKind::Credit, None);
        let snapshot = Snapshot::new(vec![person], vec![tx]);

        let json = serde_json::to_string_pretty(&snapshot).unwrap();
        let decoded: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_snapshot_document_keys() {
        let snapshot = Snapshot::new(vec![], vec![]);
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["version"], SNAPSHOT_VERSION);
        assert!(json.get("exportDate").is_some());
        assert!(json["persons"].is_array());
        assert!(json["transactions"].is_array());
    }

    #[test]
    fn test_snapshot_version_defaults_when_missing() {
        let json = r#"{"persons": [], "transactions": []}"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
    }
}
