//! Domain models: read-only projections of registry responses.
//!
//! Every entity is deserialized fresh from one response and discarded at the
//! end of the command. Serialization is lossless: JSON output mode re-emits
//! exactly the validated fields, with canonical UUID and RFC 3339 timestamp
//! forms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A named, versioned JSON-Schema definition stored in the registry.
///
/// `(name, version)` identifies a specific revision. When a lookup omits the
/// version, "latest" resolution is the service's contract; the client never
/// tie-breaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub id: Uuid,
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    /// JSON-Schema fragment with `properties` and `required`.
    pub schema_definition: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One stored log payload associated with a schema revision.
///
/// The client trusts the `schema_id` relationship and does not re-validate
/// `log_data` against the referenced schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub id: i64,
    pub schema_id: Uuid,
    pub log_data: Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SchemasResponse {
    pub schemas: Vec<Schema>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LogsResponse {
    pub logs: Vec<LogRecord>,
}

/// Query parameters for a log listing.
#[derive(Debug, Clone)]
pub struct LogQuery {
    /// Maximum number of records the service should return.
    pub limit: u32,
    /// 1-based result page.
    pub page: u32,
    /// Only logs created at or after this instant.
    pub since: Option<DateTime<Utc>>,
    /// Only logs created before this instant.
    pub until: Option<DateTime<Utc>>,
}

impl Default for LogQuery {
    fn default() -> Self {
        Self {
            limit: 10,
            page: 1,
            since: None,
            until: None,
        }
    }
}

impl LogQuery {
    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("limit", self.limit.to_string())];
        if self.page > 1 {
            params.push(("page", self.page.to_string()));
        }
        if let Some(since) = self.since {
            params.push(("date_begin", since.to_rfc3339()));
        }
        if let Some(until) = self.until {
            params.push(("date_end", until.to_rfc3339()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    const SCHEMA_FIXTURE: &str = r#"{
        "id": "a1b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d",
        "name": "orders",
        "version": "1.0.0",
        "description": "Order events",
        "schema_definition": {
            "type": "object",
            "properties": {"status": {"type": "string"}},
            "required": ["status"]
        },
        "created_at": "2024-03-01T10:15:30+00:00",
        "updated_at": "2024-03-02T08:00:00+00:00"
    }"#;

    #[test]
    fn schema_deserializes_canonical_fields() {
        let schema: Schema = serde_json::from_str(SCHEMA_FIXTURE).unwrap();
        assert_eq!(
            schema.id.to_string(),
            "a1b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d"
        );
        assert_eq!(schema.name, "orders");
        assert_eq!(schema.version, "1.0.0");
        assert_eq!(schema.description.as_deref(), Some("Order events"));
        assert_eq!(schema.created_at.to_rfc3339(), "2024-03-01T10:15:30+00:00");
    }

    #[test]
    fn schema_json_roundtrip_is_lossless() {
        let original: Value = serde_json::from_str(SCHEMA_FIXTURE).unwrap();
        let schema: Schema = serde_json::from_value(original.clone()).unwrap();
        let emitted = serde_json::to_value(&schema).unwrap();

        let original_keys: Vec<&String> = original.as_object().unwrap().keys().collect();
        let emitted_keys: Vec<&String> = emitted.as_object().unwrap().keys().collect();
        assert_eq!(emitted_keys.len(), original_keys.len());
        for key in original_keys {
            assert!(emitted_keys.contains(&key), "missing field {key}");
        }

        assert_eq!(emitted["id"], original["id"]);
        assert_eq!(emitted["name"], original["name"]);
        assert_eq!(emitted["version"], original["version"]);
        assert_eq!(emitted["description"], original["description"]);
        assert_eq!(emitted["schema_definition"], original["schema_definition"]);
    }

    #[test]
    fn schema_without_description_emits_null() {
        let mut value: Value = serde_json::from_str(SCHEMA_FIXTURE).unwrap();
        value.as_object_mut().unwrap().remove("description");
        let schema: Schema = serde_json::from_value(value).unwrap();
        assert_eq!(schema.description, None);
        let emitted = serde_json::to_value(&schema).unwrap();
        assert_eq!(emitted["description"], Value::Null);
    }

    #[test]
    fn logs_envelope_ignores_pagination_metadata() {
        let body = r#"{
            "logs": [{
                "id": 7,
                "schema_id": "a1b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d",
                "log_data": {"status": "shipped"},
                "created_at": "2024-03-01T10:15:30+00:00"
            }],
            "pagination": {"page": 1, "limit": 10, "total": 1, "total_pages": 1}
        }"#;
        let envelope: LogsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.logs.len(), 1);
        assert_eq!(envelope.logs[0].id, 7);
        assert_eq!(envelope.logs[0].log_data["status"], "shipped");
    }

    #[test]
    fn log_query_defaults_send_only_limit() {
        let params = LogQuery::default().to_params();
        assert_eq!(params, vec![("limit", "10".to_string())]);
    }

    #[test]
    fn log_query_includes_page_and_window() {
        let query = LogQuery {
            limit: 25,
            page: 3,
            since: Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
            until: None,
        };
        let params = query.to_params();
        assert_eq!(params[0], ("limit", "25".to_string()));
        assert_eq!(params[1], ("page", "3".to_string()));
        assert_eq!(params[2].0, "date_begin");
        assert!(params[2].1.starts_with("2024-03-01T00:00:00"));
    }
}
