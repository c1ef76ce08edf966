//! Rendering strategies for registry entities.
//!
//! Three mutually exclusive modes per command, selected in fixed priority:
//! JSON (lossless re-serialization of the validated models, bypassing every
//! truncation rule), tabular (fixed column set per entity), and expanded
//! tabular (log views only, with the preview column carrying the full
//! pretty-printed payload).

use chrono::{DateTime, Utc};
use logreg_client::{LogRecord, Schema, field_descriptors};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::ui;

pub mod table;

mod highlight;

pub use highlight::highlight_json;

const PREVIEW_CHARS: usize = 50;

/// Machine-readable output: pretty JSON of the validated model set. Must be
/// lossless, so no truncation or table formatting applies.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// First 8 characters of the canonical UUID string plus a `...` marker.
#[must_use]
pub fn short_id(id: &Uuid) -> String {
    let canonical = id.to_string();
    format!("{}...", &canonical[..8])
}

/// Canonical UUID when `full`, short form otherwise.
#[must_use]
pub fn display_id(id: &Uuid, full: bool) -> String {
    if full {
        id.to_string()
    } else {
        short_id(id)
    }
}

/// Bounded preview: at most 50 characters, `...`-marked if and only if the
/// input exceeded the bound.
#[must_use]
pub fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let head: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{head}...")
}

/// Message for an empty log listing. An empty result is not a failure, so
/// the exit code stays 0.
#[must_use]
pub fn no_logs_message(schema_name: &str) -> String {
    format!("No logs found for schema '{schema_name}'")
}

pub const NO_SCHEMAS_MESSAGE: &str = "No schemas found";

fn table_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn compact_json(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| String::from("<invalid-json>"))
}

fn expanded_payload(value: &Value, color: bool) -> String {
    let pretty =
        serde_json::to_string_pretty(value).unwrap_or_else(|_| String::from("<invalid-json>"));
    if color {
        highlight_json(&pretty)
    } else {
        pretty
    }
}

/// Tabular listing of schemas: ID / Name / Version / Description.
#[must_use]
pub fn schema_list_table(schemas: &[Schema], full: bool) -> String {
    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.color,
    };
    let headers = ["ID", "Name", "Version", "Description"];
    let rows = schemas
        .iter()
        .map(|schema| {
            vec![
                display_id(&schema.id, full),
                schema.name.clone(),
                schema.version.clone(),
                preview(schema.description.as_deref().unwrap_or_default()),
            ]
        })
        .collect::<Vec<_>>();
    format!(
        "Schemas\n\n{}",
        table::render_entity_table(&headers, &rows, options)
    )
}

/// Detail view of one schema: summary key/value table followed by the
/// definition table derived from its JSON-Schema fragment.
#[must_use]
pub fn schema_detail(schema: &Schema) -> String {
    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.color,
    };

    let headers = ["Field", "Value"];
    let rows = vec![
        vec!["ID".to_string(), schema.id.to_string()],
        vec!["Name".to_string(), schema.name.clone()],
        vec!["Version".to_string(), schema.version.clone()],
        vec![
            "Description".to_string(),
            schema
                .description
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
        ],
        vec![
            "Created At".to_string(),
            table_timestamp(&schema.created_at),
        ],
        vec![
            "Updated At".to_string(),
            table_timestamp(&schema.updated_at),
        ],
    ];
    let summary = table::render_entity_table(&headers, &rows, options);

    let fields = field_descriptors(&schema.schema_definition);
    let def_headers = ["Field", "Type", "Required", "Constraints"];
    let def_rows = fields
        .iter()
        .map(|field| {
            vec![
                field.name.clone(),
                field.type_name.clone(),
                if field.required {
                    "\u{2713}".to_string()
                } else {
                    String::new()
                },
                field.constraints_text(),
            ]
        })
        .collect::<Vec<_>>();
    let definition = table::render_entity_table(&def_headers, &def_rows, options);

    format!(
        "Schema: {}\n\n{summary}\n\nDefinition\n\n{definition}",
        schema.name
    )
}

/// Tabular listing of logs: Log ID / Schema ID / Created At / Data Preview.
/// With `expand`, the preview column carries the full pretty-printed payload
/// and width fitting is disabled: expanded data is never truncated.
#[must_use]
pub fn log_list_table(schema_name: &str, logs: &[LogRecord], full: bool, expand: bool) -> String {
    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: if expand { None } else { prefs.term_width },
        color: prefs.color,
    };
    let headers = ["Log ID", "Schema ID", "Created At", "Data Preview"];
    let rows = logs
        .iter()
        .map(|log| log_row(log, full, expand, options.color))
        .collect::<Vec<_>>();
    format!(
        "Logs for Schema: {schema_name}\n\n{}",
        table::render_entity_table(&headers, &rows, options)
    )
}

/// Detail view of one log record.
#[must_use]
pub fn log_detail(log: &LogRecord, full: bool, expand: bool) -> String {
    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: if expand { None } else { prefs.term_width },
        color: prefs.color,
    };
    let data = if expand {
        expanded_payload(&log.log_data, options.color)
    } else {
        preview(&compact_json(&log.log_data))
    };
    let headers = ["Field", "Value"];
    let rows = vec![
        vec!["Log ID".to_string(), log.id.to_string()],
        vec!["Schema ID".to_string(), display_id(&log.schema_id, full)],
        vec!["Created At".to_string(), table_timestamp(&log.created_at)],
        vec!["Data".to_string(), data],
    ];
    format!(
        "Log: {}\n\n{}",
        log.id,
        table::render_entity_table(&headers, &rows, options)
    )
}

fn log_row(log: &LogRecord, full: bool, expand: bool, color: bool) -> Vec<String> {
    let data = if expand {
        expanded_payload(&log.log_data, color)
    } else {
        preview(&compact_json(&log.log_data))
    };
    vec![
        log.id.to_string(),
        display_id(&log.schema_id, full),
        table_timestamp(&log.created_at),
        data,
    ]
}
