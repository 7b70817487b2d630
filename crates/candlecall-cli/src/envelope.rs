use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::CliError;

/// Schema version stamped on every envelope.
pub const SCHEMA_VERSION: &str = "v1.0.0";

/// Standard response envelope for all machine-readable outputs.
///
/// A command either fills the envelope completely or fails with a
/// [`CliError`]; there is no partial-data state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub meta: EnvelopeMeta,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn success(meta: EnvelopeMeta, data: T) -> Self {
        Self { meta, data }
    }
}

/// Metadata attached to every envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvelopeMeta {
    pub request_id: String,
    pub schema_version: String,
    pub generated_at: String,
    /// Seed that drove the output, echoed so any result can be replayed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub latency_ms: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl EnvelopeMeta {
    pub fn new(seed: Option<u64>, latency_ms: u64) -> Result<Self, CliError> {
        Ok(Self {
            request_id: Uuid::new_v4().to_string(),
            schema_version: SCHEMA_VERSION.to_owned(),
            generated_at: OffsetDateTime::now_utc().format(&Rfc3339)?,
            seed,
            latency_ms,
            warnings: Vec::new(),
        })
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_carries_a_v4_request_id_and_schema_version() {
        let meta = EnvelopeMeta::new(Some(7), 12).expect("meta builds");

        let parsed = Uuid::parse_str(&meta.request_id).expect("request_id parses");
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(meta.schema_version, SCHEMA_VERSION);
        assert_eq!(meta.seed, Some(7));
    }

    #[test]
    fn empty_warnings_and_absent_seed_stay_out_of_the_json() {
        let meta = EnvelopeMeta::new(None, 3).expect("meta builds");
        let envelope = Envelope::success(meta, serde_json::json!({ "ok": true }));

        let rendered = serde_json::to_string(&envelope).expect("serializes");
        assert!(!rendered.contains("warnings"));
        assert!(!rendered.contains("seed"));
    }

    #[test]
    fn pushed_warnings_ride_in_meta() {
        let mut meta = EnvelopeMeta::new(None, 3).expect("meta builds");
        meta.push_warning("unbounded output");
        let envelope = Envelope::success(meta, serde_json::json!({}));

        let rendered = serde_json::to_string(&envelope).expect("serializes");
        assert!(rendered.contains("\"warnings\":[\"unbounded output\"]"));
    }
}
