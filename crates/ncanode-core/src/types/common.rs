use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status literal NCANode uses for a good OCSP/CRL answer
pub const STATUS_ACTIVE: &str = "ACTIVE";

/// Revocation status reported by NCANode for OCSP or CRL checks
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RevocationStatus {
    /// Certificate is not revoked
    Active,
    /// Certificate was revoked by the issuer
    Revoked,
    /// The responder did not know the certificate
    Unknown,
    /// Any status this client does not know about
    Other(String),
}

impl RevocationStatus {
    /// Returns true only for [`RevocationStatus::Active`]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl From<&str> for RevocationStatus {
    fn from(s: &str) -> Self {
        match s {
            STATUS_ACTIVE => Self::Active,
            "REVOKED" => Self::Revoked,
            "UNKNOWN" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for RevocationStatus {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<RevocationStatus> for String {
    fn from(status: RevocationStatus) -> Self {
        status.to_string()
    }
}

impl std::fmt::Display for RevocationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "{STATUS_ACTIVE}"),
            Self::Revoked => write!(f, "REVOKED"),
            Self::Unknown => write!(f, "UNKNOWN"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

/// Loose truthiness used for server flags: `null`, `false`, `0`, `""`, `"0"`
/// and empty containers are all false.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Parse a certificate timestamp.
///
/// Accepts RFC 3339, the same with a space instead of `T`, and zone-less
/// date-times or plain dates, which are taken as UTC.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z", "%Y-%m-%dT%H:%M:%S%.f%z"] {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
