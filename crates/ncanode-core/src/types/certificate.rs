use super::common::{is_truthy, parse_timestamp, RevocationStatus};
use crate::error::{NcaNodeError, Result};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Raw field holding the start of the validity window
pub const FIELD_NOT_BEFORE: &str = "notBefore";
/// Raw field holding the end of the validity window
pub const FIELD_NOT_AFTER: &str = "notAfter";
/// Raw field holding the issuance chain
pub const FIELD_CHAIN: &str = "chain";

/// Certificate information as returned by NCANode.
///
/// A frozen snapshot of the server answer: the raw fields are kept verbatim
/// and cannot be changed, the validity window is parsed up front and the
/// chain of trust is built as an owned tree of child certificates.
#[derive(Debug, Clone, PartialEq)]
pub struct Certificate {
    raw: Map<String, Value>,
    not_before: DateTime<Utc>,
    not_after: DateTime<Utc>,
    chain: Vec<Certificate>,
}

impl Certificate {
    /// Build a certificate from the raw field mapping.
    ///
    /// Fails with [`NcaNodeError::MalformedDate`] if `notBefore` or
    /// `notAfter` is missing or unparseable, here or anywhere in the chain.
    pub fn from_raw(raw: Map<String, Value>) -> Result<Self> {
        let not_before = date_field(&raw, FIELD_NOT_BEFORE)?;
        let not_after = date_field(&raw, FIELD_NOT_AFTER)?;

        let chain = match raw.get(FIELD_CHAIN) {
            Some(Value::Array(entries)) => entries
                .iter()
                .cloned()
                .map(Self::from_value)
                .collect::<Result<Vec<_>>>()?,
            _ => Vec::new(),
        };

        Ok(Self {
            raw,
            not_before,
            not_after,
            chain,
        })
    }

    /// Build a certificate from any JSON value; non-objects are read as an
    /// empty mapping and therefore fail on the missing `notBefore`.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(raw) => Self::from_raw(raw),
            _ => Self::from_raw(Map::new()),
        }
    }

    /// Get a raw field value
    pub fn get(&self, name: &str) -> Result<&Value> {
        self.raw
            .get(name)
            .ok_or_else(|| NcaNodeError::UnknownField(name.to_string()))
    }

    /// Get a raw field as a string, if present and a string
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.raw.get(name).and_then(Value::as_str)
    }

    /// Returns true if the field is present and not null
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.raw.get(name).is_some_and(|v| !v.is_null())
    }

    /// Certificates are read-only; this always fails.
    pub fn set(&self, name: &str, _value: Value) -> Result<()> {
        Err(NcaNodeError::UnsupportedOperation(name.to_string()))
    }

    /// Certificates are read-only; this always fails.
    pub fn unset(&self, name: &str) -> Result<()> {
        Err(NcaNodeError::UnsupportedOperation(name.to_string()))
    }

    /// The raw fields exactly as the server sent them
    #[must_use]
    pub const fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Consume the certificate and return its raw fields
    #[must_use]
    pub fn into_raw(self) -> Map<String, Value> {
        self.raw
    }

    /// Start of the validity window
    #[must_use]
    pub const fn not_before(&self) -> DateTime<Utc> {
        self.not_before
    }

    /// End of the validity window
    #[must_use]
    pub const fn not_after(&self) -> DateTime<Utc> {
        self.not_after
    }

    /// Issuance chain reported by the server, nearest issuer first
    #[must_use]
    pub fn chain(&self) -> &[Self] {
        &self.chain
    }

    /// OCSP status, if the server performed an OCSP check
    #[must_use]
    pub fn ocsp_status(&self) -> Option<RevocationStatus> {
        self.revocation_status("ocsp")
    }

    /// CRL status, if the server performed a CRL check
    #[must_use]
    pub fn crl_status(&self) -> Option<RevocationStatus> {
        self.revocation_status("crl")
    }

    fn revocation_status(&self, field: &str) -> Option<RevocationStatus> {
        self.raw
            .get(field)
            .and_then(|v| v.get("status"))
            .and_then(Value::as_str)
            .map(RevocationStatus::from)
    }

    /// Same as [`Certificate::is_expired_at`] with the current time.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Returns true when `at` falls strictly inside the validity window.
    ///
    /// Note the naming: despite "expired", this is true for a moment
    /// between `notBefore` and `notAfter`. Callers wanting the usual
    /// meaning should negate it.
    #[must_use]
    pub fn is_expired_at(&self, at: DateTime<Utc>) -> bool {
        self.not_before < at && at < self.not_after
    }

    /// Whether the certificate is legal for signing.
    ///
    /// Checks, in order: the server-side `valid` flag, the OCSP status and
    /// the CRL status when present, and with `check_chain` a non-empty chain
    /// whose every link is itself legal without further chain checks.
    ///
    /// For a complete check the request should have asked NCANode to verify
    /// OCSP or CRL.
    #[must_use]
    pub fn is_legal(&self, check_chain: bool) -> bool {
        if !self.raw.get("valid").is_some_and(is_truthy) {
            return false;
        }

        if !self.status_is_active("ocsp") || !self.status_is_active("crl") {
            return false;
        }

        if check_chain {
            let has_chain = matches!(
                self.raw.get(FIELD_CHAIN),
                Some(Value::Array(entries)) if !entries.is_empty()
            );
            if !has_chain {
                return false;
            }

            return self.chain.iter().all(|link| link.is_legal(false));
        }

        true
    }

    // An absent (or null) check passes; a present one must say ACTIVE.
    fn status_is_active(&self, field: &str) -> bool {
        match self.raw.get(field) {
            None | Some(Value::Null) => true,
            Some(_) => self
                .revocation_status(field)
                .is_some_and(|status| status.is_active()),
        }
    }
}

fn date_field(raw: &Map<String, Value>, field: &'static str) -> Result<DateTime<Utc>> {
    match raw.get(field) {
        Some(Value::String(s)) => parse_timestamp(s).ok_or_else(|| NcaNodeError::MalformedDate {
            field,
            value: s.clone(),
        }),
        Some(other) => Err(NcaNodeError::MalformedDate {
            field,
            value: other.to_string(),
        }),
        None => Err(NcaNodeError::MalformedDate {
            field,
            value: String::from("<missing>"),
        }),
    }
}

impl TryFrom<Map<String, Value>> for Certificate {
    type Error = NcaNodeError;

    fn try_from(raw: Map<String, Value>) -> Result<Self> {
        Self::from_raw(raw)
    }
}

impl TryFrom<Value> for Certificate {
    type Error = NcaNodeError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

impl Serialize for Certificate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}
