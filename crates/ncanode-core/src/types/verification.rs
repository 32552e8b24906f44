use super::certificate::{Certificate, FIELD_CHAIN};
use crate::error::{NcaNodeError, Result};
use serde_json::{Map, Value};

/// Result of a signature verification with one or more signers (`CMS.verify`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureVerificationResult {
    raw: Map<String, Value>,
}

impl SignatureVerificationResult {
    /// Wrap a raw response. Nothing is checked until an accessor is used.
    #[must_use]
    pub const fn from_raw(raw: Map<String, Value>) -> Self {
        Self { raw }
    }

    /// The raw response exactly as the server sent it
    #[must_use]
    pub const fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Raw signer entries
    pub fn signers(&self) -> Result<&[Value]> {
        self.raw
            .get("signers")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .ok_or_else(|| NcaNodeError::MissingField(String::from("signers")))
    }

    /// True when every signer's certificate is marked valid by the server.
    ///
    /// An empty signer list is valid.
    pub fn is_valid(&self) -> Result<bool> {
        Ok(self
            .signers()?
            .iter()
            .all(|signer| signer.pointer("/cert/valid") == Some(&Value::Bool(true))))
    }

    /// One certificate per signer, in signer order, each carrying the
    /// signer's chain.
    ///
    /// Built fresh on every call. A single malformed signer fails the batch.
    pub fn certs(&self) -> Result<Vec<Certificate>> {
        self.signers()?.iter().map(signer_certificate).collect()
    }
}

// cert and chain are siblings in the response; join them before building.
fn signer_certificate(signer: &Value) -> Result<Certificate> {
    let mut raw = signer
        .get("cert")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();
    let chain = signer.get(FIELD_CHAIN).cloned().unwrap_or(Value::Null);
    raw.insert(FIELD_CHAIN.to_string(), chain);

    Certificate::from_raw(raw)
}

impl From<Map<String, Value>> for SignatureVerificationResult {
    fn from(raw: Map<String, Value>) -> Self {
        Self::from_raw(raw)
    }
}

impl TryFrom<Value> for SignatureVerificationResult {
    type Error = NcaNodeError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(raw) => Ok(Self::from_raw(raw)),
            other => Err(NcaNodeError::InvalidResponse(format!(
                "expected verification object, got {other}"
            ))),
        }
    }
}
