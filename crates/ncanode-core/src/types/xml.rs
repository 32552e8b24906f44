use super::certificate::Certificate;
use crate::error::{NcaNodeError, Result};
use serde_json::{Map, Value};

/// Result of an XML signature check (`XML.verify`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlVerificationResult {
    raw: Map<String, Value>,
}

impl XmlVerificationResult {
    /// Wrap a raw response
    #[must_use]
    pub const fn from_raw(raw: Map<String, Value>) -> Self {
        Self { raw }
    }

    /// The raw response exactly as the server sent it
    #[must_use]
    pub const fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Whether the signature checked out; dates are checked by NCANode
    pub fn is_valid(&self) -> Result<bool> {
        self.raw
            .get("valid")
            .and_then(Value::as_bool)
            .ok_or_else(|| NcaNodeError::MissingField(String::from("valid")))
    }

    /// The signer certificate, if the server returned one
    pub fn cert(&self) -> Result<Option<Certificate>> {
        match self.raw.get("cert") {
            None | Some(Value::Null) => Ok(None),
            Some(cert) => Certificate::from_value(cert.clone()).map(Some),
        }
    }
}

impl From<Map<String, Value>> for XmlVerificationResult {
    fn from(raw: Map<String, Value>) -> Self {
        Self::from_raw(raw)
    }
}

impl TryFrom<Value> for XmlVerificationResult {
    type Error = NcaNodeError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(raw) => Ok(Self::from_raw(raw)),
            other => Err(NcaNodeError::InvalidResponse(format!(
                "expected XML verification object, got {other}"
            ))),
        }
    }
}
