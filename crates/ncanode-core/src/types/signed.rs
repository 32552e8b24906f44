use serde::{Deserialize, Serialize};

/// Signed XML document returned by `XML.sign`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedXml {
    /// The XML with the embedded signature
    #[serde(default)]
    pub xml: String,
}

impl SignedXml {
    /// The signed document
    #[must_use]
    pub fn xml(&self) -> &str {
        &self.xml
    }
}

/// CMS signature returned by `CMS.sign`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedCms {
    /// Base64-encoded CMS (PKCS#7) structure
    #[serde(default)]
    pub cms: String,
}

impl SignedCms {
    /// Base64-encoded CMS structure
    #[must_use]
    pub fn cms(&self) -> &str {
        &self.cms
    }
}

impl std::fmt::Display for SignedXml {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.xml)
    }
}
