//! XML signing endpoints.

use super::{encode, RevocationChecks};
use crate::NcaNodeClient;
use ncanode_core::{Result, SignedXml, XmlVerificationResult};
use serde_json::{Map, Value};

/// XML signing endpoints
pub struct XmlApi<'a> {
    client: &'a NcaNodeClient,
}

impl<'a> XmlApi<'a> {
    pub(crate) const fn new(client: &'a NcaNodeClient) -> Self {
        Self { client }
    }

    /// Sign an XML document with the key in a P12 container (`XML.sign`)
    pub async fn sign(
        &self,
        xml: impl Into<String>,
        p12: impl AsRef<[u8]>,
        password: impl Into<String>,
    ) -> Result<SignedXml> {
        let mut params = Map::new();
        params.insert("xml".into(), Value::String(xml.into()));
        params.insert("p12".into(), Value::String(encode(p12)));
        params.insert("password".into(), Value::String(password.into()));

        let result = self.client.call("XML.sign", Some(params)).await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Check the signature embedded in an XML document (`XML.verify`)
    #[must_use]
    pub fn verify(&self, xml: impl Into<String>) -> XmlVerifyRequest<'a> {
        XmlVerifyRequest {
            client: self.client,
            xml: xml.into(),
            checks: RevocationChecks::default(),
        }
    }
}

/// Builder for `XML.verify` requests
pub struct XmlVerifyRequest<'a> {
    client: &'a NcaNodeClient,
    xml: String,
    checks: RevocationChecks,
}

impl XmlVerifyRequest<'_> {
    /// Check the signer's revocation through OCSP
    #[must_use]
    pub fn verify_ocsp(mut self, verify: bool) -> Self {
        self.checks.ocsp = verify;
        self
    }

    /// Check the signer's revocation through the CRL
    #[must_use]
    pub fn verify_crl(mut self, verify: bool) -> Self {
        self.checks.crl = verify;
        self
    }

    /// Execute the request
    pub async fn send(self) -> Result<XmlVerificationResult> {
        let mut params = Map::new();
        params.insert("xml".into(), Value::String(self.xml));
        self.checks.apply(&mut params);

        let result = self.client.call("XML.verify", Some(params)).await?;
        XmlVerificationResult::try_from(result)
    }
}
