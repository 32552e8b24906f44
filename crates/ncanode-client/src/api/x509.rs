//! X.509 certificate endpoints.

use super::{encode, RevocationChecks};
use crate::NcaNodeClient;
use ncanode_core::{Certificate, Result};
use serde_json::{Map, Value};

/// X.509 certificate endpoints
pub struct X509Api<'a> {
    client: &'a NcaNodeClient,
}

impl<'a> X509Api<'a> {
    pub(crate) const fn new(client: &'a NcaNodeClient) -> Self {
        Self { client }
    }

    /// Inspect a DER-encoded certificate (`X509.info`)
    #[must_use]
    pub fn info(&self, der: impl AsRef<[u8]>) -> X509InfoRequest<'a> {
        X509InfoRequest::new(self.client, encode(der))
    }

    /// Inspect a certificate that is already base64-encoded
    #[must_use]
    pub fn info_base64(&self, cert: impl Into<String>) -> X509InfoRequest<'a> {
        X509InfoRequest::new(self.client, cert.into())
    }
}

/// Builder for `X509.info` requests
pub struct X509InfoRequest<'a> {
    client: &'a NcaNodeClient,
    cert: String,
    checks: RevocationChecks,
}

impl<'a> X509InfoRequest<'a> {
    fn new(client: &'a NcaNodeClient, cert: String) -> Self {
        Self {
            client,
            cert,
            checks: RevocationChecks::default(),
        }
    }

    /// Check revocation through OCSP
    #[must_use]
    pub fn verify_ocsp(mut self, verify: bool) -> Self {
        self.checks.ocsp = verify;
        self
    }

    /// Check revocation through the CRL
    #[must_use]
    pub fn verify_crl(mut self, verify: bool) -> Self {
        self.checks.crl = verify;
        self
    }

    /// Execute the request
    pub async fn send(self) -> Result<Certificate> {
        let mut params = Map::new();
        params.insert("cert".into(), Value::String(self.cert));
        self.checks.apply(&mut params);

        let result = self.client.call("X509.info", Some(params)).await?;
        Certificate::try_from(result)
    }
}
