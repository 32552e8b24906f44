//! PKCS#12 key container endpoints.

use super::{encode, RevocationChecks};
use crate::NcaNodeClient;
use ncanode_core::{Certificate, Result};
use serde_json::{Map, Value};

/// PKCS#12 key container endpoints
pub struct Pkcs12Api<'a> {
    client: &'a NcaNodeClient,
}

impl<'a> Pkcs12Api<'a> {
    pub(crate) const fn new(client: &'a NcaNodeClient) -> Self {
        Self { client }
    }

    /// Read the certificate held in a P12 container (`PKCS12.info`)
    #[must_use]
    pub fn info(&self, p12: impl AsRef<[u8]>, password: impl Into<String>) -> Pkcs12InfoRequest<'a> {
        Pkcs12InfoRequest::new(self.client, encode(p12), password.into())
    }

    /// Same as [`Pkcs12Api::info`] for a container that is already base64-encoded
    #[must_use]
    pub fn info_base64(
        &self,
        p12: impl Into<String>,
        password: impl Into<String>,
    ) -> Pkcs12InfoRequest<'a> {
        Pkcs12InfoRequest::new(self.client, p12.into(), password.into())
    }
}

/// Builder for `PKCS12.info` requests
pub struct Pkcs12InfoRequest<'a> {
    client: &'a NcaNodeClient,
    p12: String,
    password: String,
    checks: RevocationChecks,
}

impl<'a> Pkcs12InfoRequest<'a> {
    fn new(client: &'a NcaNodeClient, p12: String, password: String) -> Self {
        Self {
            client,
            p12,
            password,
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
        params.insert("p12".into(), Value::String(self.p12));
        params.insert("password".into(), Value::String(self.password));
        self.checks.apply(&mut params);

        let result = self.client.call("PKCS12.info", Some(params)).await?;
        Certificate::try_from(result)
    }
}
