//! CMS (PKCS#7) signing endpoints.
//!
//! These use the path-based API: parameters are posted as-is to
//! `/cms/sign` and `/cms/verify` and the whole answer is the result.

use super::{encode, RevocationChecks};
use crate::NcaNodeClient;
use ncanode_core::{Result, SignatureVerificationResult, SignedCms};
use serde_json::{json, Map, Value};

const SIGN_PATH: &str = "/cms/sign";
const VERIFY_PATH: &str = "/cms/verify";

/// CMS signing endpoints
pub struct CmsApi<'a> {
    client: &'a NcaNodeClient,
}

impl<'a> CmsApi<'a> {
    pub(crate) const fn new(client: &'a NcaNodeClient) -> Self {
        Self { client }
    }

    /// Sign arbitrary data with the key in a P12 container
    pub async fn sign(
        &self,
        data: impl AsRef<[u8]>,
        p12: impl AsRef<[u8]>,
        password: impl Into<String>,
    ) -> Result<SignedCms> {
        let mut params = Map::new();
        params.insert("data".into(), Value::String(encode(data)));
        params.insert(
            "signers".into(),
            json!([{ "key": encode(p12), "password": password.into() }]),
        );

        let answer = self.client.call_path(SIGN_PATH, params).await?;
        Ok(serde_json::from_value(Value::Object(answer))?)
    }

    /// Verify a DER-encoded CMS signature
    #[must_use]
    pub fn verify(&self, cms: impl AsRef<[u8]>) -> CmsVerifyRequest<'a> {
        CmsVerifyRequest::new(self.client, encode(cms))
    }

    /// Verify a CMS signature that is already base64-encoded
    #[must_use]
    pub fn verify_base64(&self, cms: impl Into<String>) -> CmsVerifyRequest<'a> {
        CmsVerifyRequest::new(self.client, cms.into())
    }
}

/// Builder for CMS verification requests
pub struct CmsVerifyRequest<'a> {
    client: &'a NcaNodeClient,
    cms: String,
    checks: RevocationChecks,
}

impl<'a> CmsVerifyRequest<'a> {
    fn new(client: &'a NcaNodeClient, cms: String) -> Self {
        Self {
            client,
            cms,
            checks: RevocationChecks::default(),
        }
    }

    /// Check every signer's revocation through OCSP
    #[must_use]
    pub fn verify_ocsp(mut self, verify: bool) -> Self {
        self.checks.ocsp = verify;
        self
    }

    /// Check every signer's revocation through the CRL
    #[must_use]
    pub fn verify_crl(mut self, verify: bool) -> Self {
        self.checks.crl = verify;
        self
    }

    /// Execute the request
    pub async fn send(self) -> Result<SignatureVerificationResult> {
        let mut params = Map::new();
        params.insert("cms".into(), Value::String(self.cms));
        self.checks.apply_list(&mut params);

        let answer = self.client.call_path(VERIFY_PATH, params).await?;
        Ok(SignatureVerificationResult::from_raw(answer))
    }
}
