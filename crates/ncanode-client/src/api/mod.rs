//! API endpoint modules.

mod cms;
mod node;
mod pkcs12;
mod x509;
mod xml;

pub use cms::{CmsApi, CmsVerifyRequest};
pub use node::NodeApi;
pub use pkcs12::{Pkcs12Api, Pkcs12InfoRequest};
pub use x509::{X509Api, X509InfoRequest};
pub use xml::{XmlApi, XmlVerifyRequest};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::{Map, Value};

/// Revocation checks NCANode should perform while answering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevocationChecks {
    /// Ask the OCSP responder
    pub ocsp: bool,
    /// Consult the CRL
    pub crl: bool,
}

impl RevocationChecks {
    /// Envelope form: one boolean per check
    fn apply(self, params: &mut Map<String, Value>) {
        params.insert("verifyOcsp".into(), Value::Bool(self.ocsp));
        params.insert("verifyCrl".into(), Value::Bool(self.crl));
    }

    /// Path form: `revocationCheck` lists the requested checks
    fn apply_list(self, params: &mut Map<String, Value>) {
        let mut checks = Vec::new();
        if self.ocsp {
            checks.push(Value::from("OCSP"));
        }
        if self.crl {
            checks.push(Value::from("CRL"));
        }
        params.insert("revocationCheck".into(), Value::Array(checks));
    }
}

fn encode(bytes: impl AsRef<[u8]>) -> String {
    STANDARD.encode(bytes)
}
