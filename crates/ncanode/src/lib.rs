//! Rust client for the NCANode signing service.
//!
//! NCANode does the cryptography (PKCS#12 parsing, chain building, OCSP and
//! CRL checks, XML and CMS signatures); this crate sends it requests and
//! turns the answers into typed results.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ncanode::NcaNodeClient;
//!
//! #[tokio::main]
//! async fn main() -> ncanode::Result<()> {
//!     let client = NcaNodeClient::new("http://127.0.0.1:14579")?;
//!
//!     // Inspect a key container, asking the server for an OCSP check
//!     let p12 = std::fs::read("GOSTKNCA.p12").expect("key file");
//!     let cert = client
//!         .pkcs12()
//!         .info(&p12, "Qwerty12")
//!         .verify_ocsp(true)
//!         .send()
//!         .await?;
//!
//!     println!("Legal for signing: {}", cert.is_legal(true));
//!
//!     // Verify a CMS signature with several signers
//!     let result = client.cms().verify_base64("MIAGCSqG...").send().await?;
//!     for signer in result.certs()? {
//!         println!("{:?}: {}", signer.get_str("serialNumber"), signer.is_legal(true));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/ncanode/3.0.0")]

// Re-export core types
pub use ncanode_core::*;

// Re-export client
pub use ncanode_client::{api, ClientConfig, NcaNodeClient, NcaNodeClientBuilder};

// Re-export runtime for convenience
pub use serde_json;
pub use tokio;
