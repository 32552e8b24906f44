//! Core types for the NCANode client.
//!
//! This crate provides the models built on top of raw NCANode responses:
//!
//! - **Types**: [`Certificate`] with its chain of trust and the
//!   legality check, plus wrappers over verification responses
//! - **Errors**: Error handling with [`NcaNodeError`]
//!
//! Everything here is synchronous and works on already decoded JSON.
//!
//! # Example
//!
//! ```rust
//! use ncanode_core::{Certificate, Result};
//! use serde_json::json;
//!
//! fn main() -> Result<()> {
//!     let cert = Certificate::try_from(json!({
//!         "valid": true,
//!         "notBefore": "2020-01-01T00:00:00Z",
//!         "notAfter": "2030-01-01T00:00:00Z",
//!         "chain": [{
//!             "valid": true,
//!             "notBefore": "2010-01-01T00:00:00Z",
//!             "notAfter": "2040-01-01T00:00:00Z"
//!         }]
//!     }))?;
//!
//!     assert!(cert.is_legal(true));
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/ncanode-core/3.0.0")]

mod error;
pub mod types;

pub use error::{NcaNodeError, Result};
pub use types::*;
