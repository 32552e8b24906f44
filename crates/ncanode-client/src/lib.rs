//! HTTP client for the NCANode signing service.
//!
//! This crate provides the main [`NcaNodeClient`]. All certificate and
//! signature work happens on the NCANode server; the client sends requests in
//! NCANode's JSON envelope and wraps the answers in the models from
//! [`ncanode_core`].

#![doc(html_root_url = "https://docs.rs/ncanode-client/3.0.0")]

mod client;
mod config;
pub mod api;

pub use client::{NcaNodeClient, NcaNodeClientBuilder};
pub use config::*;
pub use ncanode_core::{NcaNodeError, Result};
