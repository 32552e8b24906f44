//! Inspect a certificate through NCANode and report whether it is legal.
//!
//! Run with: cargo run -p ncanode --example x509_info -- path/to/cert.cer
//!
//! Set NCANODE_URL if the server is not on http://127.0.0.1:14579.

use ncanode::{ClientConfig, NcaNodeClient, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .expect("usage: x509_info <certificate.cer>");
    let der = std::fs::read(&path).expect("readable certificate file");

    let client = NcaNodeClient::from_config(&ClientConfig::from_env()?)?;

    println!("=== Node Info ===");
    let info = client.node().info().await?;
    println!("{info:#}");
    println!();

    println!("=== Certificate: {path} ===");
    let cert = client
        .x509()
        .info(&der)
        .verify_ocsp(true)
        .verify_crl(true)
        .send()
        .await?;

    println!("Serial: {:?}", cert.get_str("serialNumber"));
    println!("Valid from {} to {}", cert.not_before(), cert.not_after());
    println!("OCSP: {:?}", cert.ocsp_status());
    println!("CRL: {:?}", cert.crl_status());
    println!("Chain length: {}", cert.chain().len());
    for (i, link) in cert.chain().iter().enumerate() {
        println!("  [{i}] {:?} legal={}", link.get_str("serialNumber"), link.is_legal(false));
    }
    println!("Legal for signing: {}", cert.is_legal(true));

    Ok(())
}
