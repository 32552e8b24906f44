use ncanode_client::{NcaNodeClient, NcaNodeError};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn cert_json(serial: &str) -> Value {
    json!({
        "valid": true,
        "serialNumber": serial,
        "notBefore": "2020-01-01T00:00:00Z",
        "notAfter": "2030-01-01T00:00:00Z",
        "ocsp": { "status": "ACTIVE" },
        "chain": [{
            "valid": true,
            "serialNumber": "ca",
            "notBefore": "2010-01-01T00:00:00Z",
            "notAfter": "2040-01-01T00:00:00Z"
        }]
    })
}

fn ok(result: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "status": 0,
        "message": "",
        "result": result
    }))
}

async fn setup() -> (MockServer, NcaNodeClient) {
    let server = MockServer::start().await;
    let client = NcaNodeClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    (server, client)
}

#[tokio::test]
async fn node_info_returns_result_field() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({ "version": "1.0", "method": "NODE.info" })))
        .respond_with(ok(json!({ "name": "NCANode", "version": "1.3.0" })))
        .expect(1)
        .mount(&server)
        .await;

    let info = client.node().info().await.unwrap();
    assert_eq!(info["name"], "NCANode");
}

#[tokio::test]
async fn x509_info_sends_base64_and_flags() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "method": "X509.info",
            "params": { "cert": "AQID", "verifyOcsp": true, "verifyCrl": false }
        })))
        .respond_with(ok(cert_json("01")))
        .expect(1)
        .mount(&server)
        .await;

    let cert = client
        .x509()
        .info([1u8, 2, 3])
        .verify_ocsp(true)
        .send()
        .await
        .unwrap();

    assert_eq!(cert.get_str("serialNumber"), Some("01"));
    assert_eq!(cert.chain().len(), 1);
    assert!(cert.is_legal(true));
}

#[tokio::test]
async fn pkcs12_info_sends_password() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "method": "PKCS12.info",
            "params": { "p12": "cDEy", "password": "Qwerty12", "verifyCrl": true }
        })))
        .respond_with(ok(cert_json("02")))
        .expect(1)
        .mount(&server)
        .await;

    let cert = client
        .pkcs12()
        .info_base64("cDEy", "Qwerty12")
        .verify_crl(true)
        .send()
        .await
        .unwrap();

    assert_eq!(cert.get_str("serialNumber"), Some("02"));
}

#[tokio::test]
async fn non_zero_status_is_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": -1,
            "message": "Invalid password"
        })))
        .mount(&server)
        .await;

    let err = client
        .pkcs12()
        .info(b"p12", "wrong")
        .send()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        NcaNodeError::Api { status: -1, ref message } if message == "Invalid password"
    ));
}

#[tokio::test]
async fn http_error_without_envelope_is_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = client.node().info().await.unwrap_err();
    assert_eq!(err.api_status(), Some(500));
}

#[tokio::test]
async fn envelope_without_status_is_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "name": "NCANode" }
        })))
        .mount(&server)
        .await;

    let err = client.node().info().await.unwrap_err();
    assert!(matches!(err, NcaNodeError::Api { status: -1, .. }));
}

#[tokio::test]
async fn http_error_wins_over_successful_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "status": 0,
            "result": "ok"
        })))
        .mount(&server)
        .await;

    let err = client.node().info().await.unwrap_err();
    assert_eq!(err.api_status(), Some(500));
}

#[tokio::test]
async fn cms_verify_http_error_carries_server_message() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/cms/verify"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": 400,
            "message": "CMS is malformed"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.cms().verify_base64("bm9wZQ==").send().await.unwrap_err();
    assert!(matches!(
        err,
        NcaNodeError::Api { status: 400, ref message } if message == "CMS is malformed"
    ));
}

#[tokio::test]
async fn cms_verify_without_checks_sends_empty_list() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/cms/verify"))
        .and(body_partial_json(json!({ "revocationCheck": [] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "signers": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.cms().verify(b"cms").send().await.unwrap();
    assert!(result.is_valid().unwrap());
}

#[tokio::test]
async fn non_json_body_is_invalid_response() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    let err = client.node().info().await.unwrap_err();
    assert!(matches!(err, NcaNodeError::InvalidResponse(_)));
}

#[tokio::test]
async fn malformed_certificate_surfaces_model_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ok(json!({ "valid": true, "notAfter": "2030-01-01T00:00:00Z" })))
        .mount(&server)
        .await;

    let err = client.x509().info_base64("AQID").send().await.unwrap_err();
    assert!(err.is_model_error());
}

#[tokio::test]
async fn cms_verify_wraps_signers() {
    let (server, client) = setup().await;

    let signer = |serial: &str| {
        let cert = cert_json(serial);
        let chain = cert["chain"].clone();
        json!({ "cert": cert, "chain": chain, "valid": true })
    };

    Mock::given(method("POST"))
        .and(path("/cms/verify"))
        .and(body_partial_json(json!({
            "cms": "Y21z",
            "revocationCheck": ["OCSP", "CRL"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "message": "",
            "signers": [signer("01"), signer("02")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client
        .cms()
        .verify(b"cms")
        .verify_ocsp(true)
        .verify_crl(true)
        .send()
        .await
        .unwrap();

    assert!(result.is_valid().unwrap());
    let certs = result.certs().unwrap();
    assert_eq!(certs.len(), 2);
    assert_eq!(certs[1].get_str("serialNumber"), Some("02"));
    assert!(certs.iter().all(|c| c.is_legal(true)));
}

#[tokio::test]
async fn xml_sign_and_verify() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "method": "XML.sign",
            "params": { "xml": "<root/>", "p12": "cDEy", "password": "secret" }
        })))
        .respond_with(ok(json!({ "xml": "<root><ds:Signature/></root>" })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": "XML.verify" })))
        .respond_with(ok(json!({ "valid": true, "cert": cert_json("03") })))
        .expect(1)
        .mount(&server)
        .await;

    let signed = client.xml().sign("<root/>", b"p12", "secret").await.unwrap();
    assert_eq!(signed.xml(), "<root><ds:Signature/></root>");

    let verified = client.xml().verify(signed.xml()).send().await.unwrap();
    assert!(verified.is_valid().unwrap());
    assert_eq!(
        verified.cert().unwrap().unwrap().get_str("serialNumber"),
        Some("03")
    );
}

#[tokio::test]
async fn cms_sign_encodes_data() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/cms/sign"))
        .and(body_partial_json(json!({
            "data": "aGVsbG8=",
            "signers": [{ "key": "cDEy", "password": "secret" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "message": "",
            "cms": "MIAGCSqGSIb3DQEHAqCAMIACAQEx"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let signed = client.cms().sign("hello", b"p12", "secret").await.unwrap();
    assert_eq!(signed.cms(), "MIAGCSqGSIb3DQEHAqCAMIACAQEx");
}

#[tokio::test]
async fn missing_result_is_reported() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": 0 })))
        .mount(&server)
        .await;

    let err = client.node().info().await.unwrap_err();
    assert!(matches!(err, NcaNodeError::MissingField(ref f) if f == "result"));
}

#[tokio::test]
async fn unreachable_server_is_connection_error() {
    let client = NcaNodeClient::builder()
        .base_url("http://127.0.0.1:1")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.node().info().await.unwrap_err();
    assert!(matches!(
        err,
        NcaNodeError::Connection(_) | NcaNodeError::Http(_) | NcaNodeError::Timeout(_)
    ));
}
