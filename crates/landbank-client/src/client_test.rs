use super::*;

fn test_client(base_url: &str) -> LandbankClient {
    LandbankClient::with_base_url(base_url, 30, "landbank-test/0.1")
        .expect("client construction should not fail")
}

#[test]
fn build_url_keeps_api_segment() {
    let client = test_client("https://landbank.example.com/api");
    let url = client.build_url(&AdsQuery::default());
    assert_eq!(
        url.as_str(),
        "https://landbank.example.com/api/Ads?merchantCode="
    );
}

#[test]
fn build_url_strips_trailing_slash() {
    let client = test_client("https://landbank.example.com/api//");
    let query = AdsQuery::default()
        .with("status", "ACTIVE")
        .with("state", "Lagos");
    let url = client.build_url(&query);
    assert_eq!(
        url.as_str(),
        "https://landbank.example.com/api/Ads?merchantCode=&status=ACTIVE&state=Lagos"
    );
}

#[test]
fn build_url_encodes_special_characters() {
    let client = test_client("https://landbank.example.com/api");
    let query = AdsQuery::default().with("city", "Victoria Island & Ikoyi");
    let url = client.build_url(&query);
    assert!(
        url.as_str().contains("Victoria+Island+%26+Ikoyi"),
        "query param should be percent-encoded: {url}"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = LandbankClient::with_base_url("not a url", 30, "ua").unwrap_err();
    assert!(matches!(err, ClientError::InvalidBaseUrl { .. }), "got {err:?}");
}
