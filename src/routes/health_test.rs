use super::*;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn readiness_ok_when_upstream_answers() {
    let (status, body) = readiness(&Ok(()));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "upstream": "ok" }));
}

#[test]
fn readiness_unavailable_on_upstream_status() {
    let (status, body) = readiness(&Err(UpstreamError::Status(502)));
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "upstream": "unavailable", "error": "unexpected status 502" }));
}
