use aslan_client::{AslanClient, http_client::ReqwestAslanClient};
use aslan_env::share_env::ShareEnvOp;
use secrecy::SecretString;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(base: &str) -> ReqwestAslanClient {
    ReqwestAslanClient::new(base, SecretString::new("tok".into()))
}

#[tokio::test]
async fn check_share_env_ready_uses_enable_path_segment() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "is_ready": true,
        "checks": {
            "namespace_has_istio_label": true,
            "virtualservice_deployed": true,
            "pods_have_istio_proxy": true,
            "workloads_ready": true,
            "workloads_have_k8s_service": false
        }
    });
    Mock::given(method("GET"))
        .and(path(
            "/api/aslan/environment/environments/dev/check/sharenv/enable/ready",
        ))
        .and(query_param("projectName", "demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let ready = client(&server.uri())
        .check_share_env_ready("demo", "dev", ShareEnvOp::Enable)
        .await
        .expect("readiness");
    assert!(ready.is_ready);
    assert!(ready.checks.workloads_ready);
    assert!(!ready.checks.workloads_have_k8s_service);
}

#[tokio::test]
async fn check_share_env_ready_uses_disable_path_segment() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "is_ready": false,
        "checks": {
            "namespace_has_istio_label": true,
            "virtualservice_deployed": false,
            "pods_have_istio_proxy": false,
            "workloads_ready": true,
            "workloads_have_k8s_service": true
        }
    });
    Mock::given(method("GET"))
        .and(path(
            "/api/aslan/environment/environments/dev/check/sharenv/disable/ready",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let ready = client(&server.uri())
        .check_share_env_ready("demo", "dev", ShareEnvOp::Disable)
        .await
        .expect("readiness");
    assert!(!ready.is_ready);
    assert!(ready.checks.namespace_has_istio_label);
}

#[tokio::test]
async fn check_share_env_ready_handles_non_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/api/aslan/environment/environments/dev/check/sharenv/enable/ready",
        ))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let res = client(&server.uri())
        .check_share_env_ready("demo", "dev", ShareEnvOp::Enable)
        .await;
    assert!(res.is_err());
}
