//! HTTP client implementation for the aslan environment API.
//!
//! This module provides a reqwest-based implementation of the
//! [`AslanClient`](crate::AslanClient) trait.

use crate::{AslanClient, AslanError, Environment, StartDevmodeInfo, WorkloadInfo};
use aslan_env::openapi::{
    OpenApiApplyYamlServiceReq, OpenApiDeleteYamlServiceFromEnvReq, OpenApiEnvCfgArgs,
    OpenApiScaleServiceReq,
};
use aslan_env::share_env::{ShareEnvOp, ShareEnvReady};
use aslan_env::types::ServiceDetail;
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

/// Client for the aslan environment API using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestAslanClient {
    base_url: String,
    token: SecretString,
    client: reqwest::Client,
}

impl ReqwestAslanClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - The address of the aslan service (e.g., "http://aslan:25000")
    /// * `token` - The API token for authentication
    pub fn new(base_url: &str, token: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("reqwest client build should not fail");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client,
        }
    }

    /// Build an authenticated GET request.
    fn get_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.get(url).bearer_auth(self.token.expose_secret())
    }

    /// Build an authenticated POST request.
    fn post_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .bearer_auth(self.token.expose_secret())
    }

    /// Build an authenticated PUT request.
    fn put_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.put(url).bearer_auth(self.token.expose_secret())
    }

    /// Build an authenticated DELETE request.
    fn delete_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .delete(url)
            .bearer_auth(self.token.expose_secret())
    }

    /// Execute a request and expect a JSON response.
    async fn execute_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, AslanError> {
        let resp = request.send().await?;
        if !resp.status().is_success() {
            return Err(self.error_from_response(resp).await);
        }
        Ok(resp.json::<T>().await?)
    }

    /// Execute a request with no expected response body.
    async fn execute_empty(&self, request: reqwest::RequestBuilder) -> Result<(), AslanError> {
        let resp = request.send().await?;
        if !resp.status().is_success() {
            return Err(self.error_from_response(resp).await);
        }
        Ok(())
    }

    /// Extract status and a bounded body snippet from a failed response.
    async fn error_from_response(&self, resp: reqwest::Response) -> AslanError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let message: String = body.chars().take(256).collect();
        AslanError::Api { status, message }
    }

    fn environment_url(&self, env_name: &str) -> String {
        format!(
            "{}/api/aslan/environment/environments/{}",
            self.base_url, env_name
        )
    }
}

#[async_trait]
impl AslanClient for ReqwestAslanClient {
    async fn list_environments(
        &self,
        project_name: &str,
    ) -> Result<Vec<Environment>, AslanError> {
        let url = format!("{}/api/aslan/environment/environments", self.base_url);
        self.execute_json(
            self.get_request(&url)
                .query(&[("projectName", project_name)]),
        )
        .await
    }

    async fn get_environment(
        &self,
        env_name: &str,
        project_name: &str,
    ) -> Result<Environment, AslanError> {
        let url = self.environment_url(env_name);
        self.execute_json(
            self.get_request(&url)
                .query(&[("projectName", project_name)]),
        )
        .await
    }

    async fn get_service_detail(
        &self,
        project_name: &str,
        service_name: &str,
        env_name: &str,
    ) -> Result<ServiceDetail, AslanError> {
        let url = format!(
            "{}/services/{}",
            self.environment_url(env_name),
            service_name
        );
        self.execute_json(
            self.get_request(&url)
                .query(&[("projectName", project_name)]),
        )
        .await
    }

    async fn patch_workload(
        &self,
        project_name: &str,
        env_name: &str,
        service_name: &str,
        dev_image: &str,
    ) -> Result<WorkloadInfo, AslanError> {
        let url = format!(
            "{}/services/{}/devmode/patch",
            self.environment_url(env_name),
            service_name
        );
        tracing::debug!(project_name, env_name, service_name, dev_image, "patching workload");
        let body = StartDevmodeInfo {
            dev_image: dev_image.to_string(),
        };
        self.execute_json(
            self.post_request(&url)
                .query(&[("projectName", project_name)])
                .json(&body),
        )
        .await
    }

    async fn recover_workload(
        &self,
        project_name: &str,
        env_name: &str,
        service_name: &str,
    ) -> Result<(), AslanError> {
        let url = format!(
            "{}/services/{}/devmode/recover",
            self.environment_url(env_name),
            service_name
        );
        tracing::debug!(project_name, env_name, service_name, "recovering workload");
        self.execute_empty(
            self.post_request(&url)
                .query(&[("projectName", project_name)]),
        )
        .await
    }

    async fn check_share_env_ready(
        &self,
        project_name: &str,
        env_name: &str,
        op: ShareEnvOp,
    ) -> Result<ShareEnvReady, AslanError> {
        let url = format!(
            "{}/check/sharenv/{}/ready",
            self.environment_url(env_name),
            op.as_str()
        );
        self.execute_json(
            self.get_request(&url)
                .query(&[("projectName", project_name)]),
        )
        .await
    }

    async fn scale_service(&self, req: &OpenApiScaleServiceReq) -> Result<(), AslanError> {
        req.validate()?;
        let url = format!("{}/services/scale", self.environment_url(&req.env_name));
        self.execute_empty(
            self.post_request(&url)
                .query(&[("projectKey", req.project_key.as_str())])
                .json(req),
        )
        .await
    }

    async fn apply_yaml_services(
        &self,
        project_name: &str,
        req: &OpenApiApplyYamlServiceReq,
    ) -> Result<(), AslanError> {
        req.validate()?;
        let url = format!("{}/services/yaml", self.environment_url(&req.env_name));
        self.execute_empty(
            self.post_request(&url)
                .query(&[("projectKey", project_name)])
                .json(req),
        )
        .await
    }

    async fn delete_yaml_services(
        &self,
        project_name: &str,
        req: &OpenApiDeleteYamlServiceFromEnvReq,
    ) -> Result<(), AslanError> {
        req.validate()?;
        let url = format!("{}/services/yaml", self.environment_url(&req.env_name));
        self.execute_empty(
            self.delete_request(&url)
                .query(&[("projectKey", project_name)])
                .json(req),
        )
        .await
    }

    async fn update_env_cfg(&self, req: &OpenApiEnvCfgArgs) -> Result<(), AslanError> {
        req.validate()?;
        let url = format!("{}/configs", self.environment_url(&req.env_name));
        self.execute_empty(
            self.put_request(&url)
                .query(&[("projectName", req.product_name.as_str())])
                .json(req),
        )
        .await
    }
}
