//! HTTP client for the gateway backend.
//!
//! The add-model, add-device and add-parameter forms have no backend route
//! yet and go through [`crate::api::simulated`]. Everything else the console
//! does with devices is a real call made here.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::{
    DeviceData, DeviceParameter, DeviceUpdate, ModbusConfig, ModelData, ParameterData,
    ParameterLink,
};
use crate::config::schema::ApiConfig;
use crate::observability::metrics;

/// Client for the gateway's `/api/*` endpoints.
///
/// Every call logs its failure and returns it; nothing is retried.
#[derive(Debug, Clone)]
pub struct DeviceClient {
    client: Client,
    base_url: Url,
}

impl DeviceClient {
    /// Create a client against `base_url` with no request timeout.
    pub fn new(base_url: &str) -> ApiResult<Self> {
        Self::from_config(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
    }

    /// Create a client from configuration.
    ///
    /// The gateway backend is always on the local network, so system proxy
    /// settings are ignored.
    pub fn from_config(config: &ApiConfig) -> ApiResult<Self> {
        let mut builder = Client::builder().no_proxy();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: parse_base(&config.base_url)?,
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// List every device known to the gateway.
    pub async fn list_devices(&self) -> ApiResult<Vec<DeviceData>> {
        let url = self.url("api/devices")?;
        let result = self.get_json(url).await;
        observe("list_devices", result)
    }

    /// Parameters bound to a device.
    pub async fn device_parameters(&self, device_id: u64) -> ApiResult<Vec<DeviceParameter>> {
        let url = self.url(&format!("api/devices/{device_id}/parameters"))?;
        let result = self.get_json(url).await;
        observe("device_parameters", result)
    }

    /// Apply a partial update and return the stored device.
    pub async fn update_device(
        &self,
        device_id: u64,
        update: &DeviceUpdate,
    ) -> ApiResult<DeviceData> {
        let url = self.url(&format!("api/devices/{device_id}"))?;
        tracing::info!(device_id, url = %url, "Updating device");

        let result = match self.send(self.client.patch(url).json(update)).await {
            Ok(resp) => resp.json().await.map_err(ApiError::from),
            Err(e) => Err(e),
        };
        observe("update_device", result)
    }

    /// Delete a device. Any 2xx status is success.
    pub async fn delete_device(&self, device_id: u64) -> ApiResult<()> {
        let url = self.url(&format!("api/devices/{device_id}"))?;
        tracing::info!(device_id, url = %url, "Deleting device");

        let result = self.send(self.client.delete(url)).await.map(drop);
        observe("delete_device", result)
    }

    /// Bind a parameter to a device.
    pub async fn link_parameter(&self, link: &ParameterLink) -> ApiResult<serde_json::Value> {
        let url = self.url("api/dev-param-maps")?;
        tracing::info!(dev_id = link.dev_id, param_id = link.param_id, "Linking parameter");

        let result = self.post_json(url, link).await;
        observe("link_parameter", result)
    }

    /// Remove a device/parameter binding by its map id.
    pub async fn unbind_parameter(&self, map_id: u64) -> ApiResult<()> {
        let url = self.url(&format!("api/dev-param-maps/{map_id}"))?;
        tracing::info!(map_id, url = %url, "Unbinding parameter");

        let result = self.send(self.client.delete(url)).await.map(drop);
        observe("unbind_parameter", result)
    }

    /// List device models.
    pub async fn list_models(&self) -> ApiResult<Vec<ModelData>> {
        let url = self.url("api/models")?;
        let result = self.get_json(url).await;
        observe("list_models", result)
    }

    /// List parameter definitions.
    pub async fn list_parameters(&self) -> ApiResult<Vec<ParameterData>> {
        let url = self.url("api/parameters")?;
        let result = self.get_json(url).await;
        observe("list_parameters", result)
    }

    /// Store a Modbus register mapping for a model.
    pub async fn create_modbus_config(
        &self,
        config: &ModbusConfig,
    ) -> ApiResult<serde_json::Value> {
        let url = self.url("api/modbus-configs")?;
        tracing::info!(model_id = config.model_id, att = %config.att, "Adding Modbus configuration");

        let result = self.post_json(url, config).await;
        observe("create_modbus_config", result)
    }

    fn url(&self, path: &str) -> ApiResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        tracing::debug!(url = %url, "Fetching");
        let resp = self.send(self.client.get(url)).await?;
        Ok(resp.json().await?)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, url: Url, body: &B) -> ApiResult<T> {
        let resp = self.send(self.client.post(url).json(body)).await?;
        Ok(resp.json().await?)
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let resp = request.send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        Ok(resp)
    }
}

/// Log and count the outcome of one backend call, passing it through.
fn observe<T>(operation: &'static str, result: ApiResult<T>) -> ApiResult<T> {
    match &result {
        Ok(_) => {
            tracing::debug!(operation, "Backend call succeeded");
            metrics::record_backend_call(operation, "ok");
        }
        Err(e) => {
            tracing::error!(operation, error = %e, "Backend call failed");
            metrics::record_backend_call(operation, "error");
        }
    }
    result
}

/// Parse a base URL so that relative joins keep its path.
fn parse_base(base_url: &str) -> ApiResult<Url> {
    let mut url = Url::parse(base_url)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_base_url() {
        let err = DeviceClient::new("not a url").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_from_config() {
        let config = ApiConfig {
            base_url: "http://192.168.10.189:9000".into(),
            timeout_secs: Some(5),
            simulated_delay_ms: 0,
        };
        let client = DeviceClient::from_config(&config).unwrap();
        assert_eq!(client.base_url().as_str(), "http://192.168.10.189:9000/");
    }

    #[test]
    fn test_base_path_is_kept() {
        let client = DeviceClient::new("http://gateway.local/console").unwrap();
        assert_eq!(client.base_url().as_str(), "http://gateway.local/console/");
        assert_eq!(
            client.url("api/devices/7").unwrap().as_str(),
            "http://gateway.local/console/api/devices/7"
        );
    }
}
