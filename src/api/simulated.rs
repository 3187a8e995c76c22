//! Simulated submission endpoints.
//!
//! The add-model, add-device and add-parameter forms have no backend yet.
//! Each submission waits a fixed delay and then succeeds, so callers can
//! drive their loading state the same way they would against a real API.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::error::ApiResult;
use crate::config::schema::ApiConfig;

/// Kind of record a submission creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionKind {
    Model,
    Device,
    Parameter,
}

/// Receipt returned by a simulated submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub kind: SubmissionKind,
    pub name: String,
}

/// Payload of the add-model form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewModel {
    pub brand: String,
    pub model: String,
    pub dev_type: String,
    pub interface: u32,
}

/// Payload of the add-device form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDevice {
    /// Device name.
    pub device_id: String,
    pub model_id: u64,
    /// Model name.
    pub node_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fw_ver: Option<String>,
}

/// Payload of the add-parameter form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewParameter {
    pub model_id: u64,
    pub name: String,
    pub unit: Option<String>,
    /// 0 = discrete, 1 = integer, 2 = float.
    pub data_type: u8,
    /// 0 = read only, 1 = read/write.
    pub rw: u8,
    pub lower_limit: Option<f64>,
    pub upper_limit: Option<f64>,
}

/// Stand-in for the unimplemented `POST /api/models|devices|parameters`.
#[derive(Debug, Clone)]
pub struct SimulatedApi {
    delay: Duration,
}

impl SimulatedApi {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(Duration::from_millis(config.simulated_delay_ms))
    }

    pub async fn create_model(&self, model: &NewModel) -> ApiResult<Submission> {
        self.submit(SubmissionKind::Model, &model.model, model).await
    }

    pub async fn create_device(&self, device: &NewDevice) -> ApiResult<Submission> {
        self.submit(SubmissionKind::Device, &device.device_id, device).await
    }

    pub async fn create_parameter(&self, parameter: &NewParameter) -> ApiResult<Submission> {
        self.submit(SubmissionKind::Parameter, &parameter.name, parameter).await
    }

    async fn submit<T: Serialize>(
        &self,
        kind: SubmissionKind,
        name: &str,
        payload: &T,
    ) -> ApiResult<Submission> {
        tracing::debug!(
            kind = ?kind,
            payload = %serde_json::to_string(payload).unwrap_or_default(),
            "Simulated submission"
        );
        tokio::time::sleep(self.delay).await;

        Ok(Submission {
            kind,
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_submission_waits_and_succeeds() {
        let api = SimulatedApi::new(Duration::from_millis(50));
        let start = Instant::now();

        let receipt = api
            .create_model(&NewModel {
                brand: "Acme".into(),
                model: "TH-100".into(),
                dev_type: "sensor".into(),
                interface: 3,
            })
            .await
            .unwrap();

        assert!(start.elapsed() >= Duration::from_millis(50));
        assert_eq!(
            receipt,
            Submission {
                kind: SubmissionKind::Model,
                name: "TH-100".into()
            }
        );
    }

    #[tokio::test]
    async fn test_device_and_parameter() {
        let api = SimulatedApi::new(Duration::ZERO);

        let device = api
            .create_device(&NewDevice {
                device_id: "boiler-1".into(),
                model_id: 4,
                node_id: "TH-100".into(),
                loc_name: None,
                fw_ver: Some("1.2.0".into()),
            })
            .await
            .unwrap();
        assert_eq!(device.kind, SubmissionKind::Device);
        assert_eq!(device.name, "boiler-1");

        let parameter = api
            .create_parameter(&NewParameter {
                model_id: 4,
                name: "temperature".into(),
                unit: Some("°C".into()),
                data_type: 2,
                rw: 0,
                lower_limit: Some(-20.0),
                upper_limit: Some(120.0),
            })
            .await
            .unwrap();
        assert_eq!(parameter.kind, SubmissionKind::Parameter);
    }

    #[tokio::test]
    async fn test_delay_comes_from_config() {
        let config = ApiConfig {
            simulated_delay_ms: 20,
            ..ApiConfig::default()
        };
        let api = SimulatedApi::from_config(&config);
        let start = Instant::now();

        api.create_device(&NewDevice {
            device_id: "meter-2".into(),
            model_id: 1,
            node_id: "PM-2".into(),
            loc_name: Some("Plant A".into()),
            fw_ver: None,
        })
        .await
        .unwrap();

        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
