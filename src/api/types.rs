//! Records exchanged with the gateway backend.
//!
//! Field names follow the backend's JSON. Anything the console does not
//! read is optional so older firmware still deserializes.

use serde::{Deserialize, Serialize};

/// A JSON value the backend sends as either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(i64),
    Text(String),
}

/// A device row from `GET /api/devices`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceData {
    pub id: Scalar,
    /// Device name.
    pub name: String,
    pub model_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub pri_addr: String,
    /// 1 when the device is on the network.
    #[serde(default)]
    pub nwk_status: u8,
    #[serde(default)]
    pub enabled: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<i64>,
}

/// Partial update sent with `PATCH /api/devices/{id}`. Unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pri_addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<u8>,
}

/// A parameter bound to a device.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceParameter {
    pub id: u64,
    /// Binding id, used to unbind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub sensitivity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub data_type: u8,
    #[serde(default)]
    pub rw: u8,
}

/// A model row from `GET /api/models`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelData {
    pub model: String,
    #[serde(rename = "type")]
    pub dev_type: String,
    pub brand: String,
    /// Number of devices using the model.
    #[serde(default)]
    pub usage: u64,
    /// Unix timestamp.
    #[serde(default)]
    pub last_updated: i64,
}

/// A parameter row from `GET /api/parameters`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterData {
    pub key: Scalar,
    pub name: String,
    #[serde(default)]
    pub device: String,
    #[serde(default)]
    pub data_type: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub access: String,
    #[serde(default)]
    pub source_interface: String,
    #[serde(default)]
    pub channel: i64,
    #[serde(default)]
    pub lower_limit: f64,
    #[serde(default)]
    pub upper_limit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bit: Option<Scalar>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Body of `POST /api/dev-param-maps`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterLink {
    pub dev_id: u64,
    pub param_id: u64,
    pub sensitivity: f64,
}

/// Body of `POST /api/modbus-configs`. Unset registers are sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModbusConfig {
    pub model_id: u64,
    pub att: String,
    pub reg: Option<u32>,
    pub len: Option<u32>,
    #[serde(rename = "readFC")]
    pub read_fc: Option<u8>,
    #[serde(rename = "writeFC")]
    pub write_fc: Option<u8>,
    pub datatype: Option<u8>,
    pub dp: Option<u8>,
    pub scaler: Option<f64>,
    pub offset: Option<f64>,
    pub timeout: Option<u32>,
    pub poll_speed: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_row_with_numeric_or_text_id() {
        let rows: Vec<DeviceData> = serde_json::from_str(
            r#"[
                {"id": 3, "name": "boiler-1", "modelName": "TH-100", "location": "Plant A",
                 "priAddr": "0x12", "nwkStatus": 1, "enabled": 1, "lastSeen": 1718000000},
                {"id": "gw-7", "name": "meter", "modelName": "PM-2"}
            ]"#,
        )
        .unwrap();

        assert_eq!(rows[0].id, Scalar::Number(3));
        assert_eq!(rows[0].nwk_status, 1);
        assert_eq!(rows[1].id, Scalar::Text("gw-7".into()));
        assert_eq!(rows[1].last_seen, None);
    }

    #[test]
    fn test_update_only_sends_set_fields() {
        let update = DeviceUpdate {
            location: Some("Plant B".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"location":"Plant B"}"#
        );
    }

    #[test]
    fn test_modbus_config_sends_nulls() {
        let config = ModbusConfig {
            model_id: 4,
            att: "temperature".into(),
            reg: Some(40001),
            read_fc: Some(3),
            ..Default::default()
        };
        let json: serde_json::Value = serde_json::to_value(&config).unwrap();
        assert_eq!(json["readFC"], 3);
        assert!(json["writeFC"].is_null());
        assert!(json["poll_speed"].is_null());
    }

    #[test]
    fn test_model_type_field() {
        let model: ModelData = serde_json::from_str(
            r#"{"model": "TH-100", "type": "sensor", "brand": "Acme", "usage": 2, "last_updated": 0}"#,
        )
        .unwrap();
        assert_eq!(model.dev_type, "sensor");
    }
}
