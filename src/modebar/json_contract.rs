use serde::{Deserialize, Serialize};

use crate::error::{ModebarError, ModebarResult};

use super::ToolbarConfig;

pub const TOOLBAR_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolbarJsonContractV1 {
    pub schema_version: u32,
    pub groups: ToolbarConfig,
}

impl ToolbarConfig {
    pub fn to_json_pretty(&self) -> ModebarResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ModebarError::InvalidData(format!("failed to serialize toolbar json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ModebarResult<String> {
        let payload = ToolbarJsonContractV1 {
            schema_version: TOOLBAR_JSON_SCHEMA_V1,
            groups: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ModebarError::InvalidData(format!("failed to serialize toolbar contract v1: {e}"))
        })
    }

    /// Accepts either bare groups or the versioned envelope.
    pub fn from_json_compat_str(input: &str) -> ModebarResult<Self> {
        if let Ok(toolbar) = serde_json::from_str::<ToolbarConfig>(input) {
            return Ok(toolbar);
        }
        let payload: ToolbarJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ModebarError::InvalidData(format!("failed to parse toolbar json payload: {e}"))
        })?;
        if payload.schema_version != TOOLBAR_JSON_SCHEMA_V1 {
            return Err(ModebarError::InvalidData(format!(
                "unsupported toolbar schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.groups)
    }
}
