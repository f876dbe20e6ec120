use crate::error::{CoreError, CoreResult};
use neo_primitives::ContractParameterType;
use serde::{Deserialize, Serialize};

/// A named parameter of a method or event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractParameterDefinition {
    pub name: String,

    #[serde(rename = "type")]
    pub param_type: ContractParameterType,
}

impl ContractParameterDefinition {
    pub fn new(name: impl Into<String>, param_type: ContractParameterType) -> Self {
        Self {
            name: name.into(),
            param_type,
        }
    }

    pub(crate) fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::invalid_manifest("parameter name cannot be empty"));
        }
        if self.param_type == ContractParameterType::Void {
            return Err(CoreError::invalid_manifest(format!(
                "parameter {} cannot be Void",
                self.name
            )));
        }
        Ok(())
    }
}

pub(crate) fn validate_parameters(parameters: &[ContractParameterDefinition]) -> CoreResult<()> {
    for (i, parameter) in parameters.iter().enumerate() {
        parameter.validate()?;
        if parameters[..i].iter().any(|p| p.name == parameter.name) {
            return Err(CoreError::invalid_manifest(format!(
                "duplicate parameter name {}",
                parameter.name
            )));
        }
    }
    Ok(())
}
