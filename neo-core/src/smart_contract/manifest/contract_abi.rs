use super::{ContractEventDescriptor, ContractMethodDescriptor};
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// The methods and events of a contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractAbi {
    pub methods: Vec<ContractMethodDescriptor>,
    pub events: Vec<ContractEventDescriptor>,
}

impl ContractAbi {
    /// Finds a method by name and parameter count; a negative count matches any.
    pub fn get_method(&self, name: &str, parameter_count: i32) -> Option<&ContractMethodDescriptor> {
        self.methods.iter().find(|m| {
            m.name == name
                && (parameter_count < 0 || m.parameters.len() == parameter_count as usize)
        })
    }

    pub(crate) fn validate(&self) -> CoreResult<()> {
        for (i, method) in self.methods.iter().enumerate() {
            method.validate()?;
            let overloaded = self.methods[..i]
                .iter()
                .any(|m| m.name == method.name && m.parameters.len() == method.parameters.len());
            if overloaded {
                return Err(CoreError::invalid_manifest(format!(
                    "duplicate method {}/{}",
                    method.name,
                    method.parameters.len()
                )));
            }
        }
        for (i, event) in self.events.iter().enumerate() {
            event.validate()?;
            if self.events[..i].iter().any(|e| e.name == event.name) {
                return Err(CoreError::invalid_manifest(format!(
                    "duplicate event {}",
                    event.name
                )));
            }
        }
        Ok(())
    }
}
