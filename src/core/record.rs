//! Invocation record structure

use super::field_value::FieldValue;
use serde::{Deserialize, Serialize};

/// Immutable capture of one intercepted method call.
///
/// Built by the interception layer before `Dispatcher::handle` runs and never
/// mutated afterwards. Parameter types and values are positionally aligned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationRecord {
    pub target_class: String,
    pub target_method: String,
    pub parameter_types: Vec<String>,
    pub parameter_values: Vec<FieldValue>,
    pub return_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_value: Option<FieldValue>,
    pub execution_time_millis: u64,
}

impl InvocationRecord {
    pub fn new(target_class: impl Into<String>, target_method: impl Into<String>) -> Self {
        Self {
            target_class: target_class.into(),
            target_method: target_method.into(),
            parameter_types: Vec::new(),
            parameter_values: Vec::new(),
            return_type: String::new(),
            return_value: None,
            execution_time_millis: 0,
        }
    }

    #[must_use]
    pub fn with_parameters(
        mut self,
        types: Vec<impl Into<String>>,
        values: Vec<impl Into<FieldValue>>,
    ) -> Self {
        self.parameter_types = types.into_iter().map(Into::into).collect();
        self.parameter_values = values.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_return(
        mut self,
        return_type: impl Into<String>,
        return_value: impl Into<FieldValue>,
    ) -> Self {
        self.return_type = return_type.into();
        self.return_value = Some(return_value.into());
        self
    }

    #[must_use]
    pub fn with_execution_time(mut self, millis: u64) -> Self {
        self.execution_time_millis = millis;
        self
    }

    /// Parameter type list as a single renderable value
    pub fn parameter_types_value(&self) -> FieldValue {
        FieldValue::Seq(
            self.parameter_types
                .iter()
                .map(|t| FieldValue::String(t.clone()))
                .collect(),
        )
    }

    /// Parameter value list as a single renderable value
    pub fn parameter_values_value(&self) -> FieldValue {
        FieldValue::Seq(self.parameter_values.clone())
    }

    /// Return value, `null` when the method returned nothing
    pub fn return_value_or_null(&self) -> FieldValue {
        self.return_value.clone().unwrap_or(FieldValue::Null)
    }
}
