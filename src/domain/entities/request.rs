use std::collections::HashMap;

use serde::Deserialize;

use crate::application::errors::RelayError;

/// A single decoded parameter value.
///
/// Form decoders disagree on whether a field that appears once is a bare
/// string or a one-element list, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Scalar(String),
    Sequence(Vec<String>),
}

impl ParamValue {
    /// Collapse the value to the single string it stands for.
    ///
    /// An empty sequence carries no value and yields `None`.
    pub fn normalized(&self) -> Option<&str> {
        match self {
            ParamValue::Scalar(value) => Some(value),
            ParamValue::Sequence(values) => values.first().map(String::as_str),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::Sequence(values)
    }
}

/// Parameters of one slash-command callback
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct InboundRequest {
    params: HashMap<String, ParamValue>,
}

impl InboundRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a request from decoded form pairs.
    ///
    /// Repeated keys are collected into a sequence in the order they arrived.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut grouped: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in pairs {
            grouped.entry(key.into()).or_default().push(value.into());
        }

        Self {
            params: grouped
                .into_iter()
                .map(|(key, values)| (key, ParamValue::Sequence(values)))
                .collect(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Read a parameter through the shared normalization path.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).and_then(ParamValue::normalized)
    }

    /// Read a parameter that must be present.
    pub fn required(&self, name: &str) -> Result<&str, RelayError> {
        self.get(name)
            .ok_or_else(|| RelayError::MissingParameter(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_and_single_sequence_normalize_equally() {
        let scalar = InboundRequest::new().with_param("text", "Stealth");
        let wrapped = InboundRequest::new().with_param("text", vec!["Stealth".to_string()]);

        assert_eq!(scalar.get("text"), Some("Stealth"));
        assert_eq!(scalar.get("text"), wrapped.get("text"));
    }

    #[test]
    fn test_sequence_uses_first_element() {
        let request = InboundRequest::new()
            .with_param("command", vec!["/rollfor".to_string(), "/divider".to_string()]);

        assert_eq!(request.get("command"), Some("/rollfor"));
    }

    #[test]
    fn test_empty_sequence_is_missing() {
        let request = InboundRequest::new().with_param("text", Vec::<String>::new());

        match request.required("text") {
            Err(RelayError::MissingParameter(name)) => assert_eq!(name, "text"),
            other => panic!("expected missing parameter, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_scalar_is_present() {
        let request = InboundRequest::new().with_param("text", "");

        assert_eq!(request.required("text").unwrap(), "");
    }

    #[test]
    fn test_from_pairs_groups_repeated_keys() {
        let request = InboundRequest::from_pairs(vec![
            ("command", "/divider"),
            ("text", "first"),
            ("text", "second"),
        ]);

        assert_eq!(request.len(), 2);
        assert_eq!(request.get("command"), Some("/divider"));
        assert_eq!(request.get("text"), Some("first"));
    }

    #[test]
    fn test_deserialize_mixed_shapes() {
        let request: InboundRequest = serde_json::from_str(
            r#"{"command": ["/rollfor"], "text": "Perception", "user_id": ["U123"]}"#,
        )
        .unwrap();

        assert_eq!(request.get("command"), Some("/rollfor"));
        assert_eq!(request.get("text"), Some("Perception"));
        assert_eq!(request.get("user_id"), Some("U123"));
        assert!(request.get("response_url").is_none());
    }
}
