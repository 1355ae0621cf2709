use crate::result::ParserResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Format-agnostic style description owned by the host.
///
/// The editor never looks inside beyond the optional `name` field; two
/// documents are the same style when their values are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleDocument(Value);

impl StyleDocument {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The style's `name` field, if it has a non-empty one
    pub fn name(&self) -> Option<&str> {
        self.0
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Raw-object text: the value as two-space indented JSON
    pub fn to_pretty_json(&self) -> ParserResult<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }

    /// Decode raw-object text
    pub fn from_json(text: &str) -> ParserResult<Self> {
        Ok(Self(serde_json::from_str(text)?))
    }
}

impl From<Value> for StyleDocument {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_json_uses_two_space_indent() {
        let style = StyleDocument::new(json!({ "name": "x" }));
        assert_eq!(style.to_pretty_json().unwrap(), "{\n  \"name\": \"x\"\n}");
    }

    #[test]
    fn test_from_json_reports_syntax_errors() {
        let err = StyleDocument::from_json("{ \"name\": ").unwrap_err();
        assert!(err.to_string().contains("EOF"), "unexpected message: {}", err);
    }

    #[test]
    fn test_name_ignores_missing_and_empty() {
        assert_eq!(StyleDocument::new(json!({ "name": "Roads" })).name(), Some("Roads"));
        assert_eq!(StyleDocument::new(json!({ "name": "" })).name(), None);
        assert_eq!(StyleDocument::new(json!({ "rules": [] })).name(), None);
        assert_eq!(StyleDocument::new(json!([1, 2])).name(), None);
    }

    #[test]
    fn test_equality_is_by_value() {
        let a = StyleDocument::new(json!({ "name": "a", "rules": [{ "name": "r" }] }));
        let b = StyleDocument::from_json(r#"{"rules":[{"name":"r"}],"name":"a"}"#).unwrap();
        assert_eq!(a, b);
    }
}
