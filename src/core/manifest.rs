use crate::core::error::ConfigError;
use crate::core::field::FieldDescriptor;
use crate::core::form::FormConfig;
use crate::core::schema::Schema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest does not parse: {0}")]
    Parse(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A whole form declared as data. Field kinds, rules and defaults use the
/// same serde model as `FieldDescriptor`; an unrecognized kind or rule tag
/// fails at load time rather than rendering nothing later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormManifest {
    pub title: String,
    #[serde(default)]
    pub submit_label: Option<String>,
    pub fields: Vec<FieldDescriptor>,
}

impl FormManifest {
    pub fn from_yaml(input: &str) -> Result<Self, ManifestError> {
        serde_yaml::from_str(input).map_err(|err| ManifestError::Parse(err.to_string()))
    }

    pub fn from_json(input: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(input).map_err(|err| ManifestError::Parse(err.to_string()))
    }

    /// Build a form configuration, deriving the schema from the declarative
    /// rules.
    pub fn into_config(self) -> Result<FormConfig, ManifestError> {
        let schema = Schema::from_fields(&self.fields)?;
        let mut config = FormConfig::new(self.fields, schema);
        if let Some(label) = self.submit_label {
            config = config.with_submit_label(label);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::FormManifest;
    use crate::core::form::{Form, SubmitOutcome};
    use crate::core::value::Value;

    const FEEDBACK_YAML: &str = r#"
title: Feedback
submit_label: Send
fields:
  - name: rating
    label: Rating
    kind: select
    options:
      - { label: "Good", value: "good" }
      - { label: "Bad", value: "bad" }
    rules:
      - { rule: required, message: "Please pick a rating" }
  - name: qty
    label: Quantity
    kind: number
    default_value: 1
    rules:
      - { rule: min, limit: 1, message: "Minimum quantity is 1" }
  - name: comment
    label: Comment
    kind: textarea
    rules:
      - { rule: min_len, limit: 5, message: "Comment must be at least 5 characters" }
  - name: subscribed
    label: Subscribe
    kind: checkbox
"#;

    #[test]
    fn yaml_manifest_builds_a_working_form() {
        let manifest = FormManifest::from_yaml(FEEDBACK_YAML).unwrap();
        assert_eq!(manifest.title, "Feedback");

        let mut form = Form::new(manifest.into_config().unwrap()).unwrap();
        assert_eq!(form.submit_label(), "Send");
        assert_eq!(form.value("qty"), Some(&Value::Number(1)));
        assert_eq!(form.value("subscribed"), Some(&Value::Bool(false)));

        assert_eq!(form.submit(|_| Ok(())), SubmitOutcome::Invalid);
        form.set_value("rating", Value::text("good")).unwrap();
        assert_eq!(form.submit(|_| Ok(())), SubmitOutcome::Submitted);

        form.set_value("comment", Value::text("hi")).unwrap();
        assert_eq!(form.submit(|_| Ok(())), SubmitOutcome::Invalid);
        form.set_value("comment", Value::text("hi there")).unwrap();
        assert_eq!(form.submit(|_| Ok(())), SubmitOutcome::Submitted);
    }

    #[test]
    fn unknown_kind_fails_at_load_time() {
        let input = r#"
title: Broken
fields:
  - name: when
    label: When
    kind: datepicker
"#;
        assert!(FormManifest::from_yaml(input).is_err());
    }

    #[test]
    fn unknown_rule_tag_fails_at_load_time() {
        let input = r#"
title: Broken
fields:
  - name: code
    label: Code
    kind: text
    rules:
      - { rule: checksum, message: "nope" }
"#;
        assert!(FormManifest::from_yaml(input).is_err());
    }
}
