use crate::core::value::Value;
use serde::{Deserialize, Serialize};

pub type FieldName = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Number,
}

impl FieldKind {
    /// Value a field of this kind starts with when no default is declared.
    pub fn zero_value(self) -> Value {
        match self {
            Self::Checkbox => Value::Bool(false),
            Self::Number => Value::Number(0),
            Self::Text
            | Self::Email
            | Self::Password
            | Self::Textarea
            | Self::Select
            | Self::Radio => Value::Text(String::new()),
        }
    }

    /// Whether `value` belongs to this kind's value type.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Checkbox => matches!(value, Value::Bool(_)),
            Self::Number => matches!(value, Value::Number(_) | Value::None),
            Self::Text
            | Self::Email
            | Self::Password
            | Self::Textarea
            | Self::Select
            | Self::Radio => matches!(value, Value::Text(_)),
        }
    }

    pub fn requires_options(self) -> bool {
        matches!(self, Self::Select | Self::Radio)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Declarative validation rule carried by a field descriptor.
///
/// `MinLen`/`MaxLen` bound the character count of text-like values;
/// `Min`/`Max` bound a numeric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
    Required { message: String },
    MinLen { limit: usize, message: String },
    MaxLen { limit: usize, message: String },
    Min { limit: i64, message: String },
    Max { limit: i64, message: String },
    Email { message: String },
    Matches { pattern: String, message: String },
}

impl Rule {
    pub fn required(message: impl Into<String>) -> Self {
        Self::Required {
            message: message.into(),
        }
    }

    pub fn min_len(limit: usize, message: impl Into<String>) -> Self {
        Self::MinLen {
            limit,
            message: message.into(),
        }
    }

    pub fn max_len(limit: usize, message: impl Into<String>) -> Self {
        Self::MaxLen {
            limit,
            message: message.into(),
        }
    }

    pub fn min(limit: i64, message: impl Into<String>) -> Self {
        Self::Min {
            limit,
            message: message.into(),
        }
    }

    pub fn max(limit: i64, message: impl Into<String>) -> Self {
        Self::Max {
            limit,
            message: message.into(),
        }
    }

    pub fn email(message: impl Into<String>) -> Self {
        Self::Email {
            message: message.into(),
        }
    }

    pub fn matches(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Matches {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

/// Static declaration of one form field: identity, presentation and rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    name: FieldName,
    label: String,
    kind: FieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    rules: Vec<Rule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    dependencies: Vec<FieldName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rows: Option<usize>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<FieldName>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            placeholder: None,
            default_value: None,
            options: Vec::new(),
            rules: Vec::new(),
            dependencies: Vec::new(),
            rows: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_dependency(mut self, name: impl Into<FieldName>) -> Self {
        self.dependencies.push(name.into());
        self
    }

    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn dependencies(&self) -> &[FieldName] {
        &self.dependencies
    }

    pub fn rows(&self) -> usize {
        self.rows.unwrap_or(3)
    }

    pub fn is_required(&self) -> bool {
        self.rules
            .iter()
            .any(|rule| matches!(rule, Rule::Required { .. }))
    }

    /// Initial value per the merge precedence:
    /// external default > declared default > kind zero value.
    pub fn initial_value(&self, external: Option<&Value>) -> Value {
        if let Some(value) = external {
            return value.clone();
        }
        if let Some(value) = &self.default_value {
            return value.clone();
        }
        self.kind.zero_value()
    }
}
