use crate::core::error::{ConfigError, FieldError};
use crate::core::field::{FieldDescriptor, FieldName, Rule};
use crate::core::value::{Value, ValueMap};
use regex::Regex;
use std::sync::OnceLock;

pub type CheckFn = Box<dyn Fn(&Value) -> Result<(), String> + Send + Sync>;
pub type RefineFn = Box<dyn Fn(&ValueMap) -> bool + Send + Sync>;

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Check chain for a single field. Checks run in declaration order and the
/// first failure reports; an `optional` field skips its chain while empty.
pub struct SchemaField {
    name: FieldName,
    optional: bool,
    checks: Vec<CheckFn>,
}

impl SchemaField {
    fn new(name: impl Into<FieldName>) -> Self {
        Self {
            name: name.into(),
            optional: false,
            checks: Vec::new(),
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn required(self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.check(move |value| {
            if value.is_empty() {
                Err(message.clone())
            } else {
                Ok(())
            }
        })
    }

    pub fn min_len(self, limit: usize, message: impl Into<String>) -> Self {
        let message = message.into();
        self.check(move |value| {
            if value.display().chars().count() < limit {
                Err(message.clone())
            } else {
                Ok(())
            }
        })
    }

    pub fn max_len(self, limit: usize, message: impl Into<String>) -> Self {
        let message = message.into();
        self.check(move |value| {
            if value.display().chars().count() > limit {
                Err(message.clone())
            } else {
                Ok(())
            }
        })
    }

    pub fn min(self, limit: i64, message: impl Into<String>) -> Self {
        let message = message.into();
        self.check(move |value| match value.as_number() {
            Some(n) if n >= limit => Ok(()),
            _ => Err(message.clone()),
        })
    }

    pub fn max(self, limit: i64, message: impl Into<String>) -> Self {
        let message = message.into();
        self.check(move |value| match value.as_number() {
            Some(n) if n <= limit => Ok(()),
            _ => Err(message.clone()),
        })
    }

    pub fn email(self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.check(move |value| {
            if email_regex().is_match(&value.display()) {
                Ok(())
            } else {
                Err(message.clone())
            }
        })
    }

    pub fn matches(self, pattern: Regex, message: impl Into<String>) -> Self {
        let message = message.into();
        self.check(move |value| {
            if pattern.is_match(&value.display()) {
                Ok(())
            } else {
                Err(message.clone())
            }
        })
    }

    /// Custom predicate over the field's value.
    pub fn check(
        mut self,
        check: impl Fn(&Value) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    fn run(&self, value: &Value) -> Option<String> {
        if self.optional && value.is_empty() {
            return None;
        }
        self.checks.iter().find_map(|check| check(value).err())
    }
}

struct Refinement {
    path: FieldName,
    message: String,
    predicate: RefineFn,
}

/// Composable validator over the whole value mapping: per-field check chains
/// plus cross-field refinements attached to a specific field path.
///
/// `validate` is pure; refinements run only once every chain passes.
#[derive(Default)]
pub struct Schema {
    fields: Vec<SchemaField>,
    refinements: Vec<Refinement>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(
        mut self,
        name: impl Into<FieldName>,
        build: impl FnOnce(SchemaField) -> SchemaField,
    ) -> Self {
        self.fields.push(build(SchemaField::new(name)));
        self
    }

    pub fn refine(
        mut self,
        path: impl Into<FieldName>,
        message: impl Into<String>,
        predicate: impl Fn(&ValueMap) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.refinements.push(Refinement {
            path: path.into(),
            message: message.into(),
            predicate: Box::new(predicate),
        });
        self
    }

    pub fn validate(&self, values: &ValueMap) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        for field in &self.fields {
            let value = values.get(&field.name).cloned().unwrap_or(Value::None);
            if let Some(message) = field.run(&value) {
                errors.push(FieldError::new(&field.name, message));
            }
        }

        if errors.is_empty() {
            for refinement in &self.refinements {
                if !(refinement.predicate)(values) {
                    errors.push(FieldError::new(&refinement.path, &refinement.message));
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Derive per-field chains from the descriptors' declarative rules.
    /// Fields with no `required` rule are treated as optional.
    pub fn from_fields(fields: &[FieldDescriptor]) -> Result<Self, ConfigError> {
        let mut schema = Self::new();

        for descriptor in fields {
            let mut chain = SchemaField::new(descriptor.name());
            if !descriptor.is_required() {
                chain = chain.optional();
            }

            for rule in descriptor.rules() {
                chain = match rule {
                    Rule::Required { message } => chain.required(message.clone()),
                    Rule::MinLen { limit, message } => chain.min_len(*limit, message.clone()),
                    Rule::MaxLen { limit, message } => chain.max_len(*limit, message.clone()),
                    Rule::Min { limit, message } => chain.min(*limit, message.clone()),
                    Rule::Max { limit, message } => chain.max(*limit, message.clone()),
                    Rule::Email { message } => chain.email(message.clone()),
                    Rule::Matches { pattern, message } => {
                        let compiled =
                            Regex::new(pattern).map_err(|_| ConfigError::BadPattern {
                                name: descriptor.name().to_string(),
                                pattern: pattern.clone(),
                            })?;
                        chain.matches(compiled, message.clone())
                    }
                };
            }

            schema.fields.push(chain);
        }

        Ok(schema)
    }
}
