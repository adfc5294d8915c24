use crate::core::error::{EngineError, FieldError};
use crate::core::field::FieldName;
use crate::core::value::{Value, ValueMap};
use indexmap::IndexMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMeta {
    pub touched: bool,
    pub errors: Vec<String>,
}

impl FieldMeta {
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }
}

/// Single source of truth for the value mapping plus per-field metadata.
///
/// Values mutate only through `set_value` and `reset`; no operation here
/// triggers validation. The form runs the schema at submit time and feeds
/// the findings back through `apply_errors`.
pub struct FormEngine {
    values: ValueMap,
    meta: IndexMap<FieldName, FieldMeta>,
}

impl FormEngine {
    pub fn new(initial: ValueMap) -> Self {
        let meta = initial
            .keys()
            .map(|name| (name.clone(), FieldMeta::default()))
            .collect();
        Self {
            values: initial,
            meta,
        }
    }

    pub fn values(&self) -> &ValueMap {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn meta(&self, name: &str) -> Option<&FieldMeta> {
        self.meta.get(name)
    }

    pub fn set_value(&mut self, name: &str, value: Value) -> Result<(), EngineError> {
        let Some(slot) = self.values.get_mut(name) else {
            return Err(EngineError::UnknownField(name.to_string()));
        };
        *slot = value;
        Ok(())
    }

    pub fn set_touched(&mut self, name: &str) -> Result<(), EngineError> {
        let Some(meta) = self.meta.get_mut(name) else {
            return Err(EngineError::UnknownField(name.to_string()));
        };
        meta.touched = true;
        Ok(())
    }

    /// Atomically replace the whole mapping and clear all metadata.
    pub fn reset(&mut self, new_values: ValueMap) {
        self.meta = new_values
            .keys()
            .map(|name| (name.clone(), FieldMeta::default()))
            .collect();
        self.values = new_values;
    }

    /// Replace the error state from a validation pass: fields named in
    /// `errors` collect their messages in order, all others are cleared.
    pub fn apply_errors(&mut self, errors: &[FieldError]) {
        for meta in self.meta.values_mut() {
            meta.errors.clear();
        }
        for error in errors {
            if let Some(meta) = self.meta.get_mut(&error.name) {
                meta.errors.push(error.message.clone());
            }
        }
    }

    pub fn clear_errors(&mut self) {
        for meta in self.meta.values_mut() {
            meta.errors.clear();
        }
    }

    pub fn has_errors(&self) -> bool {
        self.meta.values().any(|meta| !meta.errors.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::FormEngine;
    use crate::core::error::{EngineError, FieldError};
    use crate::core::value::{Value, ValueMap};

    fn engine() -> FormEngine {
        let mut initial = ValueMap::new();
        initial.insert("email".to_string(), Value::text(""));
        initial.insert("qty".to_string(), Value::Number(1));
        FormEngine::new(initial)
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut engine = engine();
        assert_eq!(
            engine.set_value("missing", Value::text("x")),
            Err(EngineError::UnknownField("missing".to_string()))
        );
        assert_eq!(
            engine.set_touched("missing"),
            Err(EngineError::UnknownField("missing".to_string()))
        );
    }

    #[test]
    fn reset_replaces_values_and_clears_meta() {
        let mut engine = engine();
        engine.set_value("email", Value::text("a@b.com")).unwrap();
        engine.set_touched("email").unwrap();
        engine.apply_errors(&[FieldError::new("qty", "too small")]);

        let mut next = ValueMap::new();
        next.insert("email".to_string(), Value::text("c@d.com"));
        next.insert("qty".to_string(), Value::Number(2));
        engine.reset(next);

        assert_eq!(engine.value("email"), Some(&Value::text("c@d.com")));
        let meta = engine.meta("email").unwrap();
        assert!(!meta.touched);
        assert!(!engine.has_errors());
    }

    #[test]
    fn apply_errors_overwrites_previous_pass() {
        let mut engine = engine();
        engine.apply_errors(&[FieldError::new("email", "Email is required")]);
        assert_eq!(engine.meta("email").unwrap().first_error(), Some("Email is required"));

        engine.apply_errors(&[FieldError::new("qty", "Minimum quantity is 1")]);
        assert_eq!(engine.meta("email").unwrap().first_error(), None);
        assert_eq!(
            engine.meta("qty").unwrap().first_error(),
            Some("Minimum quantity is 1")
        );
    }
}
