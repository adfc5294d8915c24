use crate::core::engine::{FieldMeta, FormEngine};
use crate::core::error::{ConfigError, EngineError, SubmitError};
use crate::core::field::FieldDescriptor;
use crate::core::schema::Schema;
use crate::core::value::{Value, ValueMap};
use std::collections::HashSet;

/// What happens to in-progress edits when externally loaded defaults arrive
/// after first construction.
///
/// `Replace` is the historical behavior: the whole mapping is rebuilt and
/// unsaved edits are discarded. `PreserveEdits` lets late defaults fill only
/// fields the user has not touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultsPolicy {
    #[default]
    Replace,
    PreserveEdits,
}

/// Everything a form author declares: the field list, the schema, the submit
/// control's label, and optionally externally loaded defaults.
pub struct FormConfig {
    pub(crate) fields: Vec<FieldDescriptor>,
    pub(crate) schema: Schema,
    pub(crate) submit_label: String,
    pub(crate) external_defaults: ValueMap,
    pub(crate) defaults_policy: DefaultsPolicy,
}

impl FormConfig {
    pub fn new(fields: Vec<FieldDescriptor>, schema: Schema) -> Self {
        Self {
            fields,
            schema,
            submit_label: "Submit".to_string(),
            external_defaults: ValueMap::new(),
            defaults_policy: DefaultsPolicy::default(),
        }
    }

    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    pub fn with_external_defaults(mut self, defaults: ValueMap) -> Self {
        self.external_defaults = defaults;
        self
    }

    pub fn with_defaults_policy(mut self, policy: DefaultsPolicy) -> Self {
        self.defaults_policy = policy;
        self
    }
}

/// Outcome of one submit attempt. Validation findings live in the field
/// metadata; a callback failure carries its error here and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    Invalid,
    Failed(SubmitError),
}

/// One field's render-ready state: descriptor plus live value and metadata.
pub struct FieldView<'a> {
    pub descriptor: &'a FieldDescriptor,
    pub value: &'a Value,
    pub meta: &'a FieldMeta,
}

impl FieldView<'_> {
    pub fn error(&self) -> Option<&str> {
        self.meta.first_error()
    }
}

/// A live, renderable, submittable form: the field list bound to an engine.
pub struct Form {
    fields: Vec<FieldDescriptor>,
    schema: Schema,
    submit_label: String,
    external_defaults: ValueMap,
    defaults_policy: DefaultsPolicy,
    engine: FormEngine,
}

impl Form {
    /// Validate the configuration and build the initial value mapping.
    pub fn new(config: FormConfig) -> Result<Self, ConfigError> {
        check_fields(&config.fields)?;
        let initial = merge_initial(&config.fields, &config.external_defaults);
        Ok(Self {
            engine: FormEngine::new(initial),
            fields: config.fields,
            schema: config.schema,
            submit_label: config.submit_label,
            external_defaults: config.external_defaults,
            defaults_policy: config.defaults_policy,
        })
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    pub fn values(&self) -> &ValueMap {
        self.engine.values()
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.engine.value(name)
    }

    pub fn set_value(&mut self, name: &str, value: Value) -> Result<(), EngineError> {
        self.engine.set_value(name, value)
    }

    /// Mark a field as visited (blur). Metadata only.
    pub fn touch(&mut self, name: &str) -> Result<(), EngineError> {
        self.engine.set_touched(name)
    }

    pub fn field_views(&self) -> impl Iterator<Item = FieldView<'_>> {
        self.fields.iter().filter_map(|descriptor| {
            let value = self.engine.value(descriptor.name())?;
            let meta = self.engine.meta(descriptor.name())?;
            Some(FieldView {
                descriptor,
                value,
                meta,
            })
        })
    }

    pub fn has_errors(&self) -> bool {
        self.engine.has_errors()
    }

    /// Run the schema over the current mapping and, on success, the submit
    /// callback.
    ///
    /// Validation failure stores per-field errors and skips the callback. A
    /// callback error is caught and reported as a generic failure without
    /// touching field errors. The value mapping itself is never mutated
    /// here. Overlapping calls are not de-duplicated; gating repeated
    /// submission is the caller's job via its loading flag.
    pub fn submit<F>(&mut self, on_submit: F) -> SubmitOutcome
    where
        F: FnOnce(&ValueMap) -> Result<(), SubmitError>,
    {
        match self.schema.validate(self.engine.values()) {
            Err(errors) => {
                self.engine.apply_errors(&errors);
                SubmitOutcome::Invalid
            }
            Ok(()) => {
                self.engine.clear_errors();
                match on_submit(self.engine.values()) {
                    Ok(()) => SubmitOutcome::Submitted,
                    Err(error) => SubmitOutcome::Failed(error),
                }
            }
        }
    }

    /// Re-merge and reset when externally supplied defaults change.
    ///
    /// Idempotent per distinct data value: applying the same mapping twice
    /// resets once. Under `DefaultsPolicy::Replace` the reset overwrites
    /// in-progress edits wholesale; under `PreserveEdits` values of touched
    /// fields survive. Returns whether a reset happened.
    pub fn sync_external_defaults(&mut self, data: &ValueMap) -> bool {
        if data.is_empty() || *data == self.external_defaults {
            return false;
        }
        self.external_defaults = data.clone();
        let mut merged = merge_initial(&self.fields, &self.external_defaults);

        if self.defaults_policy == DefaultsPolicy::PreserveEdits {
            for descriptor in &self.fields {
                let name = descriptor.name();
                let touched = self.engine.meta(name).is_some_and(|meta| meta.touched);
                if touched && let Some(value) = self.engine.value(name) {
                    merged.insert(name.to_string(), value.clone());
                }
            }
        }

        self.engine.reset(merged);
        true
    }

    /// Back to the merged initial mapping, dropping all edits and metadata.
    pub fn reset(&mut self) {
        let initial = merge_initial(&self.fields, &self.external_defaults);
        self.engine.reset(initial);
    }
}

fn check_fields(fields: &[FieldDescriptor]) -> Result<(), ConfigError> {
    if fields.is_empty() {
        return Err(ConfigError::NoFields);
    }

    let mut seen = HashSet::new();
    for descriptor in fields {
        if !seen.insert(descriptor.name()) {
            return Err(ConfigError::DuplicateField(descriptor.name().to_string()));
        }
        if descriptor.kind().requires_options() && descriptor.options().is_empty() {
            return Err(ConfigError::MissingOptions(descriptor.name().to_string()));
        }
        if let Some(default) = descriptor.default_value()
            && !descriptor.kind().accepts(default)
        {
            return Err(ConfigError::DefaultTypeMismatch(
                descriptor.name().to_string(),
            ));
        }
    }
    Ok(())
}

fn merge_initial(fields: &[FieldDescriptor], external: &ValueMap) -> ValueMap {
    fields
        .iter()
        .map(|descriptor| {
            let value = descriptor.initial_value(external.get(descriptor.name()));
            (descriptor.name().to_string(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{DefaultsPolicy, Form, FormConfig, SubmitOutcome};
    use crate::core::error::{ConfigError, SubmitError};
    use crate::core::field::{FieldDescriptor, FieldKind, Rule, SelectOption};
    use crate::core::schema::Schema;
    use crate::core::value::{Value, ValueMap};
    use std::cell::Cell;

    fn profile_fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("email", "Email", FieldKind::Email)
                .with_rule(Rule::required("Email is required")),
            FieldDescriptor::new("newsletter", "Subscribe", FieldKind::Checkbox),
            FieldDescriptor::new("qty", "Quantity", FieldKind::Number).with_default(1i64),
        ]
    }

    fn profile_schema() -> Schema {
        Schema::new().field("email", |f| f.required("Email is required"))
    }

    fn mapping(entries: &[(&str, Value)]) -> ValueMap {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn initial_mapping_has_one_entry_per_field_with_kind_zeroes() {
        let form = Form::new(FormConfig::new(profile_fields(), profile_schema())).unwrap();

        assert_eq!(form.values().len(), 3);
        assert_eq!(form.value("email"), Some(&Value::text("")));
        assert_eq!(form.value("newsletter"), Some(&Value::Bool(false)));
        assert_eq!(form.value("qty"), Some(&Value::Number(1)));
    }

    #[test]
    fn external_defaults_take_precedence_over_declared() {
        let config = FormConfig::new(profile_fields(), profile_schema())
            .with_external_defaults(mapping(&[("qty", Value::Number(4))]));
        let form = Form::new(config).unwrap();

        assert_eq!(form.value("qty"), Some(&Value::Number(4)));
        assert_eq!(form.value("email"), Some(&Value::text("")));
    }

    #[test]
    fn duplicate_names_fail_construction() {
        let fields = vec![
            FieldDescriptor::new("email", "Email", FieldKind::Email),
            FieldDescriptor::new("email", "Email again", FieldKind::Text),
        ];
        let result = Form::new(FormConfig::new(fields, Schema::new()));
        assert_eq!(
            result.err().map(|e| e.to_string()),
            Some("duplicate field name `email`".to_string())
        );
    }

    #[test]
    fn select_without_options_fails_construction() {
        let fields = vec![FieldDescriptor::new("country", "Country", FieldKind::Select)];
        let result = Form::new(FormConfig::new(fields, Schema::new()));
        assert!(matches!(result, Err(ConfigError::MissingOptions(_))));

        let fields = vec![
            FieldDescriptor::new("country", "Country", FieldKind::Select)
                .with_options(vec![SelectOption::new("USA", "USA")]),
        ];
        assert!(Form::new(FormConfig::new(fields, Schema::new())).is_ok());
    }

    #[test]
    fn mismatched_default_fails_construction() {
        let fields = vec![
            FieldDescriptor::new("newsletter", "Subscribe", FieldKind::Checkbox)
                .with_default("yes"),
        ];
        let result = Form::new(FormConfig::new(fields, Schema::new()));
        assert!(matches!(result, Err(ConfigError::DefaultTypeMismatch(_))));
    }

    #[test]
    fn invalid_submission_never_reaches_the_callback() {
        let mut form = Form::new(FormConfig::new(profile_fields(), profile_schema())).unwrap();
        let called = Cell::new(false);

        let outcome = form.submit(|_| {
            called.set(true);
            Ok(())
        });

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert!(!called.get());
        let views: Vec<_> = form.field_views().collect();
        assert_eq!(views[0].error(), Some("Email is required"));
        assert_eq!(views[1].error(), None);
    }

    #[test]
    fn valid_submission_passes_the_mapping_through() {
        let mut form = Form::new(FormConfig::new(profile_fields(), profile_schema())).unwrap();
        form.set_value("email", Value::text("a@b.com")).unwrap();

        let mut seen = None;
        let outcome = form.submit(|values| {
            seen = Some(values.clone());
            Ok(())
        });

        assert_eq!(outcome, SubmitOutcome::Submitted);
        let seen = seen.unwrap();
        assert_eq!(seen.get("email"), Some(&Value::text("a@b.com")));
        assert!(!form.has_errors());
    }

    #[test]
    fn callback_failure_is_caught_without_field_errors() {
        let mut form = Form::new(FormConfig::new(profile_fields(), profile_schema())).unwrap();
        form.set_value("email", Value::text("a@b.com")).unwrap();

        let outcome = form.submit(|_| Err(SubmitError::new("backend rejected the update")));

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(SubmitError::new("backend rejected the update"))
        );
        assert!(!form.has_errors());
    }

    #[test]
    fn submission_never_mutates_the_mapping() {
        let mut form = Form::new(FormConfig::new(profile_fields(), profile_schema())).unwrap();
        form.set_value("email", Value::text("a@b.com")).unwrap();
        let before = form.values().clone();

        form.submit(|_| Ok(()));
        assert_eq!(form.values(), &before);

        form.set_value("email", Value::text("")).unwrap();
        let before = form.values().clone();
        form.submit(|_| Ok(()));
        assert_eq!(form.values(), &before);
    }

    #[test]
    fn late_defaults_overwrite_unsaved_edits_under_replace() {
        let mut form = Form::new(FormConfig::new(profile_fields(), profile_schema())).unwrap();
        form.set_value("email", Value::text("a@b.com")).unwrap();
        form.touch("email").unwrap();

        let applied = form.sync_external_defaults(&mapping(&[("email", Value::text("c@d.com"))]));

        assert!(applied);
        assert_eq!(form.value("email"), Some(&Value::text("c@d.com")));
    }

    #[test]
    fn preserve_edits_keeps_touched_fields() {
        let config = FormConfig::new(profile_fields(), profile_schema())
            .with_defaults_policy(DefaultsPolicy::PreserveEdits);
        let mut form = Form::new(config).unwrap();
        form.set_value("email", Value::text("a@b.com")).unwrap();
        form.touch("email").unwrap();

        form.sync_external_defaults(&mapping(&[
            ("email", Value::text("c@d.com")),
            ("qty", Value::Number(9)),
        ]));

        assert_eq!(form.value("email"), Some(&Value::text("a@b.com")));
        assert_eq!(form.value("qty"), Some(&Value::Number(9)));
    }

    #[test]
    fn reset_returns_to_the_merged_initial_mapping() {
        let config = FormConfig::new(profile_fields(), profile_schema())
            .with_external_defaults(mapping(&[("qty", Value::Number(4))]));
        let mut form = Form::new(config).unwrap();
        form.set_value("email", Value::text("a@b.com")).unwrap();
        form.set_value("qty", Value::Number(7)).unwrap();
        form.touch("email").unwrap();

        form.reset();

        assert_eq!(form.value("email"), Some(&Value::text("")));
        assert_eq!(form.value("qty"), Some(&Value::Number(4)));
        assert!(!form.has_errors());
    }

    #[test]
    fn defaults_sync_is_idempotent_per_value() {
        let mut form = Form::new(FormConfig::new(profile_fields(), profile_schema())).unwrap();
        let data = mapping(&[("email", Value::text("c@d.com"))]);

        assert!(form.sync_external_defaults(&data));
        form.set_value("email", Value::text("edited@x.com")).unwrap();
        assert!(!form.sync_external_defaults(&data));
        assert_eq!(form.value("email"), Some(&Value::text("edited@x.com")));
    }

    #[test]
    fn quantity_floor_gates_submission() {
        let fields = vec![
            FieldDescriptor::new("qty", "Quantity", FieldKind::Number)
                .with_rule(Rule::min(1, "Minimum quantity is 1")),
        ];
        let schema = Schema::from_fields(&fields).unwrap();
        let mut form = Form::new(FormConfig::new(fields, schema)).unwrap();

        form.set_value("qty", Value::Number(0)).unwrap();
        assert_eq!(form.submit(|_| Ok(())), SubmitOutcome::Invalid);
        let views: Vec<_> = form.field_views().collect();
        assert_eq!(views[0].error(), Some("Minimum quantity is 1"));

        form.set_value("qty", Value::Number(1)).unwrap();
        let mut seen = None;
        assert_eq!(
            form.submit(|values| {
                seen = Some(values.clone());
                Ok(())
            }),
            SubmitOutcome::Submitted
        );
        assert_eq!(seen.unwrap().get("qty"), Some(&Value::Number(1)));
    }
}
