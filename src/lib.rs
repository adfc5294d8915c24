pub mod app;
pub mod core;
pub mod data;
pub mod forms;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use crate::app::FormApp;
pub use crate::core::{
    ConfigError, DefaultsPolicy, EngineError, FieldDescriptor, FieldError, FieldKind, FieldMeta,
    FieldName, FieldView, Form, FormConfig, FormEngine, FormManifest, ManifestError, Rule, Schema,
    SelectOption, SubmitError, SubmitOutcome, Value, ValueMap,
};
pub use crate::data::{ApiError, DataSource, Resource, ResourceEvent};
pub use crate::forms::DemoForm;
pub use crate::widgets::{Widget, WidgetProps, WidgetResponse};
