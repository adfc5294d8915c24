pub mod engine;
pub mod error;
pub mod field;
pub mod form;
pub mod manifest;
pub mod schema;
pub mod value;

pub use engine::{FieldMeta, FormEngine};
pub use error::{ConfigError, EngineError, FieldError, SubmitError};
pub use field::{FieldDescriptor, FieldKind, FieldName, Rule, SelectOption};
pub use form::{DefaultsPolicy, FieldView, Form, FormConfig, SubmitOutcome};
pub use manifest::{FormManifest, ManifestError};
pub use schema::Schema;
pub use value::{Value, ValueMap};
