use crate::core::error::ConfigError;
use crate::core::field::{FieldDescriptor, FieldKind, Rule, SelectOption};
use crate::core::form::FormConfig;
use crate::core::schema::Schema;

pub fn config() -> Result<FormConfig, ConfigError> {
    let fields = vec![
        FieldDescriptor::new("firstName", "First Name", FieldKind::Text)
            .with_rule(Rule::required("First name is required")),
        FieldDescriptor::new("lastName", "Last Name", FieldKind::Text)
            .with_rule(Rule::required("Last name is required")),
        FieldDescriptor::new("email", "Email", FieldKind::Email)
            .with_rule(Rule::required("Email is required"))
            .with_rule(Rule::email("Please enter a valid email address")),
        FieldDescriptor::new("occupation", "Occupation", FieldKind::Text),
        FieldDescriptor::new("country", "Country", FieldKind::Select).with_options(vec![
            SelectOption::new("Select country", ""),
            SelectOption::new("United States", "USA"),
            SelectOption::new("Canada", "Canada"),
            SelectOption::new("United Kingdom", "UK"),
            SelectOption::new("Australia", "Australia"),
            SelectOption::new("Germany", "Germany"),
            SelectOption::new("France", "France"),
            SelectOption::new("Japan", "Japan"),
        ]),
        FieldDescriptor::new("bio", "Bio", FieldKind::Textarea)
            .with_placeholder("Tell us about yourself"),
    ];

    let schema = Schema::from_fields(&fields)?;
    Ok(FormConfig::new(fields, schema).with_submit_label("Save Profile"))
}
