use crate::core::error::ConfigError;
use crate::core::field::{FieldDescriptor, FieldKind, Rule};
use crate::core::form::FormConfig;
use crate::core::schema::Schema;

pub fn config() -> Result<FormConfig, ConfigError> {
    let fields = vec![
        FieldDescriptor::new("name", "Full Name", FieldKind::Text)
            .with_placeholder("Enter your full name")
            .with_rule(Rule::required("Name is required"))
            .with_rule(Rule::min_len(2, "Name must be at least 2 characters")),
        FieldDescriptor::new("email", "Email Address", FieldKind::Email)
            .with_placeholder("Enter your email address")
            .with_rule(Rule::required("Email is required"))
            .with_rule(Rule::email("Please enter a valid email address")),
        FieldDescriptor::new("subject", "Subject", FieldKind::Text)
            .with_placeholder("What is your message about?")
            .with_rule(Rule::required("Subject is required")),
        FieldDescriptor::new("message", "Message", FieldKind::Textarea)
            .with_placeholder("Type your message here...")
            .with_rows(4)
            .with_rule(Rule::required("Message is required"))
            .with_rule(Rule::min_len(10, "Message must be at least 10 characters")),
    ];

    let schema = Schema::from_fields(&fields)?;
    Ok(FormConfig::new(fields, schema).with_submit_label("Send Message"))
}
