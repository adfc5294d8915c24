use crate::core::error::ConfigError;
use crate::core::field::{FieldDescriptor, FieldKind, Rule};
use crate::core::form::FormConfig;
use crate::core::schema::Schema;

pub fn config() -> Result<FormConfig, ConfigError> {
    let fields = vec![
        FieldDescriptor::new("username", "Username", FieldKind::Text)
            .with_placeholder("Enter your username")
            .with_rule(Rule::required("Username is required"))
            .with_rule(Rule::min_len(3, "Username must be at least 3 characters"))
            .with_rule(Rule::max_len(20, "Username must be at most 20 characters")),
        FieldDescriptor::new("email", "Email", FieldKind::Email)
            .with_placeholder("Enter your email")
            .with_rule(Rule::required("Email is required"))
            .with_rule(Rule::email("Please enter a valid email address")),
        FieldDescriptor::new("password", "Password", FieldKind::Password)
            .with_placeholder("Enter your password")
            .with_rule(Rule::required("Password is required"))
            .with_rule(Rule::min_len(8, "Password must be at least 8 characters"))
            .with_rule(Rule::matches(
                "[A-Z]",
                "Password must contain at least one uppercase letter",
            ))
            .with_rule(Rule::matches(
                "[a-z]",
                "Password must contain at least one lowercase letter",
            ))
            .with_rule(Rule::matches(
                "[0-9]",
                "Password must contain at least one number",
            )),
        FieldDescriptor::new("confirmPassword", "Confirm Password", FieldKind::Password)
            .with_placeholder("Confirm your password")
            .with_dependency("password")
            .with_rule(Rule::required("Please confirm your password")),
    ];

    let schema = Schema::from_fields(&fields)?.refine(
        "confirmPassword",
        "Passwords don't match",
        |values| values.get("password") == values.get("confirmPassword"),
    );

    Ok(FormConfig::new(fields, schema).with_submit_label("Register"))
}
