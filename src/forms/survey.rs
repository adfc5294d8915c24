use crate::core::error::ConfigError;
use crate::core::field::{FieldDescriptor, FieldKind, Rule, SelectOption};
use crate::core::form::FormConfig;
use crate::core::schema::Schema;

fn rating_options(prompt: &str, entries: &[(&str, &str)]) -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new(prompt, "")];
    options.extend(
        entries
            .iter()
            .map(|(label, value)| SelectOption::new(*label, *value)),
    );
    options
}

pub fn config() -> Result<FormConfig, ConfigError> {
    let fields = vec![
        FieldDescriptor::new(
            "satisfaction",
            "How satisfied are you with our service?",
            FieldKind::Select,
        )
        .with_options(rating_options(
            "Select an option",
            &[
                ("Very Satisfied", "very_satisfied"),
                ("Satisfied", "satisfied"),
                ("Neutral", "neutral"),
                ("Dissatisfied", "dissatisfied"),
                ("Very Dissatisfied", "very_dissatisfied"),
            ],
        ))
        .with_rule(Rule::required("Please select an option")),
        FieldDescriptor::new(
            "usageFrequency",
            "How often do you use our product?",
            FieldKind::Select,
        )
        .with_options(rating_options(
            "Select an option",
            &[
                ("Daily", "daily"),
                ("Weekly", "weekly"),
                ("Monthly", "monthly"),
                ("Rarely", "rarely"),
                ("Never", "never"),
            ],
        ))
        .with_rule(Rule::required("Please select an option")),
        FieldDescriptor::new(
            "features",
            "Which feature do you find most valuable?",
            FieldKind::Select,
        )
        .with_options(rating_options(
            "Select a feature",
            &[
                ("User Interface", "ui"),
                ("Performance", "performance"),
                ("Reliability", "reliability"),
                ("Customer Support", "support"),
                ("Documentation", "docs"),
            ],
        ))
        .with_rule(Rule::required("Please select a feature")),
        FieldDescriptor::new(
            "improvements",
            "What would you like us to improve?",
            FieldKind::Textarea,
        )
        .with_placeholder("Please share your suggestions for improvement...")
        .with_rule(Rule::min_len(10, "Please provide at least 10 characters")),
        FieldDescriptor::new(
            "recommendation",
            "How likely are you to recommend our product to others?",
            FieldKind::Select,
        )
        .with_options(rating_options(
            "Select a rating",
            &[
                ("5 - Highly Likely", "5"),
                ("4 - Likely", "4"),
                ("3 - Neutral", "3"),
                ("2 - Unlikely", "2"),
                ("1 - Highly Unlikely", "1"),
            ],
        ))
        .with_rule(Rule::required("Please select a rating")),
        FieldDescriptor::new("email", "Email (optional)", FieldKind::Email)
            .with_placeholder("Enter your email if you'd like a response")
            .with_rule(Rule::email("Please enter a valid email address")),
        FieldDescriptor::new("newsletter", "Subscribe to our newsletter", FieldKind::Checkbox),
    ];

    let schema = Schema::from_fields(&fields)?;
    Ok(FormConfig::new(fields, schema).with_submit_label("Submit Survey"))
}
