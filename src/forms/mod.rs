mod contact;
mod order;
mod profile;
mod registration;
mod survey;

pub use order::{PRODUCTS, Product, format_cents, order_total_cents};

use crate::core::error::ConfigError;
use crate::core::form::FormConfig;
use crate::data::DataSource;

/// The built-in demo forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoForm {
    Registration,
    Contact,
    Profile,
    Order,
    Survey,
}

impl DemoForm {
    pub const ALL: [Self; 5] = [
        Self::Registration,
        Self::Contact,
        Self::Profile,
        Self::Order,
        Self::Survey,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "registration" => Some(Self::Registration),
            "contact" => Some(Self::Contact),
            "profile" => Some(Self::Profile),
            "order" => Some(Self::Order),
            "survey" => Some(Self::Survey),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Registration => "registration",
            Self::Contact => "contact",
            Self::Profile => "profile",
            Self::Order => "order",
            Self::Survey => "survey",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Registration => "Register",
            Self::Contact => "Contact Us",
            Self::Profile => "User Profile",
            Self::Order => "Order Form",
            Self::Survey => "Customer Feedback",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Registration => "Registration successful!",
            Self::Contact => "Thank you for your message! We'll get back to you soon.",
            Self::Profile => "Profile updated successfully!",
            Self::Order => "Order placed successfully!",
            Self::Survey => {
                "Thank you for completing our survey! Your feedback is valuable to us."
            }
        }
    }

    /// Forms backed by an async record: defaults load from it and submission
    /// mutates it.
    pub fn data_source(self) -> Option<DataSource> {
        match self {
            Self::Profile => Some(DataSource::Profile),
            Self::Order => Some(DataSource::Order),
            Self::Registration | Self::Contact | Self::Survey => None,
        }
    }

    pub fn config(self) -> Result<FormConfig, ConfigError> {
        match self {
            Self::Registration => registration::config(),
            Self::Contact => contact::config(),
            Self::Profile => profile::config(),
            Self::Order => order::config(),
            Self::Survey => survey::config(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DemoForm, format_cents, order_total_cents};
    use crate::core::form::{Form, SubmitOutcome};
    use crate::core::value::{Value, ValueMap};

    #[test]
    fn every_demo_form_constructs() {
        for demo in DemoForm::ALL {
            let form = Form::new(demo.config().unwrap()).unwrap();
            assert!(!form.fields().is_empty(), "{} has no fields", demo.name());
        }
    }

    #[test]
    fn registration_rejects_a_mismatched_confirmation() {
        let mut form = Form::new(DemoForm::Registration.config().unwrap()).unwrap();
        form.set_value("username", Value::text("johnny")).unwrap();
        form.set_value("email", Value::text("john@example.com")).unwrap();
        form.set_value("password", Value::text("Abcd1234")).unwrap();
        form.set_value("confirmPassword", Value::text("xyz")).unwrap();

        assert_eq!(form.submit(|_| Ok(())), SubmitOutcome::Invalid);
        let errors: Vec<_> = form
            .field_views()
            .filter_map(|view| view.error().map(|error| (view.descriptor.name().to_string(), error.to_string())))
            .collect();
        assert_eq!(
            errors,
            vec![("confirmPassword".to_string(), "Passwords don't match".to_string())]
        );

        form.set_value("confirmPassword", Value::text("Abcd1234")).unwrap();
        assert_eq!(form.submit(|_| Ok(())), SubmitOutcome::Submitted);
    }

    #[test]
    fn survey_email_is_optional_but_checked_when_present() {
        let mut form = Form::new(DemoForm::Survey.config().unwrap()).unwrap();
        form.set_value("satisfaction", Value::text("satisfied")).unwrap();
        form.set_value("usageFrequency", Value::text("daily")).unwrap();
        form.set_value("features", Value::text("ui")).unwrap();
        form.set_value("recommendation", Value::text("5")).unwrap();

        assert_eq!(form.submit(|_| Ok(())), SubmitOutcome::Submitted);

        form.set_value("email", Value::text("not-an-email")).unwrap();
        assert_eq!(form.submit(|_| Ok(())), SubmitOutcome::Invalid);
    }

    #[test]
    fn order_total_follows_product_and_quantity() {
        let mut values = ValueMap::new();
        assert_eq!(order_total_cents(&values), 0);

        values.insert("product".to_string(), Value::text("p2"));
        values.insert("quantity".to_string(), Value::Number(2));
        assert_eq!(order_total_cents(&values), 7998);
        assert_eq!(format_cents(7998), "$79.98");
    }

    #[test]
    fn order_quantity_is_bounded() {
        let mut form = Form::new(DemoForm::Order.config().unwrap()).unwrap();
        form.set_value("product", Value::text("p1")).unwrap();
        form.set_value("firstName", Value::text("Jo")).unwrap();
        form.set_value("lastName", Value::text("Doe")).unwrap();
        form.set_value("email", Value::text("jo@example.com")).unwrap();
        form.set_value("address", Value::text("1 Long Road, Springfield")).unwrap();

        form.set_value("quantity", Value::Number(11)).unwrap();
        assert_eq!(form.submit(|_| Ok(())), SubmitOutcome::Invalid);

        form.set_value("quantity", Value::Number(10)).unwrap();
        assert_eq!(form.submit(|_| Ok(())), SubmitOutcome::Submitted);
    }
}
