use crate::core::error::ConfigError;
use crate::core::field::{FieldDescriptor, FieldKind, Rule, SelectOption};
use crate::core::form::FormConfig;
use crate::core::schema::Schema;
use crate::core::value::{Value, ValueMap};

pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub price_cents: i64,
}

pub const PRODUCTS: [Product; 4] = [
    Product {
        id: "p1",
        name: "Basic Widget",
        price_cents: 1999,
    },
    Product {
        id: "p2",
        name: "Advanced Widget",
        price_cents: 3999,
    },
    Product {
        id: "p3",
        name: "Premium Widget",
        price_cents: 5999,
    },
    Product {
        id: "p4",
        name: "Super Widget",
        price_cents: 9999,
    },
];

pub fn format_cents(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Running total for the order form: selected product price times quantity,
/// zero while no product is chosen.
pub fn order_total_cents(values: &ValueMap) -> i64 {
    let selected = values.get("product").map(Value::display).unwrap_or_default();
    let Some(product) = PRODUCTS.iter().find(|product| product.id == selected) else {
        return 0;
    };
    let quantity = values.get("quantity").and_then(Value::as_number).unwrap_or(0);
    product.price_cents * quantity.max(0)
}

pub fn config() -> Result<FormConfig, ConfigError> {
    let mut options = vec![SelectOption::new("Choose a product", "")];
    options.extend(PRODUCTS.iter().map(|product| {
        SelectOption::new(
            format!("{} - {}", product.name, format_cents(product.price_cents)),
            product.id,
        )
    }));

    let fields = vec![
        FieldDescriptor::new("product", "Select Product", FieldKind::Select)
            .with_options(options)
            .with_rule(Rule::required("Please select a product")),
        FieldDescriptor::new("quantity", "Quantity", FieldKind::Number)
            .with_default(1i64)
            .with_rule(Rule::required("Quantity is required"))
            .with_rule(Rule::min(1, "Minimum quantity is 1"))
            .with_rule(Rule::max(10, "Maximum quantity is 10")),
        FieldDescriptor::new("firstName", "First Name", FieldKind::Text)
            .with_placeholder("Your first name")
            .with_rule(Rule::required("First name is required")),
        FieldDescriptor::new("lastName", "Last Name", FieldKind::Text)
            .with_placeholder("Your last name")
            .with_rule(Rule::required("Last name is required")),
        FieldDescriptor::new("email", "Email", FieldKind::Email)
            .with_placeholder("Your email address")
            .with_rule(Rule::required("Email is required"))
            .with_rule(Rule::email("Please enter a valid email address")),
        FieldDescriptor::new("address", "Shipping Address", FieldKind::Textarea)
            .with_placeholder("Enter your full shipping address")
            .with_rule(Rule::required("Shipping address is required"))
            .with_rule(Rule::min_len(10, "Please enter a complete address")),
    ];

    let schema = Schema::from_fields(&fields)?;
    Ok(FormConfig::new(fields, schema).with_submit_label("Place Order"))
}
