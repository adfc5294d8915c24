use crate::core::value::{Value, ValueMap};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::thread;
use std::time::Duration;
use thiserror::Error;

/// Simulated network latency on every endpoint.
const LATENCY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Canned profile record; field names line up with the profile form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub bio: String,
    pub occupation: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetails {
    pub product: String,
    pub quantity: i64,
}

pub fn fetch_user_profile() -> Result<ValueMap, ApiError> {
    thread::sleep(LATENCY);
    record_values(&UserProfile {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        bio: "I'm a software developer with over 5 years of experience.".to_string(),
        occupation: "Software Developer".to_string(),
        country: "USA".to_string(),
    })
}

pub fn update_user_profile(values: &ValueMap) -> Result<(), ApiError> {
    thread::sleep(LATENCY);
    decode::<UserProfile>(values).map(|_| ())
}

pub fn fetch_order_details() -> Result<ValueMap, ApiError> {
    thread::sleep(LATENCY);
    record_values(&OrderDetails {
        product: "p3".to_string(),
        quantity: 2,
    })
}

pub fn update_order(values: &ValueMap) -> Result<(), ApiError> {
    thread::sleep(LATENCY);
    decode::<OrderDetails>(values).map(|_| ())
}

fn record_values<T: Serialize>(record: &T) -> Result<ValueMap, ApiError> {
    let json = serde_json::to_value(record).map_err(|error| ApiError::new(error.to_string()))?;
    let JsonValue::Object(object) = json else {
        return Err(ApiError::new("record did not serialize to an object"));
    };
    Ok(object
        .iter()
        .map(|(name, value)| (name.clone(), Value::from_json(value)))
        .collect())
}

fn decode<T: DeserializeOwned>(values: &ValueMap) -> Result<T, ApiError> {
    let object = values
        .iter()
        .map(|(name, value)| (name.clone(), value.to_json()))
        .collect();
    serde_json::from_value(JsonValue::Object(object))
        .map_err(|error| ApiError::new(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{OrderDetails, decode, fetch_user_profile, record_values};
    use crate::core::value::Value;

    #[test]
    fn profile_record_maps_to_form_field_names() {
        let values = fetch_user_profile().unwrap();
        assert_eq!(values.get("firstName"), Some(&Value::text("John")));
        assert_eq!(values.get("email"), Some(&Value::text("john.doe@example.com")));
        assert_eq!(values.get("country"), Some(&Value::text("USA")));
    }

    #[test]
    fn record_values_round_trips_through_decode() {
        let order = OrderDetails {
            product: "p1".to_string(),
            quantity: 3,
        };
        let values = record_values(&order).unwrap();
        assert_eq!(values.get("quantity"), Some(&Value::Number(3)));

        let decoded: OrderDetails = decode(&values).unwrap();
        assert_eq!(decoded.product, "p1");
        assert_eq!(decoded.quantity, 3);
    }

    #[test]
    fn decode_rejects_a_cleared_quantity() {
        let order = OrderDetails {
            product: "p1".to_string(),
            quantity: 3,
        };
        let mut values = record_values(&order).unwrap();
        values.insert("quantity".to_string(), Value::None);
        assert!(decode::<OrderDetails>(&values).is_err());
    }
}
