pub mod api;
pub mod resource;

pub use api::ApiError;
pub use resource::{Resource, ResourceEvent};

use crate::core::value::ValueMap;

/// Which fetch/update endpoint pair backs a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Profile,
    Order,
}

impl DataSource {
    pub fn fetch(self) -> Result<ValueMap, ApiError> {
        match self {
            Self::Profile => api::fetch_user_profile(),
            Self::Order => api::fetch_order_details(),
        }
    }

    pub fn update(self, values: &ValueMap) -> Result<(), ApiError> {
        match self {
            Self::Profile => api::update_user_profile(values),
            Self::Order => api::update_order(values),
        }
    }
}
