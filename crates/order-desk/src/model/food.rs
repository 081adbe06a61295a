use super::fields::availability_label;
use crate::food_store::FoodError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dish that menus can list.
///
/// # Table Framework
/// This struct implements the [`TableEntity`](table_framework::TableEntity) trait in
/// [`food_store::entity`](crate::food_store::entity), which is where its fields are validated:
/// - name at most [`MAX_NAME_CHARS`](super::fields::MAX_NAME_CHARS) characters
/// - price finite and not negative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub available: bool,
}

impl Food {
    /// Parses the textual availability flag: `"Si"` or `"No"`, nothing else.
    pub fn parse_availability(text: &str) -> Result<bool, FoodError> {
        match text {
            "Si" => Ok(true),
            "No" => Ok(false),
            other => Err(FoodError::InvalidAvailability(other.to_string())),
        }
    }

    pub fn availability_label(&self) -> &'static str {
        availability_label(self.available)
    }
}

impl fmt::Display for Food {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ID={}, Name={}, Price={:.2}, Available={}]",
            self.id,
            self.name,
            self.price,
            self.availability_label()
        )
    }
}

/// Payload for creating a new food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodCreate {
    pub name: String,
    pub price: f64,
    pub available: bool,
}

impl FoodCreate {
    pub fn new(name: impl Into<String>, price: f64, available: bool) -> Self {
        Self {
            name: name.into(),
            price,
            available,
        }
    }

    /// Builds the payload from the textual availability flag (`"Si"` / `"No"`).
    pub fn from_label(
        name: impl Into<String>,
        price: f64,
        availability: &str,
    ) -> Result<Self, FoodError> {
        let available = Food::parse_availability(availability)?;
        Ok(Self::new(name, price, available))
    }
}

/// Replaces name, price and availability of an existing food.
pub type FoodUpdate = FoodCreate;
