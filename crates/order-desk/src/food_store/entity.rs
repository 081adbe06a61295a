//! TableEntity implementation for the Food domain type.
//!
//! Foods reference nothing, so the context is `()`. Keys are spread over the buckets with
//! the mid-square hash.

use super::FoodError;
use crate::model::fields::{check_length, MAX_NAME_CHARS};
use crate::model::{Food, FoodCreate, FoodUpdate};
use table_framework::{hashing, TableEntity};

impl TableEntity for Food {
    type Key = i32;
    type Create = FoodCreate;
    type Update = FoodUpdate;
    type Context<'a> = ();
    type Error = FoodError;

    fn key(&self) -> i32 {
        self.id
    }

    fn bucket_index(key: i32, bucket_count: usize) -> usize {
        hashing::mid_square(key, bucket_count)
    }

    fn from_create_params(id: i32, params: FoodCreate) -> Result<Self, FoodError> {
        validate(&params)?;
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            available: params.available,
        })
    }

    /// Replaces name, price and availability. All three are re-validated.
    fn on_update(&mut self, update: FoodUpdate, _ctx: Self::Context<'_>) -> Result<(), FoodError> {
        validate(&update)?;
        self.name = update.name;
        self.price = update.price;
        self.available = update.available;
        Ok(())
    }
}

fn validate(params: &FoodCreate) -> Result<(), FoodError> {
    check_length(&params.name, MAX_NAME_CHARS).map_err(FoodError::NameTooLong)?;
    if !params.price.is_finite() || params.price < 0.0 {
        return Err(FoodError::InvalidPrice(params.price));
    }
    Ok(())
}
