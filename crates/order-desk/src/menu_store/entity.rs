//! TableEntity implementation for the Menu domain type.
//!
//! The context is the food store. Every listed food must exist and be available, both on
//! create and on update; the first offending id is reported.

use super::MenuError;
use crate::food_store::FoodStore;
use crate::model::fields::is_calendar_date;
use crate::model::{Menu, MenuCreate, MenuUpdate};
use table_framework::{hashing, TableEntity};

impl TableEntity for Menu {
    type Key = i32;
    type Create = MenuCreate;
    type Update = MenuUpdate;
    type Context<'a> = &'a FoodStore;
    type Error = MenuError;

    fn key(&self) -> i32 {
        self.id
    }

    fn bucket_index(key: i32, bucket_count: usize) -> usize {
        hashing::modulo(key, bucket_count)
    }

    fn from_create_params(id: i32, params: MenuCreate) -> Result<Self, MenuError> {
        check_date(&params.date)?;
        Ok(Self {
            id,
            date: params.date,
            foods: params.foods,
        })
    }

    fn on_create(&self, foods: Self::Context<'_>) -> Result<(), MenuError> {
        check_foods(&self.foods, foods)
    }

    /// Replaces date and food list together.
    fn on_update(&mut self, update: MenuUpdate, foods: Self::Context<'_>) -> Result<(), MenuError> {
        check_date(&update.date)?;
        check_foods(&update.foods, foods)?;
        self.date = update.date;
        self.foods = update.foods;
        Ok(())
    }
}

fn check_date(date: &str) -> Result<(), MenuError> {
    if is_calendar_date(date) {
        Ok(())
    } else {
        Err(MenuError::InvalidDate(date.to_string()))
    }
}

fn check_foods(ids: &[i32], foods: &FoodStore) -> Result<(), MenuError> {
    for &id in ids {
        match foods.find(id) {
            None => return Err(MenuError::FoodNotFound(id)),
            Some(food) if !food.available => return Err(MenuError::FoodUnavailable(id)),
            Some(_) => {}
        }
    }
    Ok(())
}
