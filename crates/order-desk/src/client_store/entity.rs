//! TableEntity implementation for the Client domain type.

use super::ClientError;
use crate::model::fields::{check_length, MAX_NAME_CHARS, MAX_PHONE_CHARS};
use crate::model::{Client, ClientCreate, ClientUpdate};
use table_framework::{hashing, TableEntity};

impl TableEntity for Client {
    type Key = i32;
    type Create = ClientCreate;
    type Update = ClientUpdate;
    type Context<'a> = ();
    type Error = ClientError;

    fn key(&self) -> i32 {
        self.id
    }

    fn bucket_index(key: i32, bucket_count: usize) -> usize {
        hashing::modulo(key, bucket_count)
    }

    fn from_create_params(id: i32, params: ClientCreate) -> Result<Self, ClientError> {
        validate(&params)?;
        Ok(Self {
            id,
            name: params.name,
            phone: params.phone,
        })
    }

    fn on_update(
        &mut self,
        update: ClientUpdate,
        _ctx: Self::Context<'_>,
    ) -> Result<(), ClientError> {
        validate(&update)?;
        self.name = update.name;
        self.phone = update.phone;
        Ok(())
    }
}

fn validate(params: &ClientCreate) -> Result<(), ClientError> {
    check_length(&params.name, MAX_NAME_CHARS).map_err(ClientError::NameTooLong)?;
    check_length(&params.phone, MAX_PHONE_CHARS).map_err(ClientError::PhoneTooLong)?;
    Ok(())
}
