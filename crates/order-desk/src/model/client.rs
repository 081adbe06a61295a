use serde::{Deserialize, Serialize};
use std::fmt;

/// A customer who places orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub phone: String,
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ID={}, Name={}, Phone={}]", self.id, self.name, self.phone)
    }
}

/// Payload for creating a client; also used to replace name and phone on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientCreate {
    pub name: String,
    pub phone: String,
}

impl ClientCreate {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

pub type ClientUpdate = ClientCreate;
