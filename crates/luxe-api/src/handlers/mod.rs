//! HTTP handlers

pub mod health;
pub mod admin;
pub mod products;
pub mod orders;
pub mod reviews;
pub mod collections;
pub mod settings;
pub mod reports;
pub mod upload;

use serde::Serialize;

/// `{ "message": ... }` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
