//! Domain DTOs for the medicine API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single medicine record. `name` doubles as the identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medicine {
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Body of the list endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MedicineList {
    #[serde(default)]
    pub medicines: Vec<Medicine>,
}

/// Request payload for creating a medicine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateMedicine {
    pub name: String,
    pub price: f64,
}

/// Request payload for changing the price of an existing medicine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateMedicine {
    pub price: f64,
}

/// Body returned by create, update, delete and single lookups.
///
/// Every field is optional so that error bodies of any shape still parse and
/// the application-level `code` can be checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MutationReply {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medicine: Option<Medicine>,
}

impl MutationReply {
    /// The user-facing failure text carried by the body, if any.
    pub fn failure_message(&self) -> Option<&str> {
        [self.message.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .find(|m| !m.is_empty())
    }
}
