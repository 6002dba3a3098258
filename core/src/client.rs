//! Stateless HTTP request builder and response parser for the medicine API.
//!
//! # Design
//! `MedicineClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip.
//!
//! Every failed `parse_*` is logged at `error` level before it is returned;
//! nothing is retried.

use serde::Deserialize;
use tracing::error;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::input::{coerce_price, normalize_name, require_price, PriceInput};
use crate::types::{CreateMedicine, Medicine, MedicineList, MutationReply, UpdateMedicine};

const FETCH_FAILED: &str = "Error fetching data.";
const AVERAGE_FAILED: &str = "Error fetching average price";

#[derive(Deserialize)]
struct AverageReply {
    #[serde(default)]
    average_price: Option<f64>,
}

/// Synchronous, stateless client for the medicine API.
#[derive(Debug, Clone)]
pub struct MedicineClient {
    base_url: String,
}

impl MedicineClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn medicine_path(&self, name: &str) -> String {
        format!("{}/medicines/{}", self.base_url, urlencoding::encode(name))
    }

    pub fn build_list_medicines(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/medicines", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_average_price(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/average", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_medicine(&self, name: &str) -> Result<HttpRequest, ApiError> {
        let name = normalize_name(name)?;
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path: self.medicine_path(&name),
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn build_create_medicine<'a>(
        &self,
        name: &str,
        price: impl Into<PriceInput<'a>>,
    ) -> Result<HttpRequest, ApiError> {
        let input = CreateMedicine {
            name: normalize_name(name)?,
            price: coerce_price(price.into())?,
        };
        let body = serde_json::to_string(&input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/medicines", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_update_medicine<'a>(
        &self,
        name: &str,
        price: impl Into<PriceInput<'a>>,
    ) -> Result<HttpRequest, ApiError> {
        let name = normalize_name(name)?;
        let input = UpdateMedicine {
            price: require_price(price.into())?,
        };
        let body = serde_json::to_string(&input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Patch,
            path: self.medicine_path(&name),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete_medicine(&self, name: &str) -> Result<HttpRequest, ApiError> {
        let name = normalize_name(name)?;
        Ok(HttpRequest {
            method: HttpMethod::Delete,
            path: self.medicine_path(&name),
            headers: Vec::new(),
            body: None,
        })
    }

    /// `None` means the server answered with an empty or `null` body.
    pub fn parse_list_medicines(&self, response: HttpResponse) -> Result<Option<MedicineList>, ApiError> {
        read_list(&response).inspect_err(|e| error!(error = %e, "Error fetching all medicines"))
    }

    pub fn parse_average_price(&self, response: HttpResponse) -> Result<f64, ApiError> {
        read_average(&response).inspect_err(|e| error!(error = %e, "Error fetching average price"))
    }

    pub fn parse_get_medicine(&self, response: HttpResponse) -> Result<Medicine, ApiError> {
        read_single(&response).inspect_err(|e| error!(error = %e, "Error fetching medicine"))
    }

    pub fn parse_create_medicine(&self, response: HttpResponse) -> Result<MutationReply, ApiError> {
        read_mutation(&response, &[200, 201]).inspect_err(|e| error!(error = %e, "Error creating medicine"))
    }

    pub fn parse_update_medicine(&self, response: HttpResponse) -> Result<MutationReply, ApiError> {
        read_mutation(&response, &[200]).inspect_err(|e| error!(error = %e, "Error updating medicine"))
    }

    pub fn parse_delete_medicine(&self, response: HttpResponse) -> Result<MutationReply, ApiError> {
        read_mutation(&response, &[200]).inspect_err(|e| error!(error = %e, "Error deleting medicine"))
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn deserialization(e: serde_json::Error) -> ApiError {
    ApiError::DeserializationError(e.to_string())
}

fn read_list(response: &HttpResponse) -> Result<Option<MedicineList>, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Fetch(FETCH_FAILED.to_string()));
    }
    let body = response.body.trim();
    if body.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(body).map_err(deserialization)
}

fn read_average(response: &HttpResponse) -> Result<f64, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Fetch(AVERAGE_FAILED.to_string()));
    }
    let reply: AverageReply = serde_json::from_str(&response.body).map_err(deserialization)?;
    reply
        .average_price
        .ok_or_else(|| ApiError::DeserializationError("missing average_price".to_string()))
}

fn read_single(response: &HttpResponse) -> Result<Medicine, ApiError> {
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    let reply = read_mutation(response, &[200])?;
    reply
        .medicine
        .ok_or_else(|| ApiError::DeserializationError("missing medicine".to_string()))
}

/// Success needs a 2xx status and a body `code` from `accepted`.
fn read_mutation(response: &HttpResponse, accepted: &[i64]) -> Result<MutationReply, ApiError> {
    let status = response.status;
    match serde_json::from_str::<MutationReply>(&response.body) {
        Ok(reply) if response.is_success() && reply.code.is_some_and(|c| accepted.contains(&c)) => Ok(reply),
        Ok(reply) => Err(ApiError::Api {
            status,
            message: reply.failure_message().unwrap_or(FETCH_FAILED).to_string(),
        }),
        Err(e) if response.is_success() => Err(deserialization(e)),
        Err(_) => Err(ApiError::Api {
            status,
            message: FETCH_FAILED.to_string(),
        }),
    }
}
