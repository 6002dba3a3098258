//! Synchronous API client core for the medicine price service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, so everything in here is deterministic and can be
//! tested against canned responses.
//!
//! # Design
//! - `MedicineClient` is stateless: it holds only `base_url`.
//! - Each operation is split into `build_*` (produces a request) and
//!   `parse_*` (consumes a response), so the I/O boundary is explicit.
//! - Input normalization (name trimming, price coercion) happens in
//!   `build_*`, so invalid input never produces a request.
//! - Mutations succeed only when both the HTTP status and the `code` field of
//!   the JSON body agree.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod input;
pub mod types;

pub use client::MedicineClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use input::PriceInput;
pub use types::{CreateMedicine, Medicine, MedicineList, MutationReply, UpdateMedicine};
