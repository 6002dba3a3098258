//! Page controller for the medicine price catalogue.
//!
//! # Overview
//! Turns page events (load, create, update, delete) into `medicine-core`
//! requests, executes them through a `Transport`, and keeps a typed model
//! of the page that renders to HTML.
//!
//! # Design
//! - `page` holds the regions (list, average, alert, create form) and their
//!   markup.
//! - `controller` runs one event at a time and always reloads list and
//!   average after a successful mutation.
//! - `transport` is the only place that touches the network.
//! - `server` hosts the page over HTTP using plain forms.

pub mod config;
pub mod controller;
pub mod page;
pub mod server;
pub mod transport;

pub use config::Config;
pub use controller::PageController;
pub use page::{AverageRegion, CreateForm, ListRegion, MedicineCard, Page};
pub use transport::{ReqwestTransport, Transport};
