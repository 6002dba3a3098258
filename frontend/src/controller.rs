//! Event handlers that drive the page.
//!
//! # Design
//! `PageController` owns the page state and performs one operation at a
//! time: every handler awaits its API call and then the list and average
//! reloads in sequence, so a successful mutation is never visible without
//! the refreshed view. Each failure has a fixed display target:
//!
//! | Operation | Failure goes to        |
//! |-----------|------------------------|
//! | load      | list region            |
//! | average   | static fallback text   |
//! | create    | blocking alert         |
//! | update    | inline span on the card|
//! | delete    | list region            |

use medicine_core::{ApiError, HttpRequest, HttpResponse, MedicineClient, MedicineList, MutationReply};
use tracing::{error, info, warn};

use crate::page::{AverageRegion, CreateForm, ListRegion, MedicineCard, Page};
use crate::transport::Transport;

pub struct PageController<T> {
    client: MedicineClient,
    transport: T,
    page: Page,
}

impl<T: Transport> PageController<T> {
    pub fn new(client: MedicineClient, transport: T) -> Self {
        Self {
            client,
            transport,
            page: Page::default(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Clear the blocking alert once the host has shown it.
    pub fn dismiss_alert(&mut self) -> Option<String> {
        self.page.alert.take()
    }

    /// Replace the contents of the create form inputs.
    pub fn fill_create_form(&mut self, form: CreateForm) {
        self.page.create_form = form;
    }

    /// Initial page load: list first, then the average.
    pub async fn load_page(&mut self) {
        self.load_list().await;
        self.load_average().await;
    }

    pub async fn load_list(&mut self) {
        self.page.list = match self.fetch_list().await {
            Ok(Some(list)) => ListRegion::Items(list.medicines.into_iter().map(MedicineCard::new).collect()),
            Ok(None) => ListRegion::NoData,
            Err(e) => ListRegion::Message(e.to_string()),
        };
    }

    /// Failures degrade to the fallback text and go no further.
    pub async fn load_average(&mut self) {
        self.page.average = match self.fetch_average().await {
            Ok(price) => AverageRegion::Price(price),
            Err(e) => {
                warn!(error = %e, "average price unavailable");
                AverageRegion::Unavailable
            }
        };
    }

    pub async fn submit_create(&mut self) {
        let form = self.page.create_form.clone();
        match self.create(&form).await {
            Ok(_) => {
                info!(medicine = form.name.trim(), "medicine created");
                self.page.create_form = CreateForm::default();
                self.reload().await;
            }
            Err(e) => self.page.alert = Some(e.to_string()),
        }
    }

    pub async fn submit_update(&mut self, name: &str, new_price: &str) {
        match self.update(name, new_price).await {
            Ok(_) => {
                info!(medicine = name, "medicine updated");
                self.reload().await;
            }
            Err(e) => {
                if let Some(card) = self.page.card_mut(name) {
                    card.errors.push(e.to_string());
                }
            }
        }
    }

    pub async fn click_delete(&mut self, name: &str) {
        match self.delete(name).await {
            Ok(_) => {
                info!(medicine = name, "medicine deleted");
                self.reload().await;
            }
            Err(e) => self.page.list = ListRegion::Message(e.to_string()),
        }
    }

    async fn reload(&mut self) {
        self.load_list().await;
        self.load_average().await;
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method.as_str();
        let path = request.path.clone();
        self.transport
            .execute(request)
            .await
            .inspect_err(|e| error!(method = method, path = %path, error = %e, "request failed"))
    }

    async fn fetch_list(&self) -> Result<Option<MedicineList>, ApiError> {
        let response = self.send(self.client.build_list_medicines()).await?;
        self.client.parse_list_medicines(response)
    }

    async fn fetch_average(&self) -> Result<f64, ApiError> {
        let response = self.send(self.client.build_average_price()).await?;
        self.client.parse_average_price(response)
    }

    async fn create(&self, form: &CreateForm) -> Result<MutationReply, ApiError> {
        let request = self.client.build_create_medicine(&form.name, &form.price)?;
        let response = self.send(request).await?;
        self.client.parse_create_medicine(response)
    }

    async fn update(&self, name: &str, price: &str) -> Result<MutationReply, ApiError> {
        let request = self.client.build_update_medicine(name, price)?;
        let response = self.send(request).await?;
        self.client.parse_update_medicine(response)
    }

    async fn delete(&self, name: &str) -> Result<MutationReply, ApiError> {
        let request = self.client.build_delete_medicine(name)?;
        let response = self.send(request).await?;
        self.client.parse_delete_medicine(response)
    }
}
