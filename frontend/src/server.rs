//! Serves the page as plain HTML forms.
//!
//! Each route maps one page event onto the controller and answers with the
//! freshly rendered document. The controller sits behind an async mutex, so
//! events are handled one after another, never interleaved.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::controller::PageController;
use crate::page::CreateForm;
use crate::transport::Transport;

pub type SharedController<T> = Arc<Mutex<PageController<T>>>;

#[derive(Debug, Deserialize)]
pub struct UpdatePriceForm {
    #[serde(rename = "newPrice", default)]
    pub new_price: String,
}

pub fn router<T: Transport + 'static>(controller: PageController<T>) -> Router {
    let state: SharedController<T> = Arc::new(Mutex::new(controller));
    Router::new()
        .route("/", get(show_page::<T>))
        .route("/medicines", post(create_medicine::<T>))
        .route("/medicines/{name}/price", post(update_price::<T>))
        .route("/medicines/{name}/delete", post(delete_medicine::<T>))
        .with_state(state)
}

/// Render the document, then drop the alert so it is shown exactly once.
fn respond<T: Transport>(controller: &mut PageController<T>) -> Html<String> {
    let html = controller.page().render();
    controller.dismiss_alert();
    Html(html)
}

async fn show_page<T: Transport + 'static>(State(state): State<SharedController<T>>) -> Html<String> {
    let mut controller = state.lock().await;
    controller.load_page().await;
    respond(&mut controller)
}

async fn create_medicine<T: Transport + 'static>(
    State(state): State<SharedController<T>>,
    Form(form): Form<CreateForm>,
) -> Html<String> {
    let mut controller = state.lock().await;
    controller.fill_create_form(form);
    controller.submit_create().await;
    respond(&mut controller)
}

async fn update_price<T: Transport + 'static>(
    State(state): State<SharedController<T>>,
    Path(name): Path<String>,
    Form(form): Form<UpdatePriceForm>,
) -> Html<String> {
    let mut controller = state.lock().await;
    controller.submit_update(&name, &form.new_price).await;
    respond(&mut controller)
}

async fn delete_medicine<T: Transport + 'static>(
    State(state): State<SharedController<T>>,
    Path(name): Path<String>,
) -> Html<String> {
    let mut controller = state.lock().await;
    controller.click_delete(&name).await;
    respond(&mut controller)
}
