use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Medicine {
    pub name: String,
    pub price: Option<f64>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MedicineList {
    pub medicines: Vec<Medicine>,
}

#[derive(Deserialize)]
pub struct CreateMedicine {
    pub name: String,
    pub price: f64,
}

#[derive(Deserialize)]
pub struct UpdateMedicine {
    pub price: f64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MedicineReply {
    pub code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medicine: Option<Medicine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AverageReply {
    pub code: u16,
    pub average_price: f64,
}

/// Medicines in insertion order; names are unique.
pub type Db = Arc<RwLock<Vec<Medicine>>>;

type Reply = (StatusCode, Json<MedicineReply>);

pub fn app() -> Router {
    app_with(Vec::new())
}

pub fn app_with(medicines: Vec<Medicine>) -> Router {
    let db: Db = Arc::new(RwLock::new(medicines));
    Router::new()
        .route("/medicines", get(list_medicines).post(create_medicine))
        .route(
            "/medicines/{name}",
            get(get_medicine).patch(update_medicine).delete(delete_medicine),
        )
        .route("/average", get(average_price))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn failure(status: StatusCode, error: &str) -> Reply {
    (
        status,
        Json(MedicineReply {
            code: status.as_u16(),
            error: Some(error.to_string()),
            ..Default::default()
        }),
    )
}

fn not_found() -> Reply {
    failure(StatusCode::NOT_FOUND, "Medicine not found")
}

fn require_name(name: &str) -> Result<&str, Reply> {
    let name = name.trim();
    if name.is_empty() {
        return Err(failure(StatusCode::BAD_REQUEST, "Name cannot be empty string"));
    }
    Ok(name)
}

fn require_price(price: f64) -> Result<f64, Reply> {
    if price < 0.0 {
        return Err(failure(StatusCode::UNPROCESSABLE_ENTITY, "Price must be non-negative"));
    }
    Ok(price)
}

async fn list_medicines(State(db): State<Db>) -> Json<MedicineList> {
    let medicines = db.read().await;
    Json(MedicineList {
        medicines: medicines.clone(),
    })
}

async fn get_medicine(State(db): State<Db>, Path(name): Path<String>) -> Result<Json<MedicineReply>, Reply> {
    let name = require_name(&name)?;
    let medicines = db.read().await;
    let medicine = medicines.iter().find(|m| m.name == name).cloned().ok_or_else(not_found)?;
    Ok(Json(MedicineReply {
        code: 200,
        medicine: Some(medicine),
        ..Default::default()
    }))
}

async fn create_medicine(State(db): State<Db>, Json(input): Json<CreateMedicine>) -> Result<Reply, Reply> {
    let name = require_name(&input.name)?;
    let price = require_price(input.price)?;

    let mut medicines = db.write().await;
    if medicines.iter().any(|m| m.name == name) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(MedicineReply {
                code: 400,
                message: Some("Medicine already exists".to_string()),
                ..Default::default()
            }),
        ));
    }
    let medicine = Medicine {
        name: name.to_string(),
        price: Some(price),
    };
    medicines.push(medicine.clone());
    info!(medicine = name, "medicine created");

    Ok((
        StatusCode::CREATED,
        Json(MedicineReply {
            code: 201,
            message: Some(format!("Medicine created successfully with name: {name}")),
            medicine: Some(medicine),
            ..Default::default()
        }),
    ))
}

async fn update_medicine(
    State(db): State<Db>,
    Path(name): Path<String>,
    Json(input): Json<UpdateMedicine>,
) -> Result<Json<MedicineReply>, Reply> {
    let name = require_name(&name)?;
    let price = require_price(input.price)?;

    let mut medicines = db.write().await;
    let medicine = medicines.iter_mut().find(|m| m.name == name).ok_or_else(not_found)?;
    medicine.price = Some(price);
    info!(medicine = name, price, "medicine updated");

    Ok(Json(MedicineReply {
        code: 200,
        message: Some(format!("Medicine updated successfully with name: {name}")),
        medicine: Some(medicine.clone()),
        ..Default::default()
    }))
}

async fn delete_medicine(State(db): State<Db>, Path(name): Path<String>) -> Result<Json<MedicineReply>, Reply> {
    let name = require_name(&name)?;

    let mut medicines = db.write().await;
    let index = medicines.iter().position(|m| m.name == name).ok_or_else(not_found)?;
    medicines.remove(index);
    info!(medicine = name, "medicine deleted");

    Ok(Json(MedicineReply {
        code: 200,
        message: Some(format!("Medicine deleted successfully with name: {name}")),
        ..Default::default()
    }))
}

async fn average_price(State(db): State<Db>) -> Result<Json<AverageReply>, Reply> {
    let medicines = db.read().await;
    let prices: Vec<f64> = medicines.iter().filter_map(|m| m.price).collect();
    if prices.is_empty() {
        return Err(failure(StatusCode::BAD_REQUEST, "No medicines with prices found"));
    }
    Ok(Json(AverageReply {
        code: 200,
        average_price: prices.iter().sum::<f64>() / prices.len() as f64,
    }))
}
