use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, AverageReply, Medicine, MedicineList, MedicineReply};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder().method(method).uri(uri).body(String::new()).unwrap()
}

fn seeded() -> axum::Router {
    app_with(vec![
        Medicine {
            name: "Paracetamol".to_string(),
            price: Some(2.0),
        },
        Medicine {
            name: "Mystery".to_string(),
            price: None,
        },
        Medicine {
            name: "Vitamin C".to_string(),
            price: Some(4.0),
        },
    ])
}

// --- list ---

#[tokio::test]
async fn list_medicines_empty() {
    let resp = app().oneshot(empty_request("GET", "/medicines")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let list: MedicineList = body_json(resp).await;
    assert!(list.medicines.is_empty());
}

#[tokio::test]
async fn list_medicines_keeps_order() {
    let resp = seeded().oneshot(empty_request("GET", "/medicines")).await.unwrap();

    let list: MedicineList = body_json(resp).await;
    let names: Vec<&str> = list.medicines.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Paracetamol", "Mystery", "Vitamin C"]);
    assert_eq!(list.medicines[1].price, None);
}

// --- create ---

#[tokio::test]
async fn create_medicine_returns_201_with_code() {
    let resp = app()
        .oneshot(json_request("POST", "/medicines", r#"{"name":"  Aspirin ","price":3.5}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let reply: MedicineReply = body_json(resp).await;
    assert_eq!(reply.code, 201);
    assert_eq!(reply.message.as_deref(), Some("Medicine created successfully with name: Aspirin"));
    assert_eq!(reply.medicine.unwrap().name, "Aspirin");
}

#[tokio::test]
async fn create_medicine_duplicate_returns_message() {
    let resp = seeded()
        .oneshot(json_request("POST", "/medicines", r#"{"name":"Paracetamol","price":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let reply: MedicineReply = body_json(resp).await;
    assert_eq!(reply.code, 400);
    assert_eq!(reply.message.as_deref(), Some("Medicine already exists"));
}

#[tokio::test]
async fn create_medicine_blank_name_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/medicines", r#"{"name":"   ","price":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let reply: MedicineReply = body_json(resp).await;
    assert_eq!(reply.error.as_deref(), Some("Name cannot be empty string"));
}

#[tokio::test]
async fn create_medicine_negative_price_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/medicines", r#"{"name":"Aspirin","price":-1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_medicine_malformed_json_is_rejected() {
    let resp = app()
        .oneshot(json_request("POST", "/medicines", r#"{"not_name":1}"#))
        .await
        .unwrap();

    assert!(resp.status().is_client_error());
}

// --- get ---

#[tokio::test]
async fn get_medicine_decodes_path() {
    let resp = seeded().oneshot(empty_request("GET", "/medicines/Vitamin%20C")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let reply: MedicineReply = body_json(resp).await;
    assert_eq!(reply.code, 200);
    assert_eq!(reply.medicine.unwrap().price, Some(4.0));
}

#[tokio::test]
async fn get_medicine_not_found() {
    let resp = app().oneshot(empty_request("GET", "/medicines/Nope")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let reply: MedicineReply = body_json(resp).await;
    assert_eq!(reply.error.as_deref(), Some("Medicine not found"));
}

// --- update ---

#[tokio::test]
async fn update_medicine_not_found() {
    let resp = app()
        .oneshot(json_request("PATCH", "/medicines/Nope", r#"{"price":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_medicine_sets_price() {
    let resp = seeded()
        .oneshot(json_request("PATCH", "/medicines/Mystery", r#"{"price":9.99}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let reply: MedicineReply = body_json(resp).await;
    assert_eq!(reply.code, 200);
    assert_eq!(reply.medicine.unwrap().price, Some(9.99));
}

// --- delete ---

#[tokio::test]
async fn delete_medicine_not_found() {
    let resp = app().oneshot(empty_request("DELETE", "/medicines/Nope")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- average ---

#[tokio::test]
async fn average_skips_null_prices() {
    let resp = seeded().oneshot(empty_request("GET", "/average")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let reply: AverageReply = body_json(resp).await;
    assert_eq!(reply.code, 200);
    assert_eq!(reply.average_price, 3.0);
}

#[tokio::test]
async fn average_without_prices_returns_400() {
    let resp = app().oneshot(empty_request("GET", "/average")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/medicines", r#"{"name":"Ibuprofen","price":4.5}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    // update
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("PATCH", "/medicines/Ibuprofen", r#"{"price":5.5}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // average reflects the update
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/average"))
        .await
        .unwrap();
    let reply: AverageReply = body_json(resp).await;
    assert_eq!(reply.average_price, 5.5);

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", "/medicines/Ibuprofen"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let reply: MedicineReply = body_json(resp).await;
    assert_eq!(reply.message.as_deref(), Some("Medicine deleted successfully with name: Ibuprofen"));

    // get after delete — 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/medicines/Ibuprofen"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete — empty
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/medicines"))
        .await
        .unwrap();
    let list: MedicineList = body_json(resp).await;
    assert!(list.medicines.is_empty());
}
