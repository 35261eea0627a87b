// bloom-client/tests/store_client.rs
// Integration tests against an in-process mock of the spreadsheet endpoint.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use bloom_client::{ClientConfig, ClientError};
use serde_json::{Value, json};
use shared::{Order, PaidUpdate};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// Schemaless row store, like the real spreadsheet backend
#[derive(Default)]
struct MockStore {
    rows: Mutex<Vec<Value>>,
    actions: Mutex<Vec<String>>,
}

impl MockStore {
    fn log(&self, action: &str) {
        self.actions.lock().unwrap().push(action.to_string());
    }
}

async fn handle_get(
    State(store): State<Arc<MockStore>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    if params.get("action").map(String::as_str) == Some("delete") {
        let id = params.get("id").cloned().unwrap_or_default();
        store.log("delete");
        store
            .rows
            .lock()
            .unwrap()
            .retain(|row| row["id"] != json!(id));
        return Json(json!({ "status": "deleted" }));
    }
    store.log("list");
    Json(Value::Array(store.rows.lock().unwrap().clone()))
}

async fn handle_post(
    State(store): State<Arc<MockStore>>,
    Query(params): Query<HashMap<String, String>>,
    body: String,
) -> Json<Value> {
    let payload: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    match params.get("action").map(String::as_str) {
        Some("create") => {
            store.log("create");
            store.rows.lock().unwrap().push(payload);
        }
        Some("update") => {
            store.log("update");
            let id = payload["id"].clone();
            for row in store.rows.lock().unwrap().iter_mut() {
                if row["id"] == id {
                    row["is_paid"] = payload["is_paid"].clone();
                }
            }
        }
        _ => {}
    }
    Json(json!({ "status": "ok" }))
}

async fn spawn_mock(seed: Vec<Value>) -> (SocketAddr, Arc<MockStore>) {
    let store = Arc::new(MockStore {
        rows: Mutex::new(seed),
        actions: Mutex::new(Vec::new()),
    });
    let app = Router::new()
        .route("/store", get(handle_get).post(handle_post))
        .with_state(store.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, store)
}

fn client_for(addr: SocketAddr) -> bloom_client::StoreClient {
    ClientConfig::new(format!("http://{}/store", addr))
        .with_timeout(5)
        .build_client()
        .unwrap()
}

fn sample_order(id: &str, name: &str, price: f64) -> Order {
    Order {
        id: id.to_string(),
        customer_name: name.to_string(),
        queue_number: 0,
        flower_count: 1,
        order_date: "2024-02-14".to_string(),
        price,
        notes: None,
        flower_colors: String::new(),
        bouquet_colors: String::new(),
        is_paid: false,
    }
}

#[tokio::test]
async fn test_list_empty_store() {
    let (addr, store) = spawn_mock(Vec::new()).await;
    let client = client_for(addr);

    let orders = client.list().await.unwrap();
    assert!(orders.is_empty());
    assert_eq!(store.actions.lock().unwrap().as_slice(), ["list"]);
}

#[tokio::test]
async fn test_list_normalizes_spreadsheet_rows() {
    // Rows as the spreadsheet really sends them: stringly numbers, "TRUE"
    let seed = vec![
        json!({
            "id": "id_1", "customer_name": "A", "queue_number": "2",
            "flower_count": "5", "price": "120", "is_paid": "TRUE"
        }),
        json!({ "id": "id_2", "customer_name": "B", "price": 80.5, "is_paid": false }),
    ];
    let (addr, _store) = spawn_mock(seed).await;
    let client = client_for(addr);

    let orders = client.list().await.unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].queue_number, 2);
    assert_eq!(orders[0].flower_count, 5);
    assert_eq!(orders[0].price, 120.0);
    assert!(orders[0].is_paid);
    assert_eq!(orders[1].queue_number, 0);
    assert!(!orders[1].is_paid);
}

#[tokio::test]
async fn test_create_appends_row() {
    let (addr, store) = spawn_mock(Vec::new()).await;
    let client = client_for(addr);

    client
        .create(&sample_order("id_new", "สมชาย", 250.0))
        .await
        .unwrap();

    let orders = client.list().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, "id_new");
    assert_eq!(orders[0].customer_name, "สมชาย");
    assert_eq!(
        store.actions.lock().unwrap().as_slice(),
        ["create", "list"]
    );
}

#[tokio::test]
async fn test_set_paid_sends_minimal_delta() {
    let seed = vec![json!({ "id": "id_1", "customer_name": "A", "price": 10, "is_paid": false })];
    let (addr, _store) = spawn_mock(seed).await;
    let client = client_for(addr);

    client
        .set_paid(&PaidUpdate {
            id: "id_1".to_string(),
            is_paid: true,
        })
        .await
        .unwrap();

    let orders = client.list().await.unwrap();
    assert!(orders[0].is_paid);
}

#[tokio::test]
async fn test_delete_removes_row() {
    let seed = vec![
        json!({ "id": "id_1", "customer_name": "A", "price": 10 }),
        json!({ "id": "id_2", "customer_name": "B", "price": 20 }),
    ];
    let (addr, _store) = spawn_mock(seed).await;
    let client = client_for(addr);

    client.delete("id_1").await.unwrap();

    let orders = client.list().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, "id_2");
}

#[tokio::test]
async fn test_list_surfaces_server_error() {
    let app = Router::new().route(
        "/store",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = client_for(addr);
    match client.list().await {
        Err(ClientError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got {:?}", other.map(|v| v.len())),
    }
}

#[tokio::test]
async fn test_list_rejects_non_array_body() {
    let app = Router::new().route("/store", get(|| async { "not json at all" }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = client_for(addr);
    assert!(matches!(
        client.list().await,
        Err(ClientError::InvalidResponse(_))
    ));
}
