use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Spawn the same router as prod, bound to an ephemeral port. Every test
    /// gets its own server and therefore its own freshly seeded store.
    async fn spawn() -> Self {
        Self::spawn_app(stockroom_api::app::build_app()).await
    }

    async fn spawn_app(app: axum::Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_endpoint_responds() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn seeded_inventory_is_listed_in_insertion_order() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/api/get_inventory", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    let inventory = body["inventory"].as_array().unwrap();
    assert_eq!(inventory.len(), 4);
    assert_eq!(
        inventory[0],
        json!({ "id": 1, "description": "Blue pens", "quantity": 50, "available": 45 })
    );
    assert_eq!(inventory[3]["description"], "Erasers");
}

#[tokio::test]
async fn added_item_gets_next_id_and_full_availability() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/add_item", srv.base_url))
        .json(&json!({ "description": "Rulers", "quantity": 20 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Item added successfully");
    assert_eq!(body["item"]["id"], 5);
    assert_eq!(body["item"]["available"], 20);

    // The new item shows up at the end of the list.
    let res = reqwest::get(format!("{}/api/get_inventory", srv.base_url))
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    let inventory = body["inventory"].as_array().unwrap();
    assert_eq!(inventory.len(), 5);
    assert_eq!(inventory[4]["description"], "Rulers");
}

#[tokio::test]
async fn add_item_requires_description_and_quantity() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for body in [
        json!({ "description": "", "quantity": 10 }),
        json!({ "description": "Rulers", "quantity": 0 }),
        json!({ "description": "Rulers" }),
        json!({}),
    ] {
        let res = client
            .post(format!("{}/api/add_item", srv.base_url))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let err: serde_json::Value = res.json().await.unwrap();
        assert_eq!(err["error"], "Description and quantity are required");
    }
}

#[tokio::test]
async fn loan_reduces_availability() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/add_item_loan", srv.base_url))
        .json(&json!({ "itemId": 1, "quantity": 5, "borrower": "kim" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Item loaned successfully");
    assert_eq!(body["item"]["available"], 40);
    assert_eq!(body["item"]["quantity"], 50);
}

#[tokio::test]
async fn drained_item_rejects_the_next_loan() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Item 1 starts at 45 available; drain it in chunks of 5.
    for _ in 0..9 {
        let res = client
            .post(format!("{}/api/add_item_loan", srv.base_url))
            .json(&json!({ "itemId": 1, "quantity": 5 }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    let res = client
        .post(format!("{}/api/add_item_loan", srv.base_url))
        .json(&json!({ "itemId": 1, "quantity": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: serde_json::Value = res.json().await.unwrap();
    assert_eq!(err["error"], "Not enough items available");
}

#[tokio::test]
async fn zero_quantity_loan_is_a_bad_request() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/add_item_loan", srv.base_url))
        .json(&json!({ "itemId": 1, "quantity": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: serde_json::Value = res.json().await.unwrap();
    assert_eq!(err["error"], "Quantity must be greater than zero");

    // The rejected loan left availability alone.
    let res = reqwest::get(format!("{}/api/get_inventory", srv.base_url))
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["inventory"][0]["available"], 45);
}

#[tokio::test]
async fn over_return_caps_at_total_owned() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/end_item_loan", srv.base_url))
        .json(&json!({ "itemId": 1, "quantity": 100 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Item returned successfully");
    assert_eq!(body["item"]["available"], 50);
    assert_eq!(body["item"]["quantity"], 50);
}

#[tokio::test]
async fn unknown_item_is_404_for_loan_and_return() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for path in ["/api/add_item_loan", "/api/end_item_loan"] {
        let res = client
            .post(format!("{}{}", srv.base_url, path))
            .json(&json!({ "itemId": 99, "quantity": 1 }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "path: {path}");
        let err: serde_json::Value = res.json().await.unwrap();
        assert_eq!(err["error"], "Item not found");
    }
}

#[tokio::test]
async fn borrow_transaction_is_acknowledged() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/transaction/borrow", srv.base_url))
        .json(&json!({ "itemId": 1, "borrower": "kim" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Transaction added succesfully");
}

#[tokio::test]
async fn login_returns_profile_without_password() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/login", srv.base_url))
        .json(&json!({ "username": "testuser", "password": "password123" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "id": "1", "name": "testuser", "email": "test@example.com" })
    );
}

#[tokio::test]
async fn bad_credentials_are_unauthorized() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/login", srv.base_url))
        .json(&json!({ "username": "testuser", "password": "nope" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let err: serde_json::Value = res.json().await.unwrap();
    assert_eq!(err["error"], "Invalid username or password");
}

#[tokio::test]
async fn signup_rejects_duplicates_and_short_passwords() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Duplicate username.
    let res = client
        .post(format!("{}/signup", srv.base_url))
        .json(&json!({ "username": "testuser", "email": "new@example.com", "password": "123456" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let err: serde_json::Value = res.json().await.unwrap();
    assert_eq!(err["error"], "User already exists");

    // Five characters is one short.
    let res = client
        .post(format!("{}/signup", srv.base_url))
        .json(&json!({ "username": "a", "email": "a@b.com", "password": "12345" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: serde_json::Value = res.json().await.unwrap();
    assert_eq!(err["error"], "Password must be at least 6 characters");

    // Missing field.
    let res = client
        .post(format!("{}/signup", srv.base_url))
        .json(&json!({ "username": "a", "password": "123456" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: serde_json::Value = res.json().await.unwrap();
    assert_eq!(err["error"], "All fields are required");
}

#[tokio::test]
async fn signup_then_login_round_trip() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/signup", srv.base_url))
        .json(&json!({ "username": "a", "email": "a@b.com", "password": "123456" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["id"], "2");
    assert_eq!(body["name"], "a");

    let res = client
        .post(format!("{}/login", srv.base_url))
        .json(&json!({ "username": "a", "password": "123456" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_inventory_lists_zero_rows() {
    use stockroom_api::app::services::AppServices;
    use stockroom_auth::UserDirectory;
    use stockroom_inventory::InventoryStore;

    let app = stockroom_api::app::build_app_with(AppServices::new(
        InventoryStore::new(),
        UserDirectory::new(),
    ));
    let srv = TestServer::spawn_app(app).await;

    let res = reqwest::get(format!("{}/api/get_inventory", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["inventory"], json!([]));
}

#[tokio::test]
async fn each_server_starts_from_the_seeded_state() {
    // Mutate one server's store, then confirm a second server is unaffected.
    let first = TestServer::spawn().await;
    let client = reqwest::Client::new();
    client
        .post(format!("{}/api/add_item", first.base_url))
        .json(&json!({ "description": "Rulers", "quantity": 20 }))
        .send()
        .await
        .unwrap();

    let second = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/api/get_inventory", second.base_url))
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["inventory"].as_array().unwrap().len(), 4);
}
