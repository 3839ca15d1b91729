use actix_web::{App, http::StatusCode, test, web};
use freight_registry::repository::DieselRepository;
use freight_registry::routes::configure;
use serde_json::{Value, json};

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .configure(configure)
                .app_data(web::Data::new(DieselRepository::new($test_db.pool().clone()))),
        )
        .await
    };
}

#[actix_web::test]
async fn create_get_update_delete_roundtrip() {
    let test_db = common::TestDb::new("create_get_update_delete_roundtrip.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/freights")
        .set_json(json!({
            "id": 999,
            "clientName": "X",
            "status": "NEW",
            "properties": {"color": "red", "pallets": 4}
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_i64().unwrap();
    assert_ne!(id, 999);
    assert_eq!(created["clientName"], "X");
    assert_eq!(created["properties"], json!({"color": "red", "pallets": 4}));

    let req = test::TestRequest::get()
        .uri(&format!("/freights/{id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched, created);

    let req = test::TestRequest::put()
        .uri(&format!("/freights/{id}"))
        .set_json(json!({"clientName": "Y", "status": "SHIPPED"}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["id"], id);
    assert_eq!(updated["clientName"], "Y");
    assert_eq!(updated["status"], "SHIPPED");
    assert_eq!(updated["properties"], json!({}));

    let req = test::TestRequest::delete()
        .uri(&format!("/freights/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/freights/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn blank_client_name_is_rejected() {
    let test_db = common::TestDb::new("blank_client_name_is_rejected.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/freights")
        .set_json(json!({"clientName": " ", "status": "NEW"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let req = test::TestRequest::get().uri("/freights").to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["totalElements"], 0);
}

#[actix_web::test]
async fn missing_ids_return_not_found() {
    let test_db = common::TestDb::new("missing_ids_return_not_found.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::put()
        .uri("/freights/41")
        .set_json(json!({"clientName": "X", "status": "NEW"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "NOT_FOUND");

    let req = test::TestRequest::delete().uri("/freights/41").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/freights/41").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn list_paginates_filters_and_reports_statuses() {
    let test_db = common::TestDb::new("list_paginates_filters_and_reports_statuses.db");
    let app = init_app!(test_db);

    let seed = [
        ("Acme", "PENDING", json!({"note": "urgent"})),
        ("Globex", "DELIVERED", json!({"color": "red"})),
        ("Initech", "PENDING", json!({})),
        ("Umbrella", "NEW", json!({})),
        ("Hooli", "DELIVERED", json!({})),
    ];
    for (client_name, status, properties) in seed {
        let req = test::TestRequest::post()
            .uri("/freights")
            .set_json(json!({
                "clientName": client_name,
                "status": status,
                "properties": properties
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri("/freights?page=0&size=2")
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["content"].as_array().unwrap().len(), 2);
    assert_eq!(page["totalElements"], 5);
    assert_eq!(page["totalPages"], 3);
    assert_eq!(page["number"], 0);
    assert_eq!(page["size"], 2);

    let req = test::TestRequest::get().uri("/freights").to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["size"], 10);
    assert_eq!(page["content"].as_array().unwrap().len(), 5);

    let req = test::TestRequest::get()
        .uri("/freights?searchTerm=urg&status=")
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["totalElements"], 1);
    assert_eq!(page["content"][0]["clientName"], "Acme");

    let req = test::TestRequest::get()
        .uri("/freights?propertyKey=color&propertyValue=RE")
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["totalElements"], 1);
    assert_eq!(page["content"][0]["clientName"], "Globex");

    let req = test::TestRequest::get()
        .uri("/freights?status=PENDING")
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["totalElements"], 2);

    let req = test::TestRequest::get()
        .uri("/freights/statuses")
        .to_request();
    let statuses: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(statuses, json!(["DELIVERED", "NEW", "PENDING"]));
}

#[actix_web::test]
async fn zero_page_size_is_a_client_error() {
    let test_db = common::TestDb::new("zero_page_size_is_a_client_error.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/freights?size=0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn largest_page_index_returns_an_empty_page() {
    let test_db = common::TestDb::new("largest_page_index_returns_an_empty_page.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/freights")
        .set_json(json!({"clientName": "Acme", "status": "NEW"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/freights?page={}&size=10", usize::MAX))
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["totalElements"], 1);
    assert_eq!(page["number"], usize::MAX as u64);
    assert_eq!(page["content"], json!([]));
    assert_eq!(page["last"], true);
}

#[actix_web::test]
async fn validation_errors_name_fields_as_clients_send_them() {
    let test_db = common::TestDb::new("validation_errors_name_fields_as_clients_send_them.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/freights")
        .set_json(json!({"clientName": "", "status": " "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("clientName"), "{message}");
    assert!(message.contains("status"), "{message}");
    assert!(!message.contains("client_name"), "{message}");
}
