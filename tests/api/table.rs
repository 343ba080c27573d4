use serde_json::{json, Value};

use crate::helpers::TestApp;

#[actix_web::test]
async fn created_table_is_retrievable_by_its_public_id(){
    let Some(app) = TestApp::spawn_authenticated().await else { return };

    let table_id = app.create_table(7).await;
    assert!(!table_id.is_empty());

    let response = app.get(&format!("/table/{}", table_id)).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["tableId"], table_id.as_str());
    assert_eq!(body["data"]["tableNumber"], 7);
}

#[actix_web::test]
async fn create_returns_the_stored_timestamps(){
    let Some(app) = TestApp::spawn_authenticated().await else { return };

    let created = app.create("table", json!({ "numberOfGuests": 2, "tableNumber": 11 })).await;
    let table_id = created["tableId"].as_str().unwrap();

    let stored: Value = app.get(&format!("/table/{}", table_id)).await.json().await.unwrap();
    assert_eq!(created["createdAt"], stored["data"]["createdAt"]);
    assert_eq!(created["updatedAt"], stored["data"]["updatedAt"]);
}

#[actix_web::test]
async fn partial_update_keeps_absent_fields_and_refreshes_timestamp(){
    let Some(app) = TestApp::spawn_authenticated().await else { return };
    let table_id = app.create_table(3).await;

    let before: Value = app.get(&format!("/table/{}", table_id)).await.json().await.unwrap();

    let response = app.put(&format!("/table/{}", table_id), &json!({ "numberOfGuests": 8 })).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert!(body["data"].is_null());

    let after: Value = app.get(&format!("/table/{}", table_id)).await.json().await.unwrap();
    assert_eq!(after["data"]["numberOfGuests"], 8);
    assert_eq!(after["data"]["tableNumber"], 3);
    assert_ne!(after["data"]["updatedAt"], before["data"]["updatedAt"]);
}

#[actix_web::test]
async fn missing_tables_are_not_found(){
    let Some(app) = TestApp::spawn_authenticated().await else { return };

    assert_eq!(app.get("/table/doesnotexist").await.status().as_u16(), 404);
    assert_eq!(app.delete("/table/doesnotexist").await.status().as_u16(), 404);
    assert_eq!(app.put("/table/doesnotexist", &json!({ "tableNumber": 2 })).await.status().as_u16(), 404);
}

#[actix_web::test]
async fn listing_without_tables_is_an_empty_array(){
    let Some(app) = TestApp::spawn_authenticated().await else { return };

    let body: Value = app.get("/table/all").await.json().await.unwrap();
    assert_eq!(body["data"], json!([]));
}
