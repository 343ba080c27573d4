use serde_json::{json, Value};

use crate::helpers::TestApp;

#[actix_web::test]
async fn invoice_defaults_to_pending_and_shows_amount_due(){
    let Some(app) = TestApp::spawn_authenticated().await else { return };
    let table_id = app.create_table(6).await;
    let menu_id = app.create_menu().await;
    let food_id = app.create_food(&menu_id, "steak", 20.5).await;

    let batch = app.create("order-item", json!({
        "tableId": table_id,
        "orderItems": [{ "quantity": "L", "unitPrice": 20.5, "foodId": food_id }]
    })).await;
    let order_id = batch["orderId"].as_str().unwrap();

    let invoice = app.create("invoice", json!({ "orderId": order_id })).await;
    assert_eq!(invoice["paymentStatus"], "PENDING");
    let invoice_id = invoice["invoiceId"].as_str().unwrap();

    let view: Value = app.get(&format!("/invoice/{}", invoice_id)).await.json().await.unwrap();
    assert_eq!(view["data"]["paymentDue"], 20.5);
    assert_eq!(view["data"]["tableNumber"], 6);
    assert_eq!(view["data"]["orderDetails"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn invoice_update_returns_the_updated_record(){
    let Some(app) = TestApp::spawn_authenticated().await else { return };
    let table_id = app.create_table(1).await;
    let order = app.create("order", json!({
        "orderDate": chrono::Utc::now() + chrono::Duration::hours(1),
        "tableId": table_id
    })).await;

    let invoice = app.create("invoice", json!({
        "orderId": order["orderId"],
        "paymentMethod": "CASH"
    })).await;
    let invoice_id = invoice["invoiceId"].as_str().unwrap();

    let response = app.put(&format!("/invoice/{}", invoice_id), &json!({ "paymentStatus": "PAID" })).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["paymentStatus"], "PAID");
    assert_eq!(body["data"]["paymentMethod"], "CASH");

    assert_eq!(
        app.put("/invoice/doesnotexist", &json!({ "paymentStatus": "PAID" })).await.status().as_u16(),
        404
    );
}

#[actix_web::test]
async fn invoice_for_unknown_order_is_rejected(){
    let Some(app) = TestApp::spawn_authenticated().await else { return };

    let response = app.post("/invoice/create", &json!({ "orderId": "nosuchorder" })).await;
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "order not found");
}
