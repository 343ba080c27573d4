use serde_json::{json, Value};

use crate::helpers::TestApp;

#[actix_web::test]
async fn batch_opens_an_order_and_bills_it(){
    let Some(app) = TestApp::spawn_authenticated().await else { return };
    let table_id = app.create_table(9).await;
    let menu_id = app.create_menu().await;
    let foods = [
        app.create_food(&menu_id, "bread", 5.00).await,
        app.create_food(&menu_id, "salad", 7.50).await,
        app.create_food(&menu_id, "tea", 2.25).await,
    ];

    let batch = app.create("order-item", json!({
        "tableId": table_id,
        "orderItems": foods.iter()
            .map(|food_id| json!({ "quantity": "M", "unitPrice": 1.0, "foodId": food_id }))
            .collect::<Vec<_>>()
    })).await;
    let order_id = batch["orderId"].as_str().unwrap();
    assert_eq!(batch["orderItems"].as_array().unwrap().len(), 3);

    let order: Value = app.get(&format!("/order/{}", order_id)).await.json().await.unwrap();
    assert_eq!(order["data"]["tableId"], table_id.as_str());

    let billing: Value = app.get(&format!("/order-item/order/{}", order_id)).await.json().await.unwrap();
    let view = &billing["data"][0];
    assert_eq!(view["paymentDue"], 14.75);
    assert_eq!(view["totalCount"], 3);
    assert_eq!(view["tableNumber"], 9);
    assert_eq!(view["orderItems"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn batch_with_unknown_food_creates_nothing(){
    let Some(app) = TestApp::spawn_authenticated().await else { return };
    let table_id = app.create_table(2).await;

    let response = app.post("/order-item/create", &json!({
        "tableId": table_id,
        "orderItems": [{ "quantity": "S", "unitPrice": 1.0, "foodId": "nosuchfood" }]
    })).await;
    assert_eq!(response.status().as_u16(), 400);

    let orders: Value = app.get("/order/all").await.json().await.unwrap();
    assert_eq!(orders["data"], json!([]));
}

#[actix_web::test]
async fn order_item_update_floors_price(){
    let Some(app) = TestApp::spawn_authenticated().await else { return };
    let table_id = app.create_table(4).await;
    let menu_id = app.create_menu().await;
    let food_id = app.create_food(&menu_id, "pie", 3.0).await;

    let batch = app.create("order-item", json!({
        "tableId": table_id,
        "orderItems": [{ "quantity": "S", "unitPrice": 3.0, "foodId": food_id }]
    })).await;
    let item_id = batch["orderItems"][0]["orderItemId"].as_str().unwrap();

    let response = app.put(&format!("/order-item/{}", item_id), &json!({
        "unitPrice": 9.999,
        "quantity": "L"
    })).await;
    assert_eq!(response.status().as_u16(), 200);

    let item: Value = app.get(&format!("/order-item/{}", item_id)).await.json().await.unwrap();
    assert_eq!(item["data"]["unitPrice"], 9.99);
    assert_eq!(item["data"]["quantity"], "L");

    assert_eq!(
        app.put("/order-item/doesnotexist", &json!({ "quantity": "S" })).await.status().as_u16(),
        404
    );
}
