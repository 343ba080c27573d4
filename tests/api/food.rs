use serde_json::{json, Value};

use crate::helpers::TestApp;

#[actix_web::test]
async fn price_is_floored_to_two_decimals(){
    let Some(app) = TestApp::spawn_authenticated().await else { return };
    let menu_id = app.create_menu().await;

    let food_id = app.create_food(&menu_id, "tart", 12.3456).await;

    let body: Value = app.get(&format!("/food/{}", food_id)).await.json().await.unwrap();
    assert_eq!(body["data"]["price"], 12.34);
}

#[actix_web::test]
async fn food_with_unknown_menu_is_rejected_and_not_stored(){
    let Some(app) = TestApp::spawn_authenticated().await else { return };

    let response = app.post("/food/create", &json!({
        "name": "ghost",
        "price": 3.0,
        "foodImage": "https://example.com/ghost.png",
        "menuId": "nosuchmenu"
    })).await;
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "menu not found");

    let list: Value = app.get("/food/all").await.json().await.unwrap();
    assert_eq!(list["data"]["foods"], json!([]));
}

#[actix_web::test]
async fn foods_are_paged_by_creation_time(){
    let Some(app) = TestApp::spawn_authenticated().await else { return };
    let menu_id = app.create_menu().await;

    for i in 0..51 {
        app.create_food(&menu_id, &format!("dish{}", i), 1.0).await;
    }

    let first: Value = app.get("/food/all").await.json().await.unwrap();
    assert_eq!(first["data"]["foods"].as_array().unwrap().len(), 50);
    assert_eq!(first["data"]["hasMore"], true);

    let cursor = first["data"]["nextCursor"].as_str().unwrap();
    let response = app.api_client
        .get(format!("{}/food/all", app.get_app_url()))
        .bearer_auth(app.token.as_deref().unwrap())
        .query(&[("cursor", cursor)])
        .send()
        .await
        .unwrap();
    let second: Value = response.json().await.unwrap();

    let foods = second["data"]["foods"].as_array().unwrap();
    assert_eq!(foods.len(), 1);
    assert_eq!(foods[0]["name"], "dish50");
    assert_eq!(second["data"]["hasMore"], false);
}
