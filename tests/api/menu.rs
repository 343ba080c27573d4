use serde_json::{json, Value};

use crate::helpers::TestApp;

#[actix_web::test]
async fn deleting_a_menu_leaves_its_foods(){
    let Some(app) = TestApp::spawn_authenticated().await else { return };
    let menu_id = app.create_menu().await;
    let food_id = app.create_food(&menu_id, "soup", 4.5).await;

    assert_eq!(app.delete(&format!("/menu/{}", menu_id)).await.status().as_u16(), 200);
    assert_eq!(app.get(&format!("/menu/{}", menu_id)).await.status().as_u16(), 404);
    assert_eq!(app.get(&format!("/food/{}", food_id)).await.status().as_u16(), 200);
}

#[actix_web::test]
async fn update_with_too_short_name_is_rejected(){
    let Some(app) = TestApp::spawn_authenticated().await else { return };
    let menu_id = app.create_menu().await;

    let response = app.put(&format!("/menu/{}", menu_id), &json!({ "name": "x" })).await;
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = app.get(&format!("/menu/{}", menu_id)).await.json().await.unwrap();
    assert_eq!(body["data"]["name"], "Dinner");
}
