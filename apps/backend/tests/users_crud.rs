mod support;

use actix_web::test;
use backend::config::db::DbProfile;
use backend::infra::state::build_state;
use serde_json::json;
use support::create_test_app;
use support::factory::unique_name;

#[actix_web::test]
async fn test_create_get_update_delete_user() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().with_db(DbProfile::Test).build().await?;
    let app = create_test_app(state).build().await?;

    let name = unique_name("carol");

    // Create
    let req = test::TestRequest::post()
        .uri("/users/")
        .set_json(json!({
            "name": name,
            "email": format!("{name}@example.com"),
            "password": "secret-pw1",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let user_id = body["id"].as_i64().unwrap();
    assert_eq!(body["name"], name.as_str());
    // The hash must never appear in a response
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());

    // Get by id
    let req = test::TestRequest::get()
        .uri(&format!("/users/{user_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    // List includes the new user
    let req = test::TestRequest::get().uri("/users/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .any(|u| u["id"].as_i64() == Some(user_id)));

    // Update name and email
    let renamed = unique_name("carol-renamed");
    let req = test::TestRequest::put()
        .uri(&format!("/users/{user_id}"))
        .set_json(json!({
            "name": renamed,
            "email": format!("{renamed}@example.com"),
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], renamed.as_str());

    // Delete
    let req = test::TestRequest::delete()
        .uri(&format!("/users/{user_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 204);

    // Gone afterwards
    let req = test::TestRequest::get()
        .uri(&format!("/users/{user_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);

    Ok(())
}

#[actix_web::test]
async fn test_duplicate_user_conflicts() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().with_db(DbProfile::Test).build().await?;
    let app = create_test_app(state).build().await?;

    let name = unique_name("dave");
    let payload = json!({
        "name": name,
        "email": format!("{name}@example.com"),
        "password": "secret-pw1",
    });

    let req = test::TestRequest::post()
        .uri("/users/")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);

    let req = test::TestRequest::post()
        .uri("/users/")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 409);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "USER_ALREADY_EXISTS");

    Ok(())
}

#[actix_web::test]
async fn test_registration_password_policy() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().with_db(DbProfile::Test).build().await?;
    let app = create_test_app(state).build().await?;

    let name = unique_name("erin");

    // Too short
    let req = test::TestRequest::post()
        .uri("/users/")
        .set_json(json!({
            "name": name,
            "email": format!("{name}@example.com"),
            "password": "a1",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "PASSWORD_TOO_SHORT");

    // Long enough but fails the strength hook
    let req = test::TestRequest::post()
        .uri("/users/")
        .set_json(json!({
            "name": name,
            "email": format!("{name}@example.com"),
            "password": "aaaaaaaa",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "PASSWORD_TOO_WEAK");

    Ok(())
}
