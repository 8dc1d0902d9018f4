mod support;

use actix_web::test;
use backend::config::db::DbProfile;
use backend::infra::state::build_state;
use backend::state::security_config::SecurityConfig;
use serde_json::json;
use support::auth::bearer_header;
use support::create_test_app;
use support::factory::{register_user, unique_name, TEST_PASSWORD};

#[actix_web::test]
async fn test_task_crud_scoped_to_owner() -> Result<(), Box<dyn std::error::Error>> {
    let security = SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes());
    let state = build_state()
        .with_db(DbProfile::Test)
        .with_security(security.clone())
        .build()
        .await?;

    let alice = register_user(&state, &unique_name("alice"), TEST_PASSWORD).await?;
    let bob = register_user(&state, &unique_name("bob"), TEST_PASSWORD).await?;

    let alice_auth = bearer_header(&alice.name, alice.id, &security);
    let bob_auth = bearer_header(&bob.name, bob.id, &security);

    let app = create_test_app(state).build().await?;

    // Alice creates a task; status defaults to "new"
    let title = unique_name("write-report");
    let req = test::TestRequest::post()
        .uri("/tasks/")
        .insert_header(("Authorization", alice_auth.clone()))
        .set_json(json!({ "title": title, "description": "quarterly numbers" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let task_id = body["id"].as_i64().unwrap();
    assert_eq!(body["status"], "new");

    // Duplicate title is a conflict
    let req = test::TestRequest::post()
        .uri("/tasks/")
        .insert_header(("Authorization", alice_auth.clone()))
        .set_json(json!({ "title": title }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 409);

    // Alice sees her task in the list
    let req = test::TestRequest::get()
        .uri("/tasks/")
        .insert_header(("Authorization", alice_auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    // Bob's list is empty and Alice's task is invisible to him
    let req = test::TestRequest::get()
        .uri("/tasks/")
        .insert_header(("Authorization", bob_auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body.as_array().unwrap().is_empty());

    let req = test::TestRequest::get()
        .uri(&format!("/tasks/{task_id}"))
        .insert_header(("Authorization", bob_auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);

    // Alice moves it along
    let req = test::TestRequest::put()
        .uri(&format!("/tasks/{task_id}"))
        .insert_header(("Authorization", alice_auth.clone()))
        .set_json(json!({ "status": "in_progress" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "in_progress");

    // Bob cannot delete what he cannot see
    let req = test::TestRequest::delete()
        .uri(&format!("/tasks/{task_id}"))
        .insert_header(("Authorization", bob_auth))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);

    // Alice can
    let req = test::TestRequest::delete()
        .uri(&format!("/tasks/{task_id}"))
        .insert_header(("Authorization", alice_auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 204);

    let req = test::TestRequest::get()
        .uri(&format!("/tasks/{task_id}"))
        .insert_header(("Authorization", alice_auth))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);

    Ok(())
}

#[actix_web::test]
async fn test_tasks_require_authentication() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state().with_db(DbProfile::Test).build().await?;
    let app = create_test_app(state).build().await?;

    let req = test::TestRequest::get().uri("/tasks/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "UNAUTHORIZED_MISSING_TOKEN");

    Ok(())
}

#[actix_web::test]
async fn test_unknown_status_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let security = SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes());
    let state = build_state()
        .with_db(DbProfile::Test)
        .with_security(security.clone())
        .build()
        .await?;

    let alice = register_user(&state, &unique_name("alice"), TEST_PASSWORD).await?;
    let auth = bearer_header(&alice.name, alice.id, &security);

    let app = create_test_app(state).build().await?;

    let req = test::TestRequest::post()
        .uri("/tasks/")
        .insert_header(("Authorization", auth))
        .set_json(json!({ "title": unique_name("task"), "status": "bogus" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    // serde rejects the unknown status token at the JSON boundary
    assert_eq!(resp.status().as_u16(), 400);

    Ok(())
}
