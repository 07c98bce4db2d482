use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::json;

use crate::common::{assert_error_response, read_json};
use crate::support::auth::bearer_header;
use crate::support::factory::{create_test_post, create_test_user};
use crate::support::{build_test_state, create_test_app, test_security};

#[actix_web::test]
async fn test_create_then_get_post() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let alice = create_test_user(&state, "alice").await;
    let app = create_test_app(state).with_prod_routes().build().await;
    let auth = bearer_header(alice.id, &alice.username, &test_security());

    let create = test::TestRequest::post()
        .uri("/api/v1/posts")
        .insert_header(("Authorization", auth))
        .set_json(json!({"title": "Hello", "content": "First post"}))
        .to_request();
    let created = read_json(test::call_service(&app, create).await, StatusCode::CREATED).await;
    assert_eq!(created["message"], "Post created successfully");
    assert_eq!(created["title"], "Hello");
    let post_id = created["post_id"].as_i64().expect("post_id should be a number");

    let get = test::TestRequest::get()
        .uri(&format!("/api/v1/posts/{post_id}"))
        .to_request();
    let post = read_json(test::call_service(&app, get).await, StatusCode::OK).await;

    assert_eq!(post["id"], post_id);
    assert_eq!(post["title"], "Hello");
    assert_eq!(post["content"], "First post");
    assert_eq!(post["user_id"], alice.id);
    assert_eq!(post["author"]["username"], alice.username);
    assert!(post["author"].get("password_hash").is_none());
    assert!(post["author"].get("email").is_none());
    assert_eq!(post["comments"], json!([]));
    assert!(post["created_at"].is_string());
    Ok(())
}

#[actix_web::test]
async fn test_list_posts_newest_first() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let alice = create_test_user(&state, "alice").await;
    let first = create_test_post(&state, &alice, "first").await;
    let second = create_test_post(&state, &alice, "second").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/v1/posts").to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    let ids: Vec<i64> = body
        .as_array()
        .expect("list should be an array")
        .iter()
        .filter_map(|p| p["id"].as_i64())
        .collect();

    assert_eq!(ids, vec![i64::from(second), i64::from(first)]);
    assert_eq!(body[0]["author"]["id"], alice.id);
    Ok(())
}

#[actix_web::test]
async fn test_list_posts_empty() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/v1/posts").to_request();
    let body = read_json(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(body, json!([]));
    Ok(())
}

#[actix_web::test]
async fn test_get_missing_post() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    for (raw, message) in [
        ("999", "Post not found with ID: 999"),
        ("abc", "Post not found with ID: abc"),
        ("-1", "Post not found with ID: -1"),
    ] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/posts/{raw}"))
            .to_request();
        let err = assert_error_response(
            test::call_service(&app, req).await,
            StatusCode::NOT_FOUND,
            "POST_NOT_FOUND",
        )
        .await;
        assert_eq!(err.error, message);
    }
    Ok(())
}

#[actix_web::test]
async fn test_create_post_validation() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let alice = create_test_user(&state, "alice").await;
    let app = create_test_app(state).with_prod_routes().build().await;
    let auth = bearer_header(alice.id, &alice.username, &test_security());

    for body in [
        json!({"title": "", "content": "c"}),
        json!({"title": "t", "content": "  "}),
        json!({"title": "t".repeat(256), "content": "c"}),
        json!({"content": "c"}),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/v1/posts")
            .insert_header(("Authorization", auth.clone()))
            .set_json(body)
            .to_request();
        assert_error_response(
            test::call_service(&app, req).await,
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn test_owner_update_and_delete() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let alice = create_test_user(&state, "alice").await;
    let post_id = create_test_post(&state, &alice, "draft").await;
    let app = create_test_app(state).with_prod_routes().build().await;
    let auth = bearer_header(alice.id, &alice.username, &test_security());
    let uri = format!("/api/v1/posts/{post_id}");

    let update = test::TestRequest::put()
        .uri(&uri)
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({"title": "final", "content": "edited"}))
        .to_request();
    let body = read_json(test::call_service(&app, update).await, StatusCode::OK).await;
    assert_eq!(body["message"], "Post updated successfully");

    let get = test::TestRequest::get().uri(&uri).to_request();
    let post = read_json(test::call_service(&app, get).await, StatusCode::OK).await;
    assert_eq!(post["title"], "final");
    assert_eq!(post["content"], "edited");
    assert_eq!(post["user_id"], alice.id);

    let delete = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let body = read_json(test::call_service(&app, delete).await, StatusCode::OK).await;
    assert_eq!(body["message"], "Post deleted successfully");

    // Soft-deleted posts vanish from every read and can't be touched again.
    let get = test::TestRequest::get().uri(&uri).to_request();
    assert_error_response(
        test::call_service(&app, get).await,
        StatusCode::NOT_FOUND,
        "POST_NOT_FOUND",
    )
    .await;

    let list = test::TestRequest::get().uri("/api/v1/posts").to_request();
    let body = read_json(test::call_service(&app, list).await, StatusCode::OK).await;
    assert_eq!(body, json!([]));

    let delete_again = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(("Authorization", auth))
        .to_request();
    assert_error_response(
        test::call_service(&app, delete_again).await,
        StatusCode::NOT_FOUND,
        "POST_NOT_FOUND",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn test_oversized_create_body_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let alice = create_test_user(&state, "alice").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/v1/posts")
        .insert_header((
            "Authorization",
            bearer_header(alice.id, &alice.username, &test_security()),
        ))
        .set_json(json!({"title": "big", "content": "x".repeat(300 * 1024)}))
        .to_request();
    let err = assert_error_response(
        test::call_service(&app, req).await,
        StatusCode::BAD_REQUEST,
        "BAD_REQUEST",
    )
    .await;
    assert_eq!(err.error, "Request body too large");
    Ok(())
}
