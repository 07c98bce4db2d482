use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::json;

use crate::common::{assert_error_response, read_json};
use crate::support::auth::bearer_header;
use crate::support::factory::{create_test_post, create_test_user};
use crate::support::{build_test_state, create_test_app, test_security};

#[actix_web::test]
async fn test_anyone_authenticated_can_comment() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let alice = create_test_user(&state, "alice").await;
    let bob = create_test_user(&state, "bob").await;
    let post_id = create_test_post(&state, &alice, "open").await;
    let app = create_test_app(state).with_prod_routes().build().await;
    let uri = format!("/api/v1/posts/{post_id}/comments");

    for (user, text) in [(&bob, "first!"), (&alice, "thanks")] {
        let req = test::TestRequest::post()
            .uri(&uri)
            .insert_header((
                "Authorization",
                bearer_header(user.id, &user.username, &test_security()),
            ))
            .set_json(json!({"content": text}))
            .to_request();
        let body = read_json(test::call_service(&app, req).await, StatusCode::CREATED).await;
        assert_eq!(body["message"], "Comment created successfully");
        assert_eq!(body["post_id"], post_id);
        assert!(body["comment_id"].is_number());
    }

    let list = test::TestRequest::get().uri(&uri).to_request();
    let body = read_json(test::call_service(&app, list).await, StatusCode::OK).await;
    let comments = body.as_array().expect("comments should be an array");
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["content"], "first!");
    assert_eq!(comments[0]["user"]["username"], bob.username);
    assert_eq!(comments[1]["content"], "thanks");
    assert_eq!(comments[1]["user_id"], alice.id);

    // Post detail embeds the same comments.
    let get = test::TestRequest::get()
        .uri(&format!("/api/v1/posts/{post_id}"))
        .to_request();
    let post = read_json(test::call_service(&app, get).await, StatusCode::OK).await;
    assert_eq!(post["comments"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[actix_web::test]
async fn test_comment_on_missing_post() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let bob = create_test_user(&state, "bob").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/v1/posts/777/comments")
        .insert_header((
            "Authorization",
            bearer_header(bob.id, &bob.username, &test_security()),
        ))
        .set_json(json!({"content": "hello?"}))
        .to_request();
    let err = assert_error_response(
        test::call_service(&app, req).await,
        StatusCode::NOT_FOUND,
        "POST_NOT_FOUND",
    )
    .await;
    assert_eq!(err.error, "Post not found with ID: 777");
    Ok(())
}

#[actix_web::test]
async fn test_invalid_post_id_format() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let bob = create_test_user(&state, "bob").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let create = test::TestRequest::post()
        .uri("/api/v1/posts/abc/comments")
        .insert_header((
            "Authorization",
            bearer_header(bob.id, &bob.username, &test_security()),
        ))
        .set_json(json!({"content": "hello"}))
        .to_request();
    let err = assert_error_response(
        test::call_service(&app, create).await,
        StatusCode::BAD_REQUEST,
        "INVALID_ID",
    )
    .await;
    assert_eq!(err.error, "Invalid post ID format");

    let list = test::TestRequest::get()
        .uri("/api/v1/posts/abc/comments")
        .to_request();
    assert_error_response(
        test::call_service(&app, list).await,
        StatusCode::BAD_REQUEST,
        "INVALID_ID",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn test_comment_validation_and_unknown_post_listing() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let alice = create_test_user(&state, "alice").await;
    let post_id = create_test_post(&state, &alice, "open").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/posts/{post_id}/comments"))
        .insert_header((
            "Authorization",
            bearer_header(alice.id, &alice.username, &test_security()),
        ))
        .set_json(json!({"content": "   "}))
        .to_request();
    assert_error_response(
        test::call_service(&app, req).await,
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
    )
    .await;

    let list = test::TestRequest::get()
        .uri("/api/v1/posts/98765/comments")
        .to_request();
    let body = read_json(test::call_service(&app, list).await, StatusCode::OK).await;
    assert_eq!(body, json!([]));
    Ok(())
}
