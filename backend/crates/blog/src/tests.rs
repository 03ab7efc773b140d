//! Flow tests for the blog crate
//! Use cases and routers run against the in-memory store.

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use kernel::id::{PostId, UserId};

    use crate::application::{
        CreatePostInput, CreatePostUseCase, DeletePostUseCase, ListPostsUseCase, UpdatePostInput,
        UpdatePostUseCase,
    };
    use crate::error::BlogError;
    use crate::infra::InMemoryPostStore;

    fn create_input(title: &str, description: &str) -> CreatePostInput {
        CreatePostInput {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn test_crud_round_trip() {
        let store = Arc::new(InMemoryPostStore::new());
        let author = UserId::new();

        let first = CreatePostUseCase::new(store.clone())
            .execute(create_input("First", "Hello"), author)
            .await
            .unwrap();
        let second = CreatePostUseCase::new(store.clone())
            .execute(create_input("Second", "World"), author)
            .await
            .unwrap();

        let queries = ListPostsUseCase::new(store.clone());
        let posts = queries.execute().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert!(posts.contains(&first));
        assert!(posts.contains(&second));
        assert_eq!(queries.get(first.post_id).await.unwrap(), first);

        let updated = UpdatePostUseCase::new(store.clone())
            .execute(
                first.post_id,
                UpdatePostInput {
                    title: None,
                    description: Some("Hello again".to_string()),
                },
                author,
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "First");
        assert_eq!(updated.description, "Hello again");
        assert!(updated.updated_at >= first.updated_at);

        DeletePostUseCase::new(store.clone())
            .execute(first.post_id, author)
            .await
            .unwrap();

        let posts = queries.execute().await.unwrap();
        assert_eq!(posts, vec![second]);
        assert!(matches!(
            queries.get(first.post_id).await,
            Err(BlogError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let store = Arc::new(InMemoryPostStore::new());
        let unknown = PostId::new();
        let editor = UserId::new();

        let update = UpdatePostUseCase::new(store.clone())
            .execute(
                unknown,
                UpdatePostInput {
                    title: Some("Title".to_string()),
                    description: None,
                },
                editor,
            )
            .await;
        assert!(matches!(update, Err(BlogError::NotFound)));

        let delete = DeletePostUseCase::new(store).execute(unknown, editor).await;
        assert!(matches!(delete, Err(BlogError::NotFound)));
    }

    #[tokio::test]
    async fn test_missing_fields() {
        let store = Arc::new(InMemoryPostStore::new());
        let author = UserId::new();

        let create = CreatePostUseCase::new(store.clone())
            .execute(create_input("Title", ""), author)
            .await;
        assert!(matches!(create, Err(BlogError::MissingField)));

        let post = CreatePostUseCase::new(store.clone())
            .execute(create_input("Title", "Body"), author)
            .await
            .unwrap();

        let update = UpdatePostUseCase::new(store.clone())
            .execute(
                post.post_id,
                UpdatePostInput {
                    title: Some(" ".to_string()),
                    description: None,
                },
                author,
            )
            .await;
        assert!(matches!(update, Err(BlogError::MissingField)));

        let unchanged = ListPostsUseCase::new(store).get(post.post_id).await.unwrap();
        assert_eq!(unchanged, post);
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use auth::TokenService;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use axum::response::Response;
    use chrono::Utc;
    use kernel::id::UserId;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::infra::InMemoryPostStore;
    use crate::presentation::router::blog_router;

    struct Harness {
        app: Router,
        token: String,
    }

    fn harness() -> Harness {
        let tokens = Arc::new(TokenService::new("blog-test-secret", Duration::from_secs(3600)).unwrap());
        let token = tokens.issue(UserId::new(), Utc::now()).unwrap();
        let app = blog_router(Arc::new(InMemoryPostStore::new()), tokens);
        Harness { app, token }
    }

    fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_writes_require_token() {
        let h = harness();
        let body = json!({"title": "T", "description": "D"});

        let response = h
            .app
            .clone()
            .oneshot(request(Method::POST, "/blogs", None, Some(body.clone())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = h
            .app
            .clone()
            .oneshot(request(Method::POST, "/blogs", Some("a.b.c"), Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let uri = format!("/blogs/{}", uuid::Uuid::new_v4());
        let response = h
            .app
            .oneshot(request(Method::DELETE, &uri, None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_http_round_trip() {
        let h = harness();

        let response = h
            .app
            .clone()
            .oneshot(request(
                Method::POST,
                "/blogs",
                Some(&h.token),
                Some(json!({"title": "Hello", "description": "First post"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = json_body(response).await;
        assert_eq!(created["title"], "Hello");
        let id = created["id"].as_str().unwrap().to_string();
        let uri = format!("/blogs/{id}");

        let response = h
            .app
            .clone()
            .oneshot(request(Method::GET, "/blogs", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await.as_array().unwrap().len(), 1);

        let response = h
            .app
            .clone()
            .oneshot(request(Method::GET, &uri, None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["description"], "First post");

        let response = h
            .app
            .clone()
            .oneshot(request(
                Method::PUT,
                &uri,
                Some(&h.token),
                Some(json!({"title": "Hello, edited"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated = json_body(response).await;
        assert_eq!(updated["title"], "Hello, edited");
        assert_eq!(updated["description"], "First post");

        let response = h
            .app
            .clone()
            .oneshot(request(Method::DELETE, &uri, Some(&h.token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["message"], "Blog deleted successfully");

        let response = h
            .app
            .oneshot(request(Method::GET, &uri, None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_client_errors() {
        let h = harness();

        let response = h
            .app
            .clone()
            .oneshot(request(
                Method::POST,
                "/blogs",
                Some(&h.token),
                Some(json!({"title": "No body"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["detail"],
            "Title and description are required"
        );

        let response = h
            .app
            .clone()
            .oneshot(request(
                Method::POST,
                "/blogs",
                Some(&h.token),
                Some(json!({"title": null, "description": "Body"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["detail"],
            "Title and description are required"
        );

        let response = h
            .app
            .clone()
            .oneshot(request(
                Method::POST,
                "/blogs",
                Some(&h.token),
                Some(json!({"title": 7, "description": "Body"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["detail"], "Invalid request body");

        let response = h
            .app
            .clone()
            .oneshot(request(
                Method::PUT,
                &format!("/blogs/{}", uuid::Uuid::new_v4()),
                Some(&h.token),
                Some(json!({"title": "Missing"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = h
            .app
            .oneshot(request(Method::GET, "/blogs/not-a-uuid", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
