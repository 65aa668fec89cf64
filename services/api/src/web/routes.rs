//! services/api/src/web/routes.rs
//!
//! Assembles the API router. Every matched route runs behind the session
//! middleware; unmatched paths fall through to a plain 404.

use crate::web::booking::{complete_booking, generate_trip_plan};
use crate::web::cart::{add_item, book_accommodation, book_adventure, remove_item, view_cart};
use crate::web::middleware::{ensure_session, SESSION_PATH};
use crate::web::rest::{
    end_session, navigate, render_page, reset_session, select_language, session_summary,
};
use crate::web::state::AppState;
use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route(SESSION_PATH, get(session_summary).delete(end_session))
        .route("/api/session/reset", post(reset_session))
        .route("/api/session/language", put(select_language))
        .route("/api/navigate", post(navigate))
        .route("/api/page", get(render_page))
        .route("/api/cart", get(view_cart))
        .route("/api/cart/items", post(add_item))
        .route("/api/cart/items/{name}", delete(remove_item))
        .route("/api/adventures/book", post(book_adventure))
        .route("/api/accommodations/book", post(book_accommodation))
        .route("/api/trip-plan", post(generate_trip_plan))
        .route("/api/booking/complete", post(complete_booking))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            ensure_session,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemorySessionStore, StaticCatalog};
    use crate::config::Config;
    use crate::web::middleware::SESSION_COOKIE;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use std::time::Duration;
    use tower::ServiceExt;

    fn build_test_app() -> Router {
        let config = Config {
            itinerary_delay: Duration::ZERO,
            booking_delay: Duration::ZERO,
            ..Config::default()
        };
        let state = AppState {
            sessions: Arc::new(InMemorySessionStore::new(config.session_ttl)),
            catalog: Arc::new(StaticCatalog::new()),
            config: Arc::new(config),
        };

        app(Arc::new(state))
    }

    fn request(method: &str, uri: &str, cookie: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        builder.body(body).expect("expected request to build")
    }

    async fn send(app: &Router, request: Request<Body>) -> Response {
        app.clone().oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("expected response body");
        serde_json::from_slice(&body).expect("expected json body")
    }

    /// The `name=value` pair from the response's Set-Cookie header.
    fn session_cookie(response: &Response) -> String {
        let value = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("expected a session cookie")
            .to_str()
            .unwrap();
        value.split(';').next().unwrap().to_string()
    }

    /// Opens a session and returns its cookie.
    async fn start_session(app: &Router) -> String {
        let response = send(app, request("GET", "/api/session", None, None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        session_cookie(&response)
    }

    #[tokio::test]
    async fn when_first_request_has_no_cookie_then_session_starts_on_home() {
        let app = build_test_app();

        let response = send(&app, request("GET", "/api/session", None, None)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = session_cookie(&response);
        assert!(cookie.starts_with(&format!("{}=", SESSION_COOKIE)));

        let payload = json_body(response).await;
        assert_eq!(payload["current_page"], "Home");
        assert_eq!(payload["language"], "English");
        assert_eq!(payload["cart_items"], 0);
    }

    #[tokio::test]
    async fn when_cookie_is_known_then_no_new_cookie_is_issued() {
        let app = build_test_app();
        let cookie = start_session(&app).await;

        let response = send(&app, request("GET", "/api/session", Some(&cookie), None)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn when_cookie_is_unknown_then_a_fresh_session_replaces_it() {
        let app = build_test_app();
        let stale = format!("{}={}", SESSION_COOKIE, uuid::Uuid::new_v4());

        let response = send(&app, request("GET", "/api/cart", Some(&stale), None)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_ne!(session_cookie(&response), stale);
        let payload = json_body(response).await;
        assert_eq!(payload["is_empty"], true);
    }

    #[tokio::test]
    async fn when_navigating_to_booking_then_page_renders_empty_cart_prompt() {
        let app = build_test_app();
        let cookie = start_session(&app).await;

        let response = send(
            &app,
            request("POST", "/api/navigate", Some(&cookie), Some(json!({"label": "💳 Booking"}))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(payload["frame"]["current_page"], "Booking");
        assert_eq!(payload["view"]["page"], "booking");
        assert_eq!(payload["view"]["state"], "empty");
        assert_eq!(payload["view"]["browse_target"], "Adventures");

        let response = send(&app, request("GET", "/api/session", Some(&cookie), None)).await;
        assert_eq!(json_body(response).await["current_page"], "Booking");
    }

    #[tokio::test]
    async fn when_label_is_unknown_then_returns_400_and_page_is_unchanged() {
        let app = build_test_app();
        let cookie = start_session(&app).await;

        let response = send(
            &app,
            request("POST", "/api/navigate", Some(&cookie), Some(json!({"label": "Nowhere"}))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["message"].is_string());

        let response = send(&app, request("GET", "/api/session", Some(&cookie), None)).await;
        assert_eq!(json_body(response).await["current_page"], "Home");
    }

    #[tokio::test]
    async fn when_item_is_added_then_cart_total_reflects_its_price() {
        let app = build_test_app();
        let cookie = start_session(&app).await;

        let response = send(
            &app,
            request(
                "POST",
                "/api/cart/items",
                Some(&cookie),
                Some(json!({"name": "Glacier Hiking", "details": "1 day", "price": 180})),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let payload = json_body(response).await;
        assert_eq!(payload["total_cost"], 180);
        assert_eq!(payload["items"][0]["name"], "Glacier Hiking");
        assert_eq!(payload["is_empty"], false);
    }

    #[tokio::test]
    async fn when_item_name_is_blank_then_returns_400() {
        let app = build_test_app();
        let cookie = start_session(&app).await;

        let response = send(
            &app,
            request(
                "POST",
                "/api/cart/items",
                Some(&cookie),
                Some(json!({"name": "  ", "details": "", "price": 10})),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn when_removing_an_absent_item_then_cart_is_unchanged() {
        let app = build_test_app();
        let cookie = start_session(&app).await;
        send(
            &app,
            request(
                "POST",
                "/api/cart/items",
                Some(&cookie),
                Some(json!({"name": "Sauna", "details": "", "price": 40})),
            ),
        )
        .await;

        let response = send(
            &app,
            request("DELETE", "/api/cart/items/Unknown%20Item", Some(&cookie), None),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(payload["removed"], false);
        assert_eq!(payload["cart"]["total_cost"], 40);
    }

    #[tokio::test]
    async fn when_removing_a_duplicate_then_only_the_first_goes() {
        let app = build_test_app();
        let cookie = start_session(&app).await;
        for _ in 0..2 {
            send(
                &app,
                request(
                    "POST",
                    "/api/cart/items",
                    Some(&cookie),
                    Some(json!({"name": "Sauna", "details": "", "price": 40})),
                ),
            )
            .await;
        }

        let response = send(&app, request("DELETE", "/api/cart/items/Sauna", Some(&cookie), None)).await;

        let payload = json_body(response).await;
        assert_eq!(payload["removed"], true);
        assert_eq!(payload["cart"]["items"].as_array().unwrap().len(), 1);
        assert_eq!(payload["cart"]["total_cost"], 40);
    }

    #[tokio::test]
    async fn when_two_sessions_shop_then_their_carts_stay_separate() {
        let app = build_test_app();
        let alice = start_session(&app).await;
        let bob = start_session(&app).await;
        assert_ne!(alice, bob);

        send(
            &app,
            request(
                "POST",
                "/api/adventures/book",
                Some(&alice),
                Some(json!({"name": "Northern Lights Safari"})),
            ),
        )
        .await;

        let response = send(&app, request("GET", "/api/cart", Some(&bob), None)).await;
        let payload = json_body(response).await;
        assert_eq!(payload["is_empty"], true);
        assert_eq!(payload["total_cost"], 0);
    }

    #[tokio::test]
    async fn when_booking_a_catalog_adventure_then_it_lands_in_the_cart() {
        let app = build_test_app();
        let cookie = start_session(&app).await;

        let response = send(
            &app,
            request(
                "POST",
                "/api/adventures/book",
                Some(&cookie),
                Some(json!({"name": "Lofoten Islands Hiking"})),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let payload = json_body(response).await;
        assert_eq!(payload["message"], "✅ Lofoten Islands Hiking added to cart!");
        assert_eq!(payload["item"]["name"], "Lofoten Islands Hiking");
        assert_eq!(payload["cart"]["items"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn when_booked_name_is_not_in_catalog_then_returns_404() {
        let app = build_test_app();
        let cookie = start_session(&app).await;

        let response = send(
            &app,
            request(
                "POST",
                "/api/accommodations/book",
                Some(&cookie),
                Some(json!({"name": "Castle in the Sky"})),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn when_filtering_adventures_by_norway_then_only_norwegian_trips_render() {
        let app = build_test_app();
        let cookie = start_session(&app).await;
        send(
            &app,
            request("POST", "/api/navigate", Some(&cookie), Some(json!({"label": "Adventures"}))),
        )
        .await;

        let response = send(&app, request("GET", "/api/page?country=Norway", Some(&cookie), None)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        let names: Vec<&str> = payload["view"]["adventures"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Lofoten Islands Hiking", "Fjord Kayaking"]);
    }

    #[tokio::test]
    async fn when_price_range_is_inverted_then_returns_400() {
        let app = build_test_app();
        let cookie = start_session(&app).await;

        let response = send(
            &app,
            request("GET", "/api/page?min_price=500&max_price=100", Some(&cookie), None),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn when_generating_a_trip_plan_then_total_is_the_itinerary_sum() {
        let app = build_test_app();
        let cookie = start_session(&app).await;

        let response = send(
            &app,
            request("POST", "/api/trip-plan", Some(&cookie), Some(json!({"budget": 1500}))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(payload["total_cost"], 1130);
        assert_eq!(payload["days"].as_array().unwrap().len(), 7);
        assert_eq!(payload["budget_status"]["status"], "under_budget");
    }

    #[tokio::test]
    async fn when_trip_budget_is_out_of_range_then_returns_400() {
        let app = build_test_app();
        let cookie = start_session(&app).await;

        let response = send(
            &app,
            request("POST", "/api/trip-plan", Some(&cookie), Some(json!({"budget": 100}))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn when_cart_is_empty_then_booking_completion_returns_409() {
        let app = build_test_app();
        let cookie = start_session(&app).await;

        let response = send(
            &app,
            request(
                "POST",
                "/api/booking/complete",
                Some(&cookie),
                Some(json!({"payment_method": "PayPal"})),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn when_booking_completes_then_cart_is_kept() {
        let app = build_test_app();
        let cookie = start_session(&app).await;
        send(
            &app,
            request(
                "POST",
                "/api/accommodations/book",
                Some(&cookie),
                Some(json!({"name": "Ice Hotel"})),
            ),
        )
        .await;

        let response = send(
            &app,
            request(
                "POST",
                "/api/booking/complete",
                Some(&cookie),
                Some(json!({"payment_method": "Credit Card", "full_name": "Test Traveller"})),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(payload["message"], "🎉 Booking confirmed! Check your email for details.");
        assert_eq!(payload["items"], 1);

        let response = send(&app, request("GET", "/api/cart", Some(&cookie), None)).await;
        assert_eq!(json_body(response).await["is_empty"], false);
    }

    #[tokio::test]
    async fn when_session_is_reset_then_cart_clears_and_page_returns_home() {
        let app = build_test_app();
        let cookie = start_session(&app).await;
        send(
            &app,
            request("POST", "/api/navigate", Some(&cookie), Some(json!({"label": "Analytics"}))),
        )
        .await;
        send(
            &app,
            request(
                "POST",
                "/api/cart/items",
                Some(&cookie),
                Some(json!({"name": "Sauna", "details": "", "price": 40})),
            ),
        )
        .await;

        let response = send(&app, request("POST", "/api/session/reset", Some(&cookie), None)).await;

        let payload = json_body(response).await;
        assert_eq!(payload["current_page"], "Home");
        assert_eq!(payload["cart_items"], 0);
    }

    #[tokio::test]
    async fn when_session_ends_then_cookie_is_cleared() {
        let app = build_test_app();
        let cookie = start_session(&app).await;

        let response = send(&app, request("DELETE", "/api/session", Some(&cookie), None)).await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let cleared = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(cleared.contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn when_language_is_selected_then_session_reports_it() {
        let app = build_test_app();
        let cookie = start_session(&app).await;

        let response = send(
            &app,
            request("PUT", "/api/session/language", Some(&cookie), Some(json!({"language": "Svenska"}))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        assert_eq!(payload["language"], "Svenska");
        assert_eq!(payload["language_code"], "sv");

        let response = send(&app, request("GET", "/api/page", Some(&cookie), None)).await;
        assert_eq!(json_body(response).await["frame"]["language"], "Svenska");
    }

    #[tokio::test]
    async fn when_ending_without_a_session_then_only_a_clearing_cookie_is_sent() {
        let app = build_test_app();

        let response = send(&app, request("DELETE", "/api/session", None, None)).await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let cookies: Vec<&str> = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(cookies.len(), 1);
        assert!(cookies[0].contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn when_ended_session_cookie_is_reused_then_a_fresh_session_starts() {
        let app = build_test_app();
        let cookie = start_session(&app).await;
        send(&app, request("DELETE", "/api/session", Some(&cookie), None)).await;

        let response = send(&app, request("GET", "/api/session", Some(&cookie), None)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_ne!(session_cookie(&response), cookie);
    }

    #[tokio::test]
    async fn when_trip_duration_overflows_then_returns_400_and_error_message() {
        let app = build_test_app();
        let cookie = start_session(&app).await;

        let response = send(
            &app,
            request("POST", "/api/trip-plan", Some(&cookie), Some(json!({"duration_days": 300}))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["message"].is_string());
    }

    #[tokio::test]
    async fn when_booking_payload_lacks_payment_method_then_returns_400_and_error_message() {
        let app = build_test_app();
        let cookie = start_session(&app).await;

        let response = send(
            &app,
            request("POST", "/api/booking/complete", Some(&cookie), Some(json!({}))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let message = json_body(response).await["message"].as_str().unwrap().to_string();
        assert!(message.contains("payment_method"));
    }

    #[tokio::test]
    async fn when_query_value_is_malformed_then_returns_400_and_error_message() {
        let app = build_test_app();
        let cookie = start_session(&app).await;

        let response = send(&app, request("GET", "/api/page?guests=many", Some(&cookie), None)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["message"].is_string());
    }

    #[tokio::test]
    async fn when_accommodations_open_then_default_price_window_applies() {
        let app = build_test_app();
        let cookie = start_session(&app).await;

        let response = send(
            &app,
            request("POST", "/api/navigate", Some(&cookie), Some(json!({"label": "Accommodations"}))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let payload = json_body(response).await;
        let names: Vec<&str> = payload["view"]["accommodations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "Arctic TreeHouse Hotel",
                "Bergen Boutique Hotel",
                "Lakeside Cabin",
                "Northern Lights Lodge",
            ]
        );
        assert_eq!(payload["view"]["price_slider"]["min"], 50);
        assert_eq!(payload["view"]["price_slider"]["max"], 500);
        assert_eq!(payload["view"]["price_slider"]["default"]["low"], 100);
        assert_eq!(payload["view"]["price_slider"]["default"]["high"], 300);

        let response = send(&app, request("GET", "/api/page", Some(&cookie), None)).await;
        let payload = json_body(response).await;
        assert_eq!(payload["view"]["accommodations"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn when_route_is_unknown_then_returns_404() {
        let app = build_test_app();

        let response = send(&app, request("GET", "/api/nowhere", None, None)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
