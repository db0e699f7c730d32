use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::members::inbound::http as members_http;
use crate::shell::hello;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/members",
            post(members_http::join).get(members_http::list_members),
        )
        .route("/members/{id}", get(members_http::get_member))
        .route("/hello", get(hello::hello))
        .route("/hello-mvc", get(hello::hello_mvc))
        .route("/hello-string", get(hello::hello_string))
        .route("/hello-api", get(hello::hello_api))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
