// Greeting endpoints, kept from the original application's hello controller.
// They carry no state and exist alongside the member routes.

use axum::{Json, extract::Query, response::Html};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct NameParam {
    pub name: String,
}

#[derive(Serialize)]
pub struct HelloApiResponse {
    pub name: String,
}

pub async fn hello() -> Html<&'static str> {
    Html("<p>hello!!</p>")
}

pub async fn hello_mvc(Query(param): Query<NameParam>) -> Html<String> {
    Html(format!("<p>hello {}</p>", param.name))
}

pub async fn hello_string(Query(param): Query<NameParam>) -> String {
    format!("hello{}", param.name)
}

pub async fn hello_api(Query(param): Query<NameParam>) -> Json<HelloApiResponse> {
    Json(HelloApiResponse { name: param.name })
}
