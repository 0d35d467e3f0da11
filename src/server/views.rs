//! View data handed to the rendering layer.
//!
//! Handlers describe a page as a view name, a title and plain data. The
//! response body is that description as a JSON object; turning it into HTML
//! is left to whatever sits in front of the server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{Map, Value};

/// Builds the response for `view` with `data` merged alongside the title.
pub fn render(view: &str, title: impl Into<String>, data: Value) -> Response {
    Json(page(view, title.into(), data)).into_response()
}

/// Like [`render`] with an explicit status code.
pub fn render_with_status(
    status: StatusCode,
    view: &str,
    title: impl Into<String>,
    data: Value,
) -> Response {
    (status, Json(page(view, title.into(), data))).into_response()
}

fn page(view: &str, title: String, data: Value) -> Value {
    let mut page = Map::new();
    page.insert("view".to_string(), Value::String(view.to_string()));
    page.insert("title".to_string(), Value::String(title));

    match data {
        Value::Object(fields) => page.extend(fields),
        Value::Null => {}
        other => {
            page.insert("data".to_string(), other);
        }
    }

    Value::Object(page)
}
