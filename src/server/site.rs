//! Public portfolio pages. Read-only views over the site document.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
    routing::get,
    Form, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::error::AppError;
use super::views::{render, render_with_status};
use super::AppState;
use crate::db;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/projects", get(projects))
        .route("/projects/{id}", get(project_detail))
        .route("/contact", get(contact_page).post(contact))
        .route("/health", get(health))
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn home(State(state): State<AppState>) -> Result<Response, AppError> {
    let doc = state.store.load()?;

    Ok(render(
        "pages/home",
        format!("{} - Portfolio", doc.profile.name),
        json!({
            "profile": doc.profile,
            "skills": doc.skills,
            "projects": db::list_projects(&doc),
        }),
    ))
}

async fn about(State(state): State<AppState>) -> Result<Response, AppError> {
    let doc = state.store.load()?;

    Ok(render(
        "pages/about",
        format!("About - {}", doc.profile.name),
        json!({ "profile": doc.profile, "skills": doc.skills }),
    ))
}

async fn projects(State(state): State<AppState>) -> Result<Response, AppError> {
    let doc = state.store.load()?;

    Ok(render(
        "pages/projects",
        format!("Projects - {}", doc.profile.name),
        json!({ "profile": doc.profile, "projects": db::list_projects(&doc) }),
    ))
}

async fn project_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let doc = state.store.load()?;

    let project = id
        .trim()
        .parse::<u64>()
        .ok()
        .and_then(|id| db::find_project(&doc, id));

    let Some(project) = project else {
        return Ok(Redirect::to("/projects").into_response());
    };

    Ok(render(
        "pages/project-detail",
        format!("{} - {}", project.title, doc.profile.name),
        json!({ "profile": doc.profile, "project": project }),
    ))
}

fn contact_view(profile: Value, success: Option<&str>) -> Response {
    let name = profile["name"].as_str().unwrap_or_default().to_string();
    render(
        "pages/contact",
        format!("Contact - {}", name),
        json!({ "profile": profile, "success": success }),
    )
}

async fn contact_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let doc = state.store.load()?;
    Ok(contact_view(json!(doc.profile), None))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContactForm {
    name: String,
    email: String,
    message: String,
}

/// Records a contact form submission. Nothing is sent anywhere; the message
/// only goes to the log.
async fn contact(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    tracing::info!(
        name = %form.name,
        email = %form.email,
        message = %form.message,
        "Contact form submission"
    );

    let doc = state.store.load()?;
    Ok(contact_view(
        json!(doc.profile),
        Some("Thank you for your message! I'll get back to you soon."),
    ))
}

pub async fn not_found() -> Response {
    render_with_status(
        StatusCode::NOT_FOUND,
        "pages/404",
        "404 - Page Not Found",
        Value::Null,
    )
}
