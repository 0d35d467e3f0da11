//! Admin panel routes, mounted under `/admin`.
//!
//! Every route except the login pair sits behind [`auth::require_admin`].
//! Mutating handlers load the document, change it in memory and write the
//! whole document back before redirecting.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap},
    middleware,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Extension, Form, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;

use super::auth::{self, AdminSession};
use super::error::AppError;
use super::views::render;
use super::AppState;
use crate::db::{self, ProfileFields, ProjectFields, SaveOutcome, SkillInput};

pub fn routes(state: AppState) -> Router<AppState> {
    let public_routes = Router::new().route("/login", get(login_page).post(login));

    let protected_routes = Router::new()
        .route("/", get(dashboard))
        .route("/logout", get(logout))
        .route("/profile", get(profile_page).post(update_profile))
        .route("/skills", get(skills_page).post(update_skills))
        .route("/projects", get(projects_page))
        .route("/projects/add", get(add_project_page))
        .route("/projects/edit/{id}", get(edit_project_page))
        .route("/projects/save", post(save_project))
        .route("/projects/delete/{id}", post(delete_project))
        .route_layer(middleware::from_fn_with_state(state, auth::require_admin));

    Router::new().merge(public_routes).merge(protected_routes)
}

/// `?success=1` marker set after a successful edit.
#[derive(Debug, Default, Deserialize)]
struct SuccessQuery {
    success: Option<String>,
}

impl SuccessQuery {
    fn flag(&self) -> bool {
        self.success.as_deref().is_some_and(|s| !s.is_empty())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LoginForm {
    username: String,
    password: String,
}

#[derive(Debug, Default, Deserialize)]
struct SaveProjectForm {
    #[serde(default)]
    id: String,
    #[serde(flatten)]
    fields: ProjectFields,
}

/// Parses a project id from a path or form value.
fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

fn to_projects() -> Response {
    Redirect::to("/admin/projects").into_response()
}

// ============================================================================
// Login
// ============================================================================

async fn login_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if auth::is_authenticated(&state.sessions, &headers) {
        return Redirect::to("/admin").into_response();
    }

    render("admin/login", "Admin Login", json!({ "error": null }))
}

async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let doc = state.store.load()?;

    if auth::verify_credentials(&form.username, &form.password, &doc.admin) {
        let expired = state.sessions.cleanup_expired();
        if expired > 0 {
            tracing::debug!("Removed {} expired session(s)", expired);
        }

        let token = state.sessions.create_session();
        tracing::info!("Admin '{}' logged in", form.username);

        return Ok((
            [(
                header::SET_COOKIE,
                auth::session_cookie(&token, state.sessions.ttl()),
            )],
            Redirect::to("/admin"),
        )
            .into_response());
    }

    tracing::warn!("Failed login attempt for '{}'", form.username);
    Ok(render(
        "admin/login",
        "Admin Login",
        json!({ "error": "Invalid credentials" }),
    ))
}

async fn logout(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
) -> Response {
    state.sessions.destroy(&session.token);
    tracing::info!("Admin logged out");

    (
        [(header::SET_COOKIE, auth::clear_session_cookie())],
        Redirect::to("/admin/login"),
    )
        .into_response()
}

// ============================================================================
// Dashboard, profile and skills
// ============================================================================

async fn dashboard(State(state): State<AppState>) -> Result<Response, AppError> {
    let doc = state.store.load()?;

    Ok(render(
        "admin/dashboard",
        "Admin Dashboard",
        json!({
            "profile": doc.profile,
            "projects": db::list_projects(&doc),
            "skills": doc.skills,
        }),
    ))
}

async fn profile_page(
    State(state): State<AppState>,
    Query(query): Query<SuccessQuery>,
) -> Result<Response, AppError> {
    let doc = state.store.load()?;

    Ok(render(
        "admin/edit-profile",
        "Edit Profile",
        json!({ "profile": doc.profile, "success": query.flag() }),
    ))
}

async fn update_profile(
    State(state): State<AppState>,
    Form(fields): Form<ProfileFields>,
) -> Result<Response, AppError> {
    let mut doc = state.store.load()?;
    db::replace_profile(&mut doc, fields);
    state.store.save(&doc)?;

    tracing::info!("Profile updated");
    Ok(Redirect::to("/admin/profile?success=1").into_response())
}

async fn skills_page(
    State(state): State<AppState>,
    Query(query): Query<SuccessQuery>,
) -> Result<Response, AppError> {
    let doc = state.store.load()?;

    Ok(render(
        "admin/edit-skills",
        "Edit Skills",
        json!({ "skills": doc.skills, "success": query.flag() }),
    ))
}

async fn update_skills(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let mut doc = state.store.load()?;
    db::replace_skills(&mut doc, &SkillInput::from_form(&form));
    state.store.save(&doc)?;

    tracing::info!("Skills updated");
    Ok(Redirect::to("/admin/skills?success=1").into_response())
}

// ============================================================================
// Projects
// ============================================================================

async fn projects_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let doc = state.store.load()?;

    Ok(render(
        "admin/projects-list",
        "Manage Projects",
        json!({ "projects": db::list_projects(&doc) }),
    ))
}

async fn add_project_page() -> Response {
    render(
        "admin/edit-project",
        "Add Project",
        json!({ "project": null, "success": false }),
    )
}

async fn edit_project_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<SuccessQuery>,
) -> Result<Response, AppError> {
    let Some(id) = parse_id(&id) else {
        return Ok(to_projects());
    };

    let doc = state.store.load()?;
    let Some(project) = db::find_project(&doc, id) else {
        return Ok(to_projects());
    };

    Ok(render(
        "admin/edit-project",
        "Edit Project",
        json!({ "project": project, "success": query.flag() }),
    ))
}

async fn save_project(
    State(state): State<AppState>,
    Form(form): Form<SaveProjectForm>,
) -> Result<Response, AppError> {
    let id = if form.id.trim().is_empty() {
        None
    } else {
        match parse_id(&form.id) {
            Some(id) => Some(id),
            None => {
                tracing::warn!("Ignoring save for invalid project id '{}'", form.id);
                return Ok(to_projects());
            }
        }
    };

    let mut doc = state.store.load()?;
    let outcome = db::save_project(&mut doc, id, form.fields);
    if outcome.is_changed() {
        state.store.save(&doc)?;
    }

    match outcome {
        SaveOutcome::Updated(id) => {
            tracing::info!("Updated project {}", id);
            Ok(Redirect::to(&format!("/admin/projects/edit/{}?success=1", id)).into_response())
        }
        SaveOutcome::Created(id) => {
            tracing::info!("Created project {}", id);
            Ok(to_projects())
        }
        SaveOutcome::NotFound(id) => {
            tracing::warn!("Ignoring save for unknown project {}", id);
            Ok(to_projects())
        }
    }
}

async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Some(id) = parse_id(&id) else {
        return Ok(to_projects());
    };

    let mut doc = state.store.load()?;
    if db::delete_project(&mut doc, id) {
        state.store.save(&doc)?;
        tracing::info!("Deleted project {}", id);
    }

    Ok(to_projects())
}
