//! Student registry pages and form posts.

use super::{back_to_form, form_rejection, parse_id};
use crate::error::AppError;
use crate::extractors::Flash;
use crate::model::{Student, StudentForm};
use crate::response::{success_many, success_one, FormView, SuccessMany, SuccessOne};
use crate::service::StudentService;
use crate::state::AppState;
use axum::{
    extract::{rejection::FormRejection, Path, Query, State},
    response::Redirect,
    Form, Json,
};
use serde::Deserialize;

pub const STUDENT_ADDED: &str = "Student added successfully!";
pub const STUDENT_UPDATED: &str = "Student updated successfully!";
pub const STUDENT_DELETED: &str = "Student deleted!";

const FIELDS: &[&str] = &["name", "email", "course", "mobile"];

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// GET / — every student, newest first.
pub async fn index(
    State(state): State<AppState>,
    flash: Flash,
) -> Result<(Flash, Json<SuccessMany<Student>>), AppError> {
    let students = StudentService::list(&state.db).await?;
    let (flash, flashes) = flash.take();
    Ok((flash, success_many(students, flashes)))
}

/// GET /search?q= — students whose name contains `q`.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
    flash: Flash,
) -> Result<(Flash, Json<SuccessMany<Student>>), AppError> {
    let students = StudentService::search(&state.db, params.q.as_deref()).await?;
    let (flash, flashes) = flash.take();
    Ok((flash, success_many(students, flashes)))
}

/// GET /add — empty form.
pub async fn add_form(flash: Flash) -> (Flash, Json<SuccessOne<FormView<StudentForm>>>) {
    let (flash, flashes) = flash.take();
    let view = FormView {
        action: "/add".to_string(),
        fields: FIELDS,
        values: None,
    };
    (flash, success_one(view, flashes))
}

/// POST /add
pub async fn add(
    State(state): State<AppState>,
    flash: Flash,
    form: Result<Form<StudentForm>, FormRejection>,
) -> Result<(Flash, Redirect), AppError> {
    let Form(form) = form.map_err(form_rejection)?;
    match StudentService::create(&state.db, &form).await {
        Ok(_) => Ok((flash.success(STUDENT_ADDED), Redirect::to("/"))),
        Err(e) => back_to_form(flash, e, "/add"),
    }
}

/// GET /edit/:id — form pre-filled with the stored record.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    flash: Flash,
) -> Result<(Flash, Json<SuccessOne<FormView<Student>>>), AppError> {
    let id = parse_id(&id_str)?;
    let student = StudentService::read(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("student {}", id)))?;
    let (flash, flashes) = flash.take();
    let view = FormView {
        action: format!("/edit/{}", id),
        fields: FIELDS,
        values: Some(student),
    };
    Ok((flash, success_one(view, flashes)))
}

/// POST /edit/:id
pub async fn edit(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    flash: Flash,
    form: Result<Form<StudentForm>, FormRejection>,
) -> Result<(Flash, Redirect), AppError> {
    let id = parse_id(&id_str)?;
    let Form(form) = form.map_err(form_rejection)?;
    match StudentService::update(&state.db, id, &form).await {
        Ok(_) => Ok((flash.success(STUDENT_UPDATED), Redirect::to("/"))),
        Err(e) => back_to_form(flash, e, &format!("/edit/{}", id)),
    }
}

/// GET /delete/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    flash: Flash,
) -> Result<(Flash, Redirect), AppError> {
    let id = parse_id(&id_str)?;
    StudentService::delete(&state.db, id).await?;
    Ok((flash.danger(STUDENT_DELETED), Redirect::to("/")))
}
