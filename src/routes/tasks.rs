use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{NewTask, TaskPatch},
    store,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use sqlx::SqlitePool;
use validator::Validate;

/// Retrieves all tasks owned by the authenticated user.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of task objects, in insertion order.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `500 Internal Server Error`: For store errors.
#[get("")]
pub async fn list_tasks(
    pool: web::Data<SqlitePool>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let tasks = store::tasks::list_for_owner(&pool, user.0).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a new task for the authenticated user.
///
/// ## Request Body:
/// - `title`: The title of the task (required, non-empty).
/// - `description` (optional): A description of the task; defaults to empty.
///
/// The created task starts with `done = false` and is owned by the caller.
///
/// ## Responses:
/// - `201 Created`: Returns the newly created task as JSON.
/// - `400 Bad Request`: If the title is missing or empty.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `500 Internal Server Error`: For store errors.
#[post("")]
pub async fn create_task(
    pool: web::Data<SqlitePool>,
    user: AuthenticatedUser,
    task_data: web::Json<NewTask>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let input = task_data.into_inner();
    let description = input.description.unwrap_or_default();
    let task = store::tasks::insert(&pool, user.0, &input.title, &description).await?;

    Ok(HttpResponse::Created().json(task))
}

/// Retrieves a specific task by its ID.
///
/// Ownership and existence are checked together: a task owned by another
/// user yields the same 404 as a task that does not exist.
///
/// ## Responses:
/// - `200 OK`: Returns the task as JSON.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If no task with this id is owned by the caller.
/// - `500 Internal Server Error`: For store errors.
#[get("/{id}")]
pub async fn get_task(
    pool: web::Data<SqlitePool>,
    user: AuthenticatedUser,
    task_id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let task = store::tasks::find_owned(&pool, user.0, task_id.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    Ok(HttpResponse::Ok().json(task))
}

/// Updates a task owned by the authenticated user.
///
/// Any of `title`, `description`, and `done` may be supplied; fields left out
/// retain their previous values.
///
/// ## Responses:
/// - `200 OK`: Returns the updated task as JSON.
/// - `400 Bad Request`: If a supplied title is empty.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If no task with this id is owned by the caller.
/// - `500 Internal Server Error`: For store errors.
#[put("/{id}")]
pub async fn update_task(
    pool: web::Data<SqlitePool>,
    user: AuthenticatedUser,
    task_id: web::Path<i64>,
    task_data: web::Json<TaskPatch>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    // Single atomic statement: omitted fields keep their stored values.
    let updated =
        store::tasks::update_owned(&pool, user.0, task_id.into_inner(), &task_data).await?
            .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Deletes a task owned by the authenticated user.
///
/// ## Responses:
/// - `204 No Content`: On successful deletion.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If no task with this id is owned by the caller.
/// - `500 Internal Server Error`: For store errors.
#[delete("/{id}")]
pub async fn delete_task(
    pool: web::Data<SqlitePool>,
    user: AuthenticatedUser,
    task_id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let deleted = store::tasks::delete_owned(&pool, user.0, task_id.into_inner()).await?;

    if !deleted {
        return Err(AppError::NotFound("Task not found".into()));
    }

    Ok(HttpResponse::NoContent().finish())
}
