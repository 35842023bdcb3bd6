// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod extract;

use axum::{
    Json, Router,
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use focusdesk::{PomodorosView, TaskHistory, TaskView, TodoView, UserRoot};
use focusdesk_api::{
    AddTaskRequest, ApiError, ApiResult, CreateCategoryRequest, CreateGroupRequest,
    CreatePlannedRequest, CreateTodoRequest, DeleteRequest, EditCategoryRequest, EditDoneRequest,
    EditGroupRequest, EditPlannedRequest, EditTaskRequest, EditTodoRequest, MarkDoneRequest,
    ResetResponse, TasksByMonthsQuery,
};
use focusdesk_domain::{Category, DonePomodoro, Group, PlannedPomodoro, UserId};
use focusdesk_persistence::{Persistence, PersistenceError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::extract::{CurrentUser, JsonBody};

/// focusdesk server - HTTP server for todos, pomodoros and time tracking
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for user documents.
    persistence: Arc<Mutex<Persistence>>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
pub struct HttpError {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error message.
    pub message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

/// Loads the caller's aggregate.
async fn load_root(app_state: &AppState, user_id: &UserId) -> Result<UserRoot, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let root: UserRoot = persistence.load_root(user_id)?;
    drop(persistence);
    Ok(root)
}

/// Runs a read-only operation against the caller's aggregate.
async fn run_read<T, F>(app_state: &AppState, user_id: &UserId, read: F) -> Result<Json<T>, HttpError>
where
    T: Send,
    F: FnOnce(&UserRoot) -> Result<T, ApiError> + Send,
{
    let root: UserRoot = load_root(app_state, user_id).await?;
    Ok(Json(read(&root)?))
}

/// Runs one unit of work: load the caller's aggregate, apply a single
/// operation, then save the new aggregate.
///
/// The lock is released while the operation runs. Two concurrent writes
/// for the same user race, and the later save wins.
async fn run_write<T, F>(
    app_state: &AppState,
    user_id: &UserId,
    operation: &'static str,
    write: F,
) -> Result<Json<T>, HttpError>
where
    T: Send,
    F: FnOnce(&UserRoot) -> Result<ApiResult<T>, ApiError> + Send,
{
    info!(user_id = %user_id, operation, "Handling request");

    let root: UserRoot = load_root(app_state, user_id).await?;

    let ApiResult { response, new_root } = write(&root).inspect_err(|e| {
        debug!(user_id = %user_id, operation, error = %e, "Operation rejected");
    })?;

    let mut persistence = app_state.persistence.lock().await;
    let revision: i64 = persistence.save_root(user_id, &new_root)?;
    drop(persistence);

    info!(user_id = %user_id, operation, revision, "Saved user document");
    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// Checklist
// ---------------------------------------------------------------------------

/// Handler for GET `/api/todo/todos`.
async fn handle_list_todos(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<TodoView>>, HttpError> {
    run_read(&app_state, &user_id, |root| Ok(focusdesk_api::list_todos(root))).await
}

/// Handler for GET `/api/todo/groups`.
async fn handle_list_groups(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<Group>>, HttpError> {
    run_read(&app_state, &user_id, |root| Ok(focusdesk_api::list_groups(root))).await
}

/// Handler for POST `/api/todo/createTodo`.
async fn handle_create_todo(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    JsonBody(req): JsonBody<CreateTodoRequest>,
) -> Result<Json<TodoView>, HttpError> {
    run_write(&app_state, &user_id, "create_todo", |root| {
        focusdesk_api::create_todo(root, req)
    })
    .await
}

/// Handler for POST `/api/todo/editTodo`.
async fn handle_edit_todo(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    JsonBody(req): JsonBody<EditTodoRequest>,
) -> Result<Json<TodoView>, HttpError> {
    run_write(&app_state, &user_id, "edit_todo", |root| {
        focusdesk_api::edit_todo(root, req)
    })
    .await
}

/// Handler for POST `/api/todo/deleteTodo`.
async fn handle_delete_todo(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    JsonBody(req): JsonBody<DeleteRequest>,
) -> Result<Json<TodoView>, HttpError> {
    run_write(&app_state, &user_id, "delete_todo", |root| {
        focusdesk_api::delete_todo(root, &req)
    })
    .await
}

/// Handler for POST `/api/todo/createGroup`.
async fn handle_create_group(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    JsonBody(req): JsonBody<CreateGroupRequest>,
) -> Result<Json<Group>, HttpError> {
    run_write(&app_state, &user_id, "create_group", |root| {
        focusdesk_api::create_group(root, &req)
    })
    .await
}

/// Handler for POST `/api/todo/editGroup`.
async fn handle_edit_group(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    JsonBody(req): JsonBody<EditGroupRequest>,
) -> Result<Json<Group>, HttpError> {
    run_write(&app_state, &user_id, "edit_group", |root| {
        focusdesk_api::edit_group(root, &req)
    })
    .await
}

/// Handler for POST `/api/todo/deleteGroup`.
async fn handle_delete_group(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    JsonBody(req): JsonBody<DeleteRequest>,
) -> Result<Json<Group>, HttpError> {
    run_write(&app_state, &user_id, "delete_group", |root| {
        focusdesk_api::delete_group(root, &req)
    })
    .await
}

/// Handler for POST `/api/todo/reset`.
async fn handle_reset_checklist(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<ResetResponse>, HttpError> {
    run_write(&app_state, &user_id, "reset_checklist", |root| {
        Ok(focusdesk_api::reset_checklist(root))
    })
    .await
}

// ---------------------------------------------------------------------------
// Pomodoros
// ---------------------------------------------------------------------------

/// Handler for GET `/api/pomodoro/pomodoros`.
async fn handle_list_pomodoros(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<PomodorosView>, HttpError> {
    run_read(&app_state, &user_id, |root| {
        Ok(focusdesk_api::list_pomodoros(root))
    })
    .await
}

/// Handler for POST `/api/pomodoro/createPlanned`.
async fn handle_create_planned(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    JsonBody(req): JsonBody<CreatePlannedRequest>,
) -> Result<Json<PlannedPomodoro>, HttpError> {
    run_write(&app_state, &user_id, "create_planned", |root| {
        focusdesk_api::create_planned(root, &req)
    })
    .await
}

/// Handler for POST `/api/pomodoro/editPlanned`.
async fn handle_edit_planned(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    JsonBody(req): JsonBody<EditPlannedRequest>,
) -> Result<Json<PlannedPomodoro>, HttpError> {
    run_write(&app_state, &user_id, "edit_planned", |root| {
        focusdesk_api::edit_planned(root, req)
    })
    .await
}

/// Handler for POST `/api/pomodoro/deletePlanned`.
///
/// Responds with the remaining plan, or `null` once it is exhausted.
async fn handle_delete_planned(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    JsonBody(req): JsonBody<DeleteRequest>,
) -> Result<Json<Option<PlannedPomodoro>>, HttpError> {
    run_write(&app_state, &user_id, "delete_planned", |root| {
        focusdesk_api::delete_planned(root, &req)
    })
    .await
}

/// Handler for POST `/api/pomodoro/markDone`.
async fn handle_mark_done(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    JsonBody(req): JsonBody<MarkDoneRequest>,
) -> Result<Json<DonePomodoro>, HttpError> {
    run_write(&app_state, &user_id, "mark_done", |root| {
        focusdesk_api::mark_done(root, &req)
    })
    .await
}

/// Handler for POST `/api/pomodoro/editDone`.
async fn handle_edit_done(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    JsonBody(req): JsonBody<EditDoneRequest>,
) -> Result<Json<DonePomodoro>, HttpError> {
    run_write(&app_state, &user_id, "edit_done", |root| {
        focusdesk_api::edit_done(root, req)
    })
    .await
}

/// Handler for POST `/api/pomodoro/deleteDone`.
async fn handle_delete_done(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    JsonBody(req): JsonBody<DeleteRequest>,
) -> Result<Json<DonePomodoro>, HttpError> {
    run_write(&app_state, &user_id, "delete_done", |root| {
        focusdesk_api::delete_done(root, &req)
    })
    .await
}

/// Handler for POST `/api/pomodoro/reset`.
async fn handle_reset_pomodoros(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<ResetResponse>, HttpError> {
    run_write(&app_state, &user_id, "reset_pomodoros", |root| {
        Ok(focusdesk_api::reset_pomodoros(root))
    })
    .await
}

// ---------------------------------------------------------------------------
// Tracker
// ---------------------------------------------------------------------------

/// Handler for GET `/api/tracker/tasks`.
async fn handle_list_tasks(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<TaskView>>, HttpError> {
    run_read(&app_state, &user_id, |root| Ok(focusdesk_api::list_tasks(root))).await
}

/// Handler for GET `/api/tracker/categories`.
async fn handle_list_categories(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<Category>>, HttpError> {
    run_read(&app_state, &user_id, |root| {
        Ok(focusdesk_api::list_categories(root))
    })
    .await
}

/// Handler for GET `/api/tracker/tasksByMonths`.
///
/// Without `year` and `month` the history walks back from the current UTC
/// month.
async fn handle_tasks_by_months(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    Query(query): Query<TasksByMonthsQuery>,
) -> Result<Json<TaskHistory>, HttpError> {
    let today: time::Date = OffsetDateTime::now_utc().date();
    run_read(&app_state, &user_id, |root| {
        focusdesk_api::tasks_by_months(root, &query, today)
    })
    .await
}

/// Handler for POST `/api/tracker/addTask`.
async fn handle_add_task(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    JsonBody(req): JsonBody<AddTaskRequest>,
) -> Result<Json<TaskView>, HttpError> {
    run_write(&app_state, &user_id, "add_task", |root| {
        focusdesk_api::add_task(root, &req)
    })
    .await
}

/// Handler for POST `/api/tracker/editTask`.
async fn handle_edit_task(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    JsonBody(req): JsonBody<EditTaskRequest>,
) -> Result<Json<TaskView>, HttpError> {
    run_write(&app_state, &user_id, "edit_task", |root| {
        focusdesk_api::edit_task(root, &req)
    })
    .await
}

/// Handler for POST `/api/tracker/deleteTask`.
async fn handle_delete_task(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    JsonBody(req): JsonBody<DeleteRequest>,
) -> Result<Json<TaskView>, HttpError> {
    run_write(&app_state, &user_id, "delete_task", |root| {
        focusdesk_api::delete_task(root, &req)
    })
    .await
}

/// Handler for POST `/api/tracker/createCategory`.
async fn handle_create_category(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    JsonBody(req): JsonBody<CreateCategoryRequest>,
) -> Result<Json<Category>, HttpError> {
    run_write(&app_state, &user_id, "create_category", |root| {
        focusdesk_api::create_category(root, &req)
    })
    .await
}

/// Handler for POST `/api/tracker/editCategory`.
async fn handle_edit_category(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    JsonBody(req): JsonBody<EditCategoryRequest>,
) -> Result<Json<Category>, HttpError> {
    run_write(&app_state, &user_id, "edit_category", |root| {
        focusdesk_api::edit_category(root, req)
    })
    .await
}

/// Handler for POST `/api/tracker/deleteCategory`.
///
/// Every task tracked against the category is deleted with it.
async fn handle_delete_category(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
    JsonBody(req): JsonBody<DeleteRequest>,
) -> Result<Json<Category>, HttpError> {
    run_write(&app_state, &user_id, "delete_category", |root| {
        focusdesk_api::delete_category(root, &req)
    })
    .await
}

/// Handler for POST `/api/tracker/reset`.
async fn handle_reset_tracker(
    AxumState(app_state): AxumState<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<ResetResponse>, HttpError> {
    run_write(&app_state, &user_id, "reset_tracker", |root| {
        Ok(focusdesk_api::reset_tracker(root))
    })
    .await
}

fn build_router(app_state: AppState) -> Router {
    let todo: Router<AppState> = Router::new()
        .route("/todos", get(handle_list_todos))
        .route("/groups", get(handle_list_groups))
        .route("/createTodo", post(handle_create_todo))
        .route("/editTodo", post(handle_edit_todo))
        .route("/deleteTodo", post(handle_delete_todo))
        .route("/createGroup", post(handle_create_group))
        .route("/editGroup", post(handle_edit_group))
        .route("/deleteGroup", post(handle_delete_group))
        .route("/reset", post(handle_reset_checklist));

    let pomodoro: Router<AppState> = Router::new()
        .route("/pomodoros", get(handle_list_pomodoros))
        .route("/createPlanned", post(handle_create_planned))
        .route("/editPlanned", post(handle_edit_planned))
        .route("/deletePlanned", post(handle_delete_planned))
        .route("/markDone", post(handle_mark_done))
        .route("/editDone", post(handle_edit_done))
        .route("/deleteDone", post(handle_delete_done))
        .route("/reset", post(handle_reset_pomodoros));

    let tracker: Router<AppState> = Router::new()
        .route("/tasks", get(handle_list_tasks))
        .route("/categories", get(handle_list_categories))
        .route("/tasksByMonths", get(handle_tasks_by_months))
        .route("/addTask", post(handle_add_task))
        .route("/editTask", post(handle_edit_task))
        .route("/deleteTask", post(handle_delete_task))
        .route("/createCategory", post(handle_create_category))
        .route("/editCategory", post(handle_edit_category))
        .route("/deleteCategory", post(handle_delete_category))
        .route("/reset", post(handle_reset_tracker));

    Router::new()
        .nest("/api/todo", todo)
        .nest("/api/pomodoro", pomodoro)
        .nest("/api/tracker", tracker)
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing focusdesk server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
