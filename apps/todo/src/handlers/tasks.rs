//! Task handlers.

use actix_web::{HttpResponse, web};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use sip_core::{DomainError, RepoError};
use sip_core::domain::{Task, TaskFilter, TaskPatch, TaskStats, parse_due_date, parse_due_time};
use sip_shared::OkResponse;
use sip_shared::dto::{CreateTaskRequest, TaskQuery, UpdateTaskRequest};
use sip_web::AppResult;

use crate::state::AppState;

/// Overdue checks compare against local wall-clock time, like the page does.
fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// A task as the page shows it, with its deadline label worked out for `now`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    #[serde(flatten)]
    pub task: Task,
    pub due_label: Option<String>,
}

impl TaskView {
    pub fn new(task: Task, now: NaiveDateTime) -> Self {
        let due_label = task.due_label(now);
        Self { task, due_label }
    }
}

/// GET /api/tasks?filter=all|active|done|overdue
pub async fn list_tasks(
    state: web::Data<AppState>,
    query: web::Query<TaskQuery>,
) -> AppResult<HttpResponse> {
    let filter: TaskFilter = match query.filter.as_deref() {
        Some(raw) => raw.parse()?,
        None => TaskFilter::All,
    };

    let now = now();
    let tasks: Vec<TaskView> = filter
        .apply(state.tasks.list().await?, now)
        .into_iter()
        .map(|task| TaskView::new(task, now))
        .collect();
    Ok(HttpResponse::Ok().json(tasks))
}

/// GET /api/tasks/stats
pub async fn task_stats(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tasks = state.tasks.list().await?;
    Ok(HttpResponse::Ok().json(TaskStats::collect(&tasks, now())))
}

/// POST /api/tasks
pub async fn create_task(
    state: web::Data<AppState>,
    body: web::Json<CreateTaskRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let task = Task::new(
        req.title,
        parse_due_date(req.due_date.as_deref())?,
        parse_due_time(req.due_time.as_deref())?,
    );

    let task = state.tasks.insert(task).await?;
    tracing::info!(task_id = %task.id, "Task created");

    Ok(HttpResponse::Created().json(TaskView::new(task, now())))
}

/// PATCH /api/tasks/{id}
pub async fn update_task(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateTaskRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let patch = TaskPatch {
        title: req.title,
        done: req.done,
        due_date: req
            .due_date
            .map(|raw| parse_due_date(raw.as_deref()))
            .transpose()?,
        due_time: req
            .due_time
            .map(|raw| parse_due_time(raw.as_deref()))
            .transpose()?,
    };

    let task = match state.tasks.update(&id, patch).await {
        Err(RepoError::NotFound) => {
            return Err(DomainError::NotFound {
                entity_type: "Task",
                id,
            }
            .into());
        }
        other => other?,
    };

    Ok(HttpResponse::Ok().json(TaskView::new(task, now())))
}

/// DELETE /api/tasks/{id} - succeeds whether or not the task existed.
pub async fn delete_task(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if state.tasks.delete(&id).await? {
        tracing::info!(task_id = %id, "Task deleted");
    }
    Ok(HttpResponse::Ok().json(OkResponse::ok()))
}
