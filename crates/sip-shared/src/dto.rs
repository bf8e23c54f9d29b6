//! Data Transfer Objects - request/response types for the APIs.
//!
//! Request fields are optional where the browser may omit them; handlers
//! decide which absences are errors.

use serde::{Deserialize, Deserializer, Serialize};

// ---- calculator ----

/// Body of `POST /api/history`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryRequest {
    pub expression: Option<String>,
    /// A number, or an error string such as `"Error"`.
    pub result: Option<serde_json::Value>,
}

/// Body of `POST /api/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub a: f64,
    pub b: f64,
    pub op: String,
}

/// Body of `POST /api/evaluate`: key presses replayed on a fresh keypad.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    pub keys: Vec<String>,
}

// ---- todo ----

/// Query string of `GET /api/tasks`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskQuery {
    pub filter: Option<String>,
}

/// Body of `POST /api/tasks`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub due_date: Option<String>,
    pub due_time: Option<String>,
}

/// Body of `PATCH /api/tasks/{id}`.
///
/// For the due fields an absent key leaves the value alone while an
/// explicit `null` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub done: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    pub due_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub due_time: Option<Option<String>>,
}

/// Distinguishes `"key": null` (`Some(None)`) from a missing key (`None`,
/// via `#[serde(default)]`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ---- auth ----

/// Body of `POST /api/register`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

/// Body of `POST /api/login`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response of `GET /api/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}
