//! Domain entities and the pure logic that goes with them.

pub mod calculator;
mod history;
mod session;
mod task;
mod user;

pub use calculator::{CalcError, CalcValue, Calculator, Evaluation, Key, Operator, UnaryOp};
pub use history::{DEFAULT_HISTORY_CAPACITY, HistoryEntry, HistoryRing};
pub use session::Session;
pub use task::{Task, TaskFilter, TaskPatch, TaskStats, parse_due_date, parse_due_time};
pub use user::User;
