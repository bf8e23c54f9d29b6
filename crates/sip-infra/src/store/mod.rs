//! JSON-file persistence.
//!
//! Each collection lives in one pretty-printed JSON array on disk. A
//! per-file mutex serializes read-modify-write cycles within the process.

mod json_file;
mod tasks;
mod users;

pub use json_file::JsonFileStore;
pub use tasks::JsonTaskRepository;
pub use users::JsonUserRepository;
