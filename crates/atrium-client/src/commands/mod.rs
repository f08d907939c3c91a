//! Tauri invoke command handlers.
//!
//! Each sub-module groups related commands by domain.  All public functions
//! in these modules are annotated with `#[tauri::command]` and registered
//! in the [`tauri::Builder`] invoke handler in `lib.rs`.  They are thin
//! shims over [`Portal`](crate::portal::Portal) methods, which carry all
//! the behavior and all the tests.

pub mod assignments;
pub mod community;
pub mod doubts;
pub mod resources;
pub mod session;
pub mod ui;
