//! Core library for `todo`.
//!
//! Two independent pieces live here:
//! - [`TaskStore`], the in-memory task collection driven by the CLI menu.
//! - [`filter_persons`], a variant-typed filter over the [`Person`] demo records.

pub mod config;
pub mod filter;
pub mod person;
pub mod store;
pub mod task;

pub use config::{Config, ConfigError, DisplayConfig, InputConfig, LogConfig};
pub use filter::{
    filter_by_kind, filter_persons, AdminCriteria, FilterError, PersonCriteria, UserCriteria,
    Variant,
};
pub use person::{seed_persons, Admin, ParseKindError, Person, PersonKind, User};
pub use store::{SharedTaskStore, StoreError, TaskStore, ValidationError};
pub use task::{Task, TaskId};
