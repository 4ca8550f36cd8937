//! Core logic for the organization roster tool.
//! This crate owns the roster invariants: validation, foreign-key backed
//! writes, identity reconciliation and the interactive menu.

pub mod db;
pub mod logging;
pub mod menu;
pub mod model;
pub mod present;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging};
pub use menu::{
    LinePrompter, MenuAction, MenuSession, PromptError, Prompter, SessionError, SessionOutcome,
};
pub use model::department::{Department, NewDepartment};
pub use model::employee::{Employee, EmployeeChoice, EmployeeListing, NewEmployee};
pub use model::role::{NewRole, Role, RoleListing};
pub use model::validation::ValidationError;
pub use repo::department_repo::{DepartmentRepository, SqliteDepartmentRepository};
pub use repo::employee_repo::{EmployeeRepository, SqliteEmployeeRepository};
pub use repo::role_repo::{RoleRepository, SqliteRoleRepository};
pub use repo::sequence::{next_identity, reconcile_identity};
pub use repo::{RecordKind, RepoError, RepoResult};
pub use service::org_service::{OrgError, OrgResult, OrgService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
