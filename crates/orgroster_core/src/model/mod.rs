//! Roster domain model.
//!
//! # Responsibility
//! - Define the persisted row shapes for departments, roles and employees.
//! - Define the joined read models shown by the view actions.
//! - Validate write requests before they reach storage.
//!
//! # Invariants
//! - Ids are store-assigned integers; the core never invents them.
//! - An employee without a manager carries `manager_id = None`, never `0`.

pub mod department;
pub mod employee;
pub mod role;
pub mod validation;
