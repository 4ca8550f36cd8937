//! Roster use-case services.
//!
//! # Responsibility
//! - Turn raw prompt input into validated write requests.
//! - Orchestrate repository calls into the menu's actions.
//! - Map repository failures onto the user-facing error taxonomy.

pub mod org_service;
