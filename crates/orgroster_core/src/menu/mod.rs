//! Interactive menu session.
//!
//! # Responsibility
//! - Present the fixed action menu and block on the user's choice.
//! - Run exactly one service call per chosen action.
//! - Recover from every action failure and return to the menu.
//!
//! # Invariants
//! - Strictly sequential: one prompt or one store call at a time.
//! - Only the `Exit` action ends a healthy session.

pub mod action;
pub mod prompt;
pub mod session;

pub use action::MenuAction;
pub use prompt::{LinePrompter, PromptError, PromptResult, Prompter};
pub use session::{MenuSession, SessionError, SessionOutcome, SessionState};
