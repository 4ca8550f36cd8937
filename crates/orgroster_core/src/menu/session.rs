//! Menu state machine.
//!
//! `Idle -> Prompting -> Dispatching -> Acting | Exiting`, with `Acting`
//! returning to `Prompting` whether the action succeeded or failed.
//!
//! # Invariants
//! - Service errors are logged, reported to the user and never end the session.
//! - Prompt and output failures end the session: re-prompting cannot recover.

use super::action::MenuAction;
use super::prompt::{PromptError, Prompter};
use crate::present::{render_table, to_table_rows};
use crate::repo::department_repo::DepartmentRepository;
use crate::repo::employee_repo::EmployeeRepository;
use crate::repo::role_repo::RoleRepository;
use crate::service::org_service::{OrgError, OrgService};
use log::{error, info, warn};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};

const MAIN_MENU_MESSAGE: &str = "What would you like to do?";
const FAREWELL: &str = "Goodbye!";

/// States of the menu session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Prompting,
    Dispatching(MenuAction),
    Acting(MenuAction),
    Exiting,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user chose `Exit`.
    Exited,
}

/// Failures that end the session.
#[derive(Debug)]
pub enum SessionError {
    Prompt(PromptError),
    Output(io::Error),
    /// The prompter answered with an index outside the offered choices.
    InvalidSelection { index: usize, choices: usize },
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prompt(err) => write!(f, "{err}"),
            Self::Output(err) => write!(f, "writing session output failed: {err}"),
            Self::InvalidSelection { index, choices } => {
                write!(f, "selection {index} is out of range for {choices} choices")
            }
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Prompt(err) => Some(err),
            Self::Output(err) => Some(err),
            Self::InvalidSelection { .. } => None,
        }
    }
}

impl From<PromptError> for SessionError {
    fn from(value: PromptError) -> Self {
        Self::Prompt(value)
    }
}

impl From<io::Error> for SessionError {
    fn from(value: io::Error) -> Self {
        Self::Output(value)
    }
}

/// Failure inside one action: either recoverable or session-ending.
enum ActionError {
    Org(OrgError),
    Render(serde_json::Error),
    Session(SessionError),
}

impl From<OrgError> for ActionError {
    fn from(value: OrgError) -> Self {
        Self::Org(value)
    }
}

impl From<serde_json::Error> for ActionError {
    fn from(value: serde_json::Error) -> Self {
        Self::Render(value)
    }
}

impl From<SessionError> for ActionError {
    fn from(value: SessionError) -> Self {
        Self::Session(value)
    }
}

impl From<PromptError> for ActionError {
    fn from(value: PromptError) -> Self {
        Self::Session(SessionError::Prompt(value))
    }
}

impl From<io::Error> for ActionError {
    fn from(value: io::Error) -> Self {
        Self::Session(SessionError::Output(value))
    }
}

/// Interactive session driving an [`OrgService`] through a [`Prompter`].
pub struct MenuSession<D, R, E, P, W> {
    service: OrgService<D, R, E>,
    prompter: P,
    output: W,
}

impl<D, R, E, P, W> MenuSession<D, R, E, P, W>
where
    D: DepartmentRepository,
    R: RoleRepository,
    E: EmployeeRepository,
    P: Prompter,
    W: Write,
{
    pub fn new(service: OrgService<D, R, E>, prompter: P, output: W) -> Self {
        Self {
            service,
            prompter,
            output,
        }
    }

    /// Runs the menu until the user exits.
    ///
    /// # Errors
    /// - `SessionError` when prompting or writing output fails. Action
    ///   failures are handled inside the loop.
    pub fn run(&mut self) -> Result<SessionOutcome, SessionError> {
        let mut state = SessionState::Idle;
        loop {
            state = match state {
                SessionState::Idle => {
                    info!("event=session_start module=menu status=ok");
                    SessionState::Prompting
                }
                SessionState::Prompting => SessionState::Dispatching(self.prompt_action()?),
                SessionState::Dispatching(MenuAction::Exit) => SessionState::Exiting,
                SessionState::Dispatching(action) => SessionState::Acting(action),
                SessionState::Acting(action) => {
                    self.act(action)?;
                    SessionState::Prompting
                }
                SessionState::Exiting => {
                    writeln!(self.output, "{FAREWELL}")?;
                    self.output.flush()?;
                    info!("event=session_exit module=menu status=ok");
                    return Ok(SessionOutcome::Exited);
                }
            };
        }
    }

    fn prompt_action(&mut self) -> Result<MenuAction, SessionError> {
        let labels = MenuAction::labels();
        let index = self.prompter.select(MAIN_MENU_MESSAGE, &labels)?;
        MenuAction::from_index(index).ok_or(SessionError::InvalidSelection {
            index,
            choices: labels.len(),
        })
    }

    fn act(&mut self, action: MenuAction) -> Result<(), SessionError> {
        let result = match action {
            MenuAction::ViewDepartments => {
                let rows = self.service.view_departments();
                self.show_rows(rows)
            }
            MenuAction::ViewRoles => {
                let rows = self.service.view_roles();
                self.show_rows(rows)
            }
            MenuAction::ViewEmployees => {
                let rows = self.service.view_employees();
                self.show_rows(rows)
            }
            MenuAction::AddDepartment => self.add_department(),
            MenuAction::AddRole => self.add_role(),
            MenuAction::AddEmployee => self.add_employee(),
            MenuAction::UpdateEmployeeRole => self.update_employee_role(),
            MenuAction::Exit => Ok(()),
        };

        match result {
            Ok(()) => Ok(()),
            Err(ActionError::Session(err)) => Err(err),
            Err(ActionError::Org(err)) => {
                match &err {
                    OrgError::Store { .. } => error!(
                        "event=menu_action module=menu status=error action={} error={err}",
                        action.event_name()
                    ),
                    _ => warn!(
                        "event=menu_action module=menu status=rejected action={} error={err}",
                        action.event_name()
                    ),
                }
                writeln!(self.output, "{}", user_message(&err))?;
                Ok(())
            }
            Err(ActionError::Render(err)) => {
                error!(
                    "event=menu_action module=menu status=error action={} error_code=render_failed error={err}",
                    action.event_name()
                );
                writeln!(self.output, "Could not display results: {err}")?;
                Ok(())
            }
        }
    }

    fn show_rows<T: Serialize>(&mut self, rows: Result<Vec<T>, OrgError>) -> Result<(), ActionError> {
        let rows = to_table_rows(&rows?)?;
        write!(self.output, "{}", render_table(&rows))?;
        Ok(())
    }

    fn add_department(&mut self) -> Result<(), ActionError> {
        let name = self.prompter.input("Enter the department name:")?;
        let created = self.service.add_department(&name)?;
        writeln!(self.output, "Department added: {}", created.name)?;
        Ok(())
    }

    fn add_role(&mut self) -> Result<(), ActionError> {
        let title = self.prompter.input("Enter the role title:")?;
        let salary = self.prompter.input("Enter the salary for the role:")?;
        let department_id = self
            .prompter
            .input("Enter the department ID for this role:")?;
        let created = self.service.add_role(&title, &salary, &department_id)?;
        writeln!(self.output, "Role added: {}", created.title)?;
        Ok(())
    }

    fn add_employee(&mut self) -> Result<(), ActionError> {
        let first_name = self.prompter.input("Enter the employee's first name:")?;
        let last_name = self.prompter.input("Enter the employee's last name:")?;
        let role_id = self.prompter.input("Enter the employee's role ID:")?;
        let manager_id = self
            .prompter
            .input("Enter the employee's manager ID (optional):")?;
        let created = self
            .service
            .add_employee(&first_name, &last_name, &role_id, &manager_id)?;
        writeln!(self.output, "Employee added: {}", created.full_name())?;
        Ok(())
    }

    fn update_employee_role(&mut self) -> Result<(), ActionError> {
        writeln!(self.output, "Fetching list of employees...")?;
        let choices = self.service.employee_choices()?;
        if choices.is_empty() {
            writeln!(self.output, "No employees found.")?;
            return Ok(());
        }

        let labels = choices.iter().map(|choice| choice.label()).collect::<Vec<_>>();
        let index = self
            .prompter
            .select("Select the employee to update:", &labels)?;
        let employee = choices.get(index).ok_or(SessionError::InvalidSelection {
            index,
            choices: choices.len(),
        })?;

        let role_id = self
            .prompter
            .input("Enter the new role ID for the employee:")?;
        let updated = self.service.update_employee_role(employee.id, &role_id)?;
        writeln!(
            self.output,
            "Employee role updated: {} now has the role with ID: {}",
            updated.full_name(),
            updated.role_id
        )?;
        Ok(())
    }
}

fn user_message(err: &OrgError) -> String {
    match err {
        OrgError::Validation(err) => format!("Invalid input: {err}."),
        OrgError::RoleNotFound(_) => "Role not found. Please enter a valid role ID.".to_string(),
        OrgError::EmployeeNotFound(_) => "Employee not found.".to_string(),
        OrgError::Store { operation, source } => format!("Error during {operation}: {source}"),
    }
}
