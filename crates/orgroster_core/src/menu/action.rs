//! Closed set of menu actions.

/// The eight menu actions, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 8] = [
        Self::ViewDepartments,
        Self::ViewRoles,
        Self::ViewEmployees,
        Self::AddDepartment,
        Self::AddRole,
        Self::AddEmployee,
        Self::UpdateEmployeeRole,
        Self::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::ViewDepartments => "View All Departments",
            Self::ViewRoles => "View All Roles",
            Self::ViewEmployees => "View All Employees",
            Self::AddDepartment => "Add a Department",
            Self::AddRole => "Add a Role",
            Self::AddEmployee => "Add an Employee",
            Self::UpdateEmployeeRole => "Update an Employee's Role",
            Self::Exit => "Exit",
        }
    }

    /// Stable snake_case name used in log events.
    pub fn event_name(self) -> &'static str {
        match self {
            Self::ViewDepartments => "view_departments",
            Self::ViewRoles => "view_roles",
            Self::ViewEmployees => "view_employees",
            Self::AddDepartment => "add_department",
            Self::AddRole => "add_role",
            Self::AddEmployee => "add_employee",
            Self::UpdateEmployeeRole => "update_employee_role",
            Self::Exit => "exit",
        }
    }

    /// Menu labels in presentation order.
    pub fn labels() -> Vec<String> {
        Self::ALL
            .iter()
            .map(|action| action.label().to_string())
            .collect()
    }

    /// Maps a menu index back to its action.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
