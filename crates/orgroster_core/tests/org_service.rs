use orgroster_core::db::open_db_in_memory;
use orgroster_core::{
    Department, DepartmentRepository, Employee, EmployeeChoice, EmployeeListing,
    EmployeeRepository, NewDepartment, NewEmployee, NewRole, OrgError, OrgService, RepoResult,
    Role, RoleListing, RoleRepository, ValidationError,
};
use std::cell::Cell;
use std::rc::Rc;

/// Repository fake that counts every store call and answers with fixed rows.
#[derive(Clone, Default)]
struct CountingStore {
    calls: Rc<Cell<usize>>,
}

impl CountingStore {
    fn hit(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl DepartmentRepository for CountingStore {
    fn list_departments(&self) -> RepoResult<Vec<Department>> {
        self.hit();
        Ok(Vec::new())
    }

    fn reconcile_identity(&self) -> RepoResult<i64> {
        self.hit();
        Ok(0)
    }

    fn insert_department(&self, department: &NewDepartment) -> RepoResult<Department> {
        self.hit();
        Ok(Department {
            id: 1,
            name: department.name.clone(),
        })
    }
}

impl RoleRepository for CountingStore {
    fn list_roles(&self) -> RepoResult<Vec<RoleListing>> {
        self.hit();
        Ok(Vec::new())
    }

    fn insert_role(&self, role: &NewRole) -> RepoResult<Role> {
        self.hit();
        Ok(Role {
            id: 1,
            title: role.title.clone(),
            salary: role.salary,
            department_id: role.department_id,
        })
    }

    fn role_exists(&self, _id: i64) -> RepoResult<bool> {
        self.hit();
        Ok(false)
    }
}

impl EmployeeRepository for CountingStore {
    fn list_employees(&self) -> RepoResult<Vec<EmployeeListing>> {
        self.hit();
        Ok(Vec::new())
    }

    fn list_employee_choices(&self) -> RepoResult<Vec<EmployeeChoice>> {
        self.hit();
        Ok(Vec::new())
    }

    fn insert_employee(&self, employee: &NewEmployee) -> RepoResult<Employee> {
        self.hit();
        Ok(Employee {
            id: 1,
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            role_id: employee.role_id,
            manager_id: employee.manager_id,
        })
    }

    fn update_employee_role(&self, employee_id: i64, role_id: i64) -> RepoResult<Employee> {
        self.hit();
        Ok(Employee {
            id: employee_id,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role_id,
            manager_id: None,
        })
    }
}

fn counting_service() -> (
    CountingStore,
    OrgService<CountingStore, CountingStore, CountingStore>,
) {
    let store = CountingStore::default();
    let service = OrgService::new(store.clone(), store.clone(), store.clone());
    (store, service)
}

fn role_id_of(conn: &rusqlite::Connection, title: &str) -> i64 {
    conn.query_row("SELECT id FROM role WHERE title = ?1;", [title], |row| {
        row.get(0)
    })
    .unwrap()
}

#[test]
fn blank_department_name_issues_no_store_call() {
    let (store, service) = counting_service();

    for name in ["", "   ", "\t\n"] {
        let err = service.add_department(name).unwrap_err();
        assert!(matches!(
            err,
            OrgError::Validation(ValidationError::MissingField("name"))
        ));
    }
    assert_eq!(store.calls(), 0);
}

#[test]
fn add_department_reconciles_then_inserts() {
    let (store, service) = counting_service();

    let created = service.add_department("  Engineering ").unwrap();
    assert_eq!(created.name, "Engineering");
    assert_eq!(store.calls(), 2);
}

#[test]
fn add_role_and_employee_skip_reconciliation() {
    let (store, service) = counting_service();

    service.add_role("Engineer", "90000", "1").unwrap();
    service.add_employee("Ada", "Lovelace", "1", "").unwrap();
    assert_eq!(store.calls(), 2);
}

#[test]
fn add_role_rejects_missing_or_non_numeric_fields_without_store_call() {
    let (store, service) = counting_service();

    assert!(matches!(
        service.add_role("", "90000", "1"),
        Err(OrgError::Validation(ValidationError::MissingField("title")))
    ));
    assert!(matches!(
        service.add_role("Engineer", " ", "1"),
        Err(OrgError::Validation(ValidationError::MissingField("salary")))
    ));
    assert!(matches!(
        service.add_role("Engineer", "a lot", "1"),
        Err(OrgError::Validation(ValidationError::NotNumeric { field: "salary", .. }))
    ));
    assert!(matches!(
        service.add_role("Engineer", "90000", ""),
        Err(OrgError::Validation(ValidationError::MissingField("department_id")))
    ));
    assert_eq!(store.calls(), 0);
}

#[test]
fn add_employee_normalizes_blank_manager_to_none() {
    let (_store, service) = counting_service();

    for blank in ["", "   "] {
        let created = service.add_employee("Ada", "Lovelace", "3", blank).unwrap();
        assert_eq!(created.manager_id, None);
    }
    let managed = service.add_employee("Ada", "Lovelace", "3", " 17 ").unwrap();
    assert_eq!(managed.manager_id, Some(17));
    assert_eq!(managed.role_id, 3);
}

#[test]
fn add_employee_requires_names_and_role() {
    let (store, service) = counting_service();

    assert!(matches!(
        service.add_employee(" ", "Lovelace", "1", ""),
        Err(OrgError::Validation(ValidationError::MissingField("first_name")))
    ));
    assert!(matches!(
        service.add_employee("Ada", "", "1", ""),
        Err(OrgError::Validation(ValidationError::MissingField("last_name")))
    ));
    assert!(matches!(
        service.add_employee("Ada", "Lovelace", "", ""),
        Err(OrgError::Validation(ValidationError::MissingField("role_id")))
    ));
    assert!(matches!(
        service.add_employee("Ada", "Lovelace", "1", "boss"),
        Err(OrgError::Validation(ValidationError::NotNumeric { field: "manager_id", .. }))
    ));
    assert_eq!(store.calls(), 0);
}

#[test]
fn update_role_with_non_numeric_role_is_validation_error() {
    let (store, service) = counting_service();

    assert!(matches!(
        service.update_employee_role(1, "senior"),
        Err(OrgError::Validation(ValidationError::NotNumeric { field: "role_id", .. }))
    ));
    assert_eq!(store.calls(), 0);
}

#[test]
fn update_role_with_unknown_role_never_reaches_employee_update() {
    let (store, service) = counting_service();

    let err = service.update_employee_role(1, "99").unwrap_err();
    assert!(matches!(err, OrgError::RoleNotFound(99)));
    assert_eq!(err.to_string(), "role not found: 99");
    assert_eq!(store.calls(), 1);
}

#[test]
fn unknown_role_leaves_employee_row_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let service = OrgService::sqlite(&conn);
    let department = service.add_department("Engineering").unwrap();
    let role = service
        .add_role("Engineer", "90000", &department.id.to_string())
        .unwrap();
    let employee = service
        .add_employee("Ada", "Lovelace", &role.id.to_string(), "")
        .unwrap();

    let err = service
        .update_employee_role(employee.id, &(role.id + 100).to_string())
        .unwrap_err();
    assert!(matches!(err, OrgError::RoleNotFound(_)));

    let stored_role: i64 = conn
        .query_row(
            "SELECT role_id FROM employee WHERE id = ?1;",
            [employee.id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(stored_role, role.id);
}

#[test]
fn updating_missing_employee_reports_employee_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = OrgService::sqlite(&conn);
    let department = service.add_department("Engineering").unwrap();
    let role = service
        .add_role("Engineer", "90000", &department.id.to_string())
        .unwrap();

    let err = service
        .update_employee_role(999_999, &role.id.to_string())
        .unwrap_err();
    assert!(matches!(err, OrgError::EmployeeNotFound(999_999)));
    assert_eq!(err.to_string(), "employee not found: 999999");

    let employee_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM employee;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(employee_count, 0);
}

#[test]
fn dangling_department_surfaces_as_store_error() {
    let conn = open_db_in_memory().unwrap();
    let service = OrgService::sqlite(&conn);

    let err = service.add_role("Engineer", "90000", "12").unwrap_err();
    assert!(matches!(
        err,
        OrgError::Store {
            operation: "add_role",
            ..
        }
    ));
}

#[test]
fn engineering_roster_end_to_end() {
    let conn = open_db_in_memory().unwrap();
    let service = OrgService::sqlite(&conn);

    let department = service.add_department("Engineering").unwrap();
    assert_eq!(department.name, "Engineering");
    assert!(department.id > 0);

    let role = service
        .add_role("Engineer", "90000", &department.id.to_string())
        .unwrap();
    assert_eq!(role.department_id, department.id);
    assert_eq!(role.salary, 90000.0);

    let employee = service
        .add_employee("Ada", "Lovelace", &role.id.to_string(), "")
        .unwrap();
    assert_eq!(employee.manager_id, None);

    let employees = service.view_employees().unwrap();
    let ada = employees
        .iter()
        .find(|listing| listing.id == employee.id)
        .unwrap();
    assert_eq!(ada.job_title.as_deref(), Some("Engineer"));
    assert_eq!(ada.department.as_deref(), Some("Engineering"));
    assert_eq!(ada.manager_first_name, None);

    let roles = service.view_roles().unwrap();
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].department, "Engineering");
}

#[test]
fn department_insert_after_seed_does_not_collide() {
    let mut conn = open_db_in_memory().unwrap();
    orgroster_core::db::seed::apply_demo_seed(&mut conn).unwrap();
    conn.execute(
        "UPDATE sqlite_sequence SET seq = 0 WHERE name = 'department';",
        [],
    )
    .unwrap();

    let service = OrgService::sqlite(&conn);
    let created = service.add_department("Research").unwrap();
    assert_eq!(created.id, 5);

    let lead = role_id_of(&conn, "Lead Engineer");
    let kevin = service
        .employee_choices()
        .unwrap()
        .into_iter()
        .find(|choice| choice.label() == "Kevin Tupik")
        .unwrap();
    let updated = service
        .update_employee_role(kevin.id, &lead.to_string())
        .unwrap();
    assert_eq!(updated.role_id, lead);
}
