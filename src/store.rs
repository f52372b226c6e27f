use crate::employee::{Employee, EmployeeId};

pub trait EmployeeStore {
    /// Insert the employee into the store.
    ///
    /// If success, return Ok(()).
    /// If an employee with the same id exists, return Err(employee) that you tried to insert.
    fn insert(&mut self, employee: Employee) -> Result<(), Employee>;

    /// Lookup the employee with the id.
    ///
    /// If success, return the reference of the employee.
    /// If fail, return None.
    fn find(&self, id: &EmployeeId) -> Option<&Employee>;

    /// Lookup the employee with the id for in-place changes.
    ///
    /// If fail, return None.
    fn find_mut(&mut self, id: &EmployeeId) -> Option<&mut Employee>;

    /// Remove the employee with the id.
    ///
    /// If success, return Ok(employee) which is inserted before.
    /// If fail, return Err(()).
    fn delete(&mut self, id: &EmployeeId) -> Result<Employee, ()>;

    /// Number of employees in the store.
    fn len(&self) -> usize;

    /// All employees in ascending id order.
    fn employees(&self) -> Vec<&Employee>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: &EmployeeId) -> bool {
        self.find(id).is_some()
    }

    fn update_department(&mut self, id: &EmployeeId, department: &str) -> bool {
        match self.find_mut(id) {
            Some(employee) => {
                employee.set_department(department);
                true
            }
            None => false,
        }
    }

    /// Add `delta` to the current salary. A negative delta decreases it.
    fn adjust_salary(&mut self, id: &EmployeeId, delta: f64) -> bool {
        match self.find_mut(id) {
            Some(employee) => {
                employee.set_salary(employee.salary() + delta);
                true
            }
            None => false,
        }
    }

    /// One line per employee, ascending by id.
    fn ascending(&self) -> String {
        render(self.employees().into_iter())
    }

    /// One line per employee, descending by id.
    fn descending(&self) -> String {
        render(self.employees().into_iter().rev())
    }
}

fn render<'a>(employees: impl Iterator<Item = &'a Employee>) -> String {
    employees.fold(String::new(), |mut out, employee| {
        out.push_str(&employee.to_string());
        out.push('\n');
        out
    })
}
