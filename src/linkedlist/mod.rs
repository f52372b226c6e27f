use std::fmt::{self, Display, Formatter};

use crate::employee::{Employee, EmployeeId};
use crate::store::EmployeeStore;

type Link = Option<Box<Node>>;

const HEADER: &str = "|\tID\t|\t\t   Name   \t\t|  Department  |  Salary ";

// singly linked list kept in ascending id order
pub struct LinkedList {
    head: Link,
    count: usize,
}

struct Node {
    employee: Employee,
    next: Link,
}

impl Node {
    fn new(employee: Employee, next: Link) -> Node {
        Node { employee, next }
    }
}

impl LinkedList {
    pub fn new() -> LinkedList {
        LinkedList {
            head: None,
            count: 0,
        }
    }

    /// Return the link holding the first node whose id is not smaller than `id`.
    ///
    /// The link is `None` when every node has a smaller id.
    fn seek(&mut self, id: &EmployeeId) -> &mut Link {
        let mut current = &mut self.head;

        while current
            .as_ref()
            .map_or(false, |node| node.employee.id() < *id)
        {
            current = &mut current.as_mut().unwrap().next;
        }

        current
    }
}

impl Default for LinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeStore for LinkedList {
    fn insert(&mut self, employee: Employee) -> Result<(), Employee> {
        let id = employee.id();
        let link = self.seek(&id);

        if let Some(node) = link.as_ref() {
            if node.employee.id() == id {
                log::trace!("linked list: reject duplicate {}", id);
                return Err(employee);
            }
        }

        let next = link.take();
        *link = Some(Box::new(Node::new(employee, next)));

        self.count = self
            .count
            .checked_add(1)
            .expect("linked list: employee count overflow");
        log::trace!("linked list: inserted {}", id);

        Ok(())
    }

    fn find(&self, id: &EmployeeId) -> Option<&Employee> {
        let mut current = &self.head;

        while let Some(node) = current {
            if node.employee.id() == *id {
                return Some(&node.employee);
            }

            if node.employee.id() > *id {
                return None;
            }

            current = &node.next;
        }

        None
    }

    fn find_mut(&mut self, id: &EmployeeId) -> Option<&mut Employee> {
        match self.seek(id) {
            Some(node) if node.employee.id() == *id => Some(&mut node.employee),
            _ => None,
        }
    }

    fn delete(&mut self, id: &EmployeeId) -> Result<Employee, ()> {
        let link = self.seek(id);

        match link.as_ref() {
            Some(node) if node.employee.id() == *id => {}
            _ => return Err(()),
        }

        let mut node = link.take().unwrap();
        *link = node.next.take();

        self.count -= 1;
        log::trace!("linked list: deleted {}", id);

        Ok(node.employee)
    }

    fn len(&self) -> usize {
        self.count
    }

    fn employees(&self) -> Vec<&Employee> {
        let mut result = Vec::with_capacity(self.count);
        let mut current = &self.head;

        while let Some(node) = current {
            result.push(&node.employee);
            current = &node.next;
        }

        result
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl Clone for LinkedList {
    // iterative, the derived one would recurse once per node
    fn clone(&self) -> Self {
        let mut list = LinkedList::new();
        let mut tail = &mut list.head;
        let mut current = &self.head;

        while let Some(node) = current {
            *tail = Some(Box::new(Node::new(node.employee.clone(), None)));
            tail = &mut tail.as_mut().unwrap().next;
            current = &node.next;
        }

        list.count = self.count;
        list
    }
}

impl Display for LinkedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", HEADER)?;
        writeln!(f, "{}", "-".repeat(70))?;
        write!(f, "{}", self.ascending())
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        let mut node = self.head.take();

        while let Some(mut inside) = node {
            node = inside.next.take();
        }
    }
}
