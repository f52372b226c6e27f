use std::fmt::{self, Display, Formatter};

use crate::employee::{Employee, EmployeeId};
use crate::store::EmployeeStore;

pub const DEFAULT_TABLE_SIZE: usize = 300;

type Link = Option<Box<Node>>;

/// Separate-chaining hashtable with a fixed number of buckets.
///
/// The bucket of an employee is `id mod table_size`. New employees are pushed
/// on the head of their chain. The table never grows.
pub struct HashTable {
    buckets: Vec<Link>,
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

impl HashTable {
    pub fn new() -> HashTable {
        Self::with_table_size(DEFAULT_TABLE_SIZE)
    }

    /// Panics if `table_size` is zero.
    pub fn with_table_size(table_size: usize) -> HashTable {
        assert!(table_size > 0, "hashtable needs at least one bucket");

        HashTable {
            buckets: (0..table_size).map(|_| None).collect(),
            count: 0,
        }
    }

    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }

    pub fn bucket_index(&self, id: &EmployeeId) -> usize {
        id.value() as usize % self.buckets.len()
    }

    /// Number of employees chained in the bucket. Out of range buckets are empty.
    pub fn bucket_len(&self, index: usize) -> usize {
        let mut len = 0;
        let mut current = match self.buckets.get(index) {
            Some(link) => link,
            None => return 0,
        };

        while let Some(node) = current {
            len += 1;
            current = &node.next;
        }

        len
    }

    /// Return the link in the chain of `id` that holds it, or the chain's trailing `None`.
    fn seek(&mut self, id: &EmployeeId) -> &mut Link {
        let index = self.bucket_index(id);
        let mut current = &mut self.buckets[index];

        while current
            .as_ref()
            .map_or(false, |node| node.employee.id() != *id)
        {
            current = &mut current.as_mut().unwrap().next;
        }

        current
    }
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeStore for HashTable {
    fn insert(&mut self, employee: Employee) -> Result<(), Employee> {
        let id = employee.id();

        if self.seek(&id).is_some() {
            log::trace!("hashtable: reject duplicate {}", id);
            return Err(employee);
        }

        let index = self.bucket_index(&id);
        let head = &mut self.buckets[index];
        let next = head.take();
        *head = Some(Box::new(Node::new(employee, next)));

        self.count = self
            .count
            .checked_add(1)
            .expect("hashtable: employee count overflow");
        log::trace!("hashtable: inserted {} into bucket {}", id, index);

        Ok(())
    }

    fn find(&self, id: &EmployeeId) -> Option<&Employee> {
        let mut current = &self.buckets[self.bucket_index(id)];

        while let Some(node) = current {
            if node.employee.id() == *id {
                return Some(&node.employee);
            }

            current = &node.next;
        }

        None
    }

    fn find_mut(&mut self, id: &EmployeeId) -> Option<&mut Employee> {
        self.seek(id).as_mut().map(|node| &mut node.employee)
    }

    fn delete(&mut self, id: &EmployeeId) -> Result<Employee, ()> {
        let link = self.seek(id);

        let mut node = match link.take() {
            Some(node) => node,
            None => return Err(()),
        };
        *link = node.next.take();

        self.count -= 1;
        log::trace!("hashtable: deleted {}", id);

        Ok(node.employee)
    }

    fn len(&self) -> usize {
        self.count
    }

    // bucket order is unrelated to id order, so gather then sort
    fn employees(&self) -> Vec<&Employee> {
        let mut result = Vec::with_capacity(self.count);

        for bucket in &self.buckets {
            let mut current = bucket;

            while let Some(node) = current {
                result.push(&node.employee);
                current = &node.next;
            }
        }

        result.sort_unstable_by_key(|employee| employee.id());
        result
    }
}

impl Clone for HashTable {
    fn clone(&self) -> Self {
        let mut table = HashTable::with_table_size(self.table_size());

        for (source, target) in self.buckets.iter().zip(table.buckets.iter_mut()) {
            let mut tail = target;
            let mut current = source;

            while let Some(node) = current {
                *tail = Some(Box::new(Node::new(node.employee.clone(), None)));
                tail = &mut tail.as_mut().unwrap().next;
                current = &node.next;
            }
        }

        table.count = self.count;
        table
    }
}

impl Display for HashTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ascending())
    }
}

impl Drop for HashTable {
    fn drop(&mut self) {
        for bucket in self.buckets.iter_mut() {
            let mut node = bucket.take();

            while let Some(mut inside) = node {
                node = inside.next.take();
            }
        }
    }
}
