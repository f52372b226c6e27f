use crate::employee::{Employee, EmployeeId};
use crate::store::EmployeeStore;
use std::{
    cmp::{max, Ordering},
    fmt::{self, Display, Formatter},
    mem,
};

type Link = Option<Box<Node>>;

/// Unbalanced binary search tree keyed by employee id.
///
/// Nothing rebalances the tree: inserting ids in sorted order degrades it to a
/// chain of right children. Clone, drop and height walk the tree with an
/// explicit stack so such chains do not exhaust the call stack.
pub struct BinaryTree {
    root: Link,
    count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Dir {
    Left,
    Eq,
    Right,
}

struct Node {
    employee: Employee,
    left: Link,
    right: Link,
}

impl Node {
    fn new(employee: Employee) -> Node {
        Node {
            employee,
            left: None,
            right: None,
        }
    }

    /// get the direction to follow from the node to reach the id
    fn dir(&self, id: &EmployeeId) -> Dir {
        match id.cmp(&self.employee.id()) {
            Ordering::Less => Dir::Left,
            Ordering::Equal => Dir::Eq,
            Ordering::Greater => Dir::Right,
        }
    }

    /// get the mutable reference of the child of the node by dir
    fn child_mut(&mut self, dir: Dir) -> &mut Link {
        match dir {
            Dir::Left => &mut self.left,
            Dir::Right => &mut self.right,
            Dir::Eq => panic!("There is no 'Eq' child"),
        }
    }

    fn height(root: &Link) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> =
            root.as_deref().map(|node| (node, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            height = max(height, depth);

            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }

            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
        }

        height
    }

    /// detach the rightmost node of the non-empty subtree
    ///
    /// The detached node is replaced by its left child.
    fn detach_max(link: &mut Link) -> Box<Node> {
        let mut current = link;

        while current.as_ref().map_or(false, |node| node.right.is_some()) {
            current = &mut current.as_mut().unwrap().right;
        }

        let mut max = current.take().unwrap();
        *current = max.left.take();

        max
    }
}

impl BinaryTree {
    pub fn new() -> BinaryTree {
        BinaryTree {
            root: None,
            count: 0,
        }
    }

    /// Length of the longest root-to-leaf path. An empty tree has height 0.
    pub fn height(&self) -> usize {
        Node::height(&self.root)
    }

    /// Return the link that holds `id`, or the empty link where it would be attached.
    fn seek(&mut self, id: &EmployeeId) -> &mut Link {
        let mut current = &mut self.root;

        loop {
            let dir = match current.as_ref() {
                Some(node) => node.dir(id),
                None => return current,
            };

            if dir == Dir::Eq {
                return current;
            }

            current = current.as_mut().unwrap().child_mut(dir);
        }
    }

    #[cfg(test)]
    fn assert_ordered(&self) {
        let employees = self.employees();
        assert_eq!(employees.len(), self.count);

        for pair in employees.windows(2) {
            assert!(pair[0].id() < pair[1].id());
        }
    }
}

impl Default for BinaryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeStore for BinaryTree {
    fn insert(&mut self, employee: Employee) -> Result<(), Employee> {
        let id = employee.id();
        let link = self.seek(&id);

        if link.is_some() {
            log::trace!("binary tree: reject duplicate {}", id);
            return Err(employee);
        }

        *link = Some(Box::new(Node::new(employee)));

        self.count = self
            .count
            .checked_add(1)
            .expect("binary tree: employee count overflow");
        log::trace!("binary tree: inserted {}", id);

        Ok(())
    }

    fn find(&self, id: &EmployeeId) -> Option<&Employee> {
        let mut current = &self.root;

        while let Some(node) = current {
            current = match node.dir(id) {
                Dir::Left => &node.left,
                Dir::Right => &node.right,
                Dir::Eq => return Some(&node.employee),
            };
        }

        None
    }

    fn find_mut(&mut self, id: &EmployeeId) -> Option<&mut Employee> {
        self.seek(id).as_mut().map(|node| &mut node.employee)
    }

    fn delete(&mut self, id: &EmployeeId) -> Result<Employee, ()> {
        let link = self.seek(id);

        let node = match link.as_mut() {
            Some(node) => node,
            None => return Err(()),
        };

        let removed = match (node.left.is_some(), node.right.is_some()) {
            // leaf
            (false, false) => link.take().unwrap().employee,
            // only right child
            (false, true) => {
                let mut node = link.take().unwrap();
                *link = node.right.take();
                node.employee
            }
            // left child without right grandchild takes the place
            (true, _) if node.left.as_ref().unwrap().right.is_none() => {
                let mut node = link.take().unwrap();
                let mut left = node.left.take().unwrap();
                left.right = node.right.take();
                *link = Some(left);
                node.employee
            }
            // in-order predecessor's record moves into this node
            (true, _) => {
                let predecessor = Node::detach_max(&mut node.left.as_mut().unwrap().right);
                mem::replace(&mut node.employee, predecessor.employee)
            }
        };

        self.count -= 1;
        log::trace!("binary tree: deleted {}", id);

        Ok(removed)
    }

    fn len(&self) -> usize {
        self.count
    }

    // in-order traversal with an explicit stack
    fn employees(&self) -> Vec<&Employee> {
        let mut result = Vec::with_capacity(self.count);
        let mut stack: Vec<&Node> = Vec::new();
        let mut current = self.root.as_deref();

        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }

            match stack.pop() {
                Some(node) => {
                    result.push(&node.employee);
                    current = node.right.as_deref();
                }
                None => break,
            }
        }

        result
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl Clone for BinaryTree {
    fn clone(&self) -> Self {
        let mut tree = BinaryTree::new();
        let mut stack: Vec<(&Node, &mut Link)> = Vec::new();

        if let Some(root) = self.root.as_deref() {
            stack.push((root, &mut tree.root));
        }

        while let Some((source, target)) = stack.pop() {
            *target = Some(Box::new(Node::new(source.employee.clone())));

            let Node { left, right, .. } = &mut **target.as_mut().unwrap();

            if let Some(child) = source.left.as_deref() {
                stack.push((child, left));
            }

            if let Some(child) = source.right.as_deref() {
                stack.push((child, right));
            }
        }

        tree.count = self.count;
        tree
    }
}

impl Drop for BinaryTree {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();

        // detach the children first, so every node drops as a leaf
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl Display for BinaryTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ascending())
    }
}
