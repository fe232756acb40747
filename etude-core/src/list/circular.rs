use std::cell::RefCell;
use std::rc::Rc;

type Link<T> = Rc<RefCell<Node<T>>>;

struct Node<T> {
    value: T,
    next: Option<Link<T>>,
}

fn next_of<T>(node: &Link<T>) -> Link<T> {
    match &node.borrow().next {
        Some(n) => Rc::clone(n),
        None => panic!("circular list ring broken"),
    }
}

/// Circular singly linked list: the last node points back at the head,
/// and a single node points at itself. Only the head is stored, so
/// operations at the back walk the ring.
pub struct CircularList<T> {
    head: Option<Link<T>>,
    len: usize,
}

impl<T> CircularList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn push_front(&mut self, value: T) {
        let node = self.splice_before_head(value);
        self.head = Some(node);
    }

    pub fn push_back(&mut self, value: T) {
        self.splice_before_head(value);
    }

    // The new node always lands between the last node and the head;
    // whether it becomes the new head is up to the caller.
    fn splice_before_head(&mut self, value: T) -> Link<T> {
        let node = Rc::new(RefCell::new(Node { value, next: None }));
        match self.head.clone() {
            None => {
                node.borrow_mut().next = Some(Rc::clone(&node));
                self.head = Some(Rc::clone(&node));
            }
            Some(head) => {
                let last = self.last();
                node.borrow_mut().next = Some(head);
                last.borrow_mut().next = Some(Rc::clone(&node));
            }
        }
        self.len += 1;
        node
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head.take()?;
        let next = head.borrow_mut().next.take();
        match next {
            Some(n) if Rc::ptr_eq(&n, &head) => {
                // Single node; taking its next already broke the cycle.
            }
            Some(n) => {
                let mut last = Rc::clone(&n);
                while !Rc::ptr_eq(&next_of(&last), &head) {
                    last = next_of(&last);
                }
                last.borrow_mut().next = Some(Rc::clone(&n));
                self.head = Some(n);
            }
            None => panic!("circular list ring broken"),
        }
        self.len -= 1;
        Some(super::into_inner(head).value)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let head = self.head.clone()?;
        if Rc::ptr_eq(&next_of(&head), &head) {
            // Single node; let pop_front unwrap it without this extra
            // reference still live.
            drop(head);
            return self.pop_front();
        }
        let mut before = Rc::clone(&head);
        while !Rc::ptr_eq(&next_of(&next_of(&before)), &head) {
            before = next_of(&before);
        }
        let tail = next_of(&before);
        before.borrow_mut().next = Some(head);
        self.len -= 1;
        Some(super::into_inner(tail).value)
    }

    fn last(&self) -> Link<T> {
        match &self.head {
            Some(head) => {
                let mut cur = Rc::clone(head);
                while !Rc::ptr_eq(&next_of(&cur), head) {
                    cur = next_of(&cur);
                }
                cur
            }
            None => panic!("last node of an empty list"),
        }
    }
}

impl<T: Clone> CircularList<T> {
    pub fn front(&self) -> Option<T> {
        self.head.as_ref().map(|n| n.borrow().value.clone())
    }

    pub fn back(&self) -> Option<T> {
        if self.head.is_some() {
            Some(self.last().borrow().value.clone())
        } else {
            None
        }
    }

    /// One full turn of the ring starting at the head.
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        if let Some(head) = &self.head {
            let mut cur = Rc::clone(head);
            loop {
                out.push(cur.borrow().value.clone());
                let next = next_of(&cur);
                if Rc::ptr_eq(&next, head) {
                    break;
                }
                cur = next;
            }
        }
        out
    }
}

impl<T> Drop for CircularList<T> {
    // Break the ring first, then unlink node by node; the reference
    // cycle would otherwise leak every node.
    fn drop(&mut self) {
        let mut cur = match self.head.take() {
            Some(head) => head.borrow_mut().next.take(),
            None => None,
        };
        while let Some(node) = cur {
            cur = node.borrow_mut().next.take();
        }
    }
}
