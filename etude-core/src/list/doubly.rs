use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Link<T> = Rc<RefCell<Node<T>>>;

struct Node<T> {
    value: T,
    prev: Weak<RefCell<Node<T>>>,
    next: Option<Link<T>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Link<T> {
        Rc::new(RefCell::new(Node {
            value,
            prev: Weak::new(),
            next: None,
        }))
    }
}

/// Doubly linked list holding only a head pointer; back pointers are
/// weak so each node is kept alive by its predecessor alone. Operations
/// at the back walk the chain.
pub struct DoublyLinkedList<T> {
    head: Option<Link<T>>,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
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
        let node = Node::new(value);
        if let Some(head) = self.head.take() {
            head.borrow_mut().prev = Rc::downgrade(&node);
            node.borrow_mut().next = Some(head);
        }
        self.head = Some(node);
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        match self.tail() {
            Some(tail) => {
                let node = Node::new(value);
                node.borrow_mut().prev = Rc::downgrade(&tail);
                tail.borrow_mut().next = Some(node);
                self.len += 1;
            }
            None => self.push_front(value),
        }
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head.take()?;
        self.head = head.borrow_mut().next.take();
        if let Some(new_head) = &self.head {
            new_head.borrow_mut().prev = Weak::new();
        }
        self.len -= 1;
        Some(super::into_inner(head).value)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail()?;
        match tail.borrow().prev.upgrade() {
            Some(prev) => {
                prev.borrow_mut().next = None;
            }
            // The tail is also the head.
            None => self.head = None,
        }
        self.len -= 1;
        Some(super::into_inner(tail).value)
    }

    fn tail(&self) -> Option<Link<T>> {
        let mut cur = self.head.clone()?;
        loop {
            let next = cur.borrow().next.clone();
            match next {
                Some(n) => cur = n,
                None => return Some(cur),
            }
        }
    }
}

impl<T: Clone> DoublyLinkedList<T> {
    pub fn front(&self) -> Option<T> {
        self.head.as_ref().map(|n| n.borrow().value.clone())
    }

    pub fn back(&self) -> Option<T> {
        self.tail().map(|n| n.borrow().value.clone())
    }

    /// Front-to-back snapshot of the values.
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        let mut cur = self.head.clone();
        while let Some(node) = cur {
            out.push(node.borrow().value.clone());
            cur = node.borrow().next.clone();
        }
        out
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    // Unlink left to right so long lists drop iteratively instead of
    // recursing once per node.
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(node) = cur {
            cur = node.borrow_mut().next.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_front_orders_newest_first() {
        let mut list = DoublyLinkedList::new();
        list.push_front(1);
        list.push_front(2);
        list.push_front(3);
        assert_eq!(list.to_vec(), vec![3, 2, 1]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_push_back_orders_oldest_first() {
        let mut list = DoublyLinkedList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_mixed_insertions() {
        let mut list = DoublyLinkedList::new();
        list.push_front(11);
        list.push_back(25);
        list.push_front(6);
        assert_eq!(list.to_vec(), vec![6, 11, 25]);
        assert_eq!(list.front(), Some(6));
        assert_eq!(list.back(), Some(25));
    }

    #[test]
    fn test_pop_front() {
        let mut list = DoublyLinkedList::new();
        list.push_back(1);
        list.push_back(2);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_pop_back() {
        let mut list = DoublyLinkedList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), Some(1));
        assert_eq!(list.pop_back(), None);
    }

    #[test]
    fn test_pop_single_element_from_either_end() {
        let mut list = DoublyLinkedList::new();
        list.push_front(9);
        assert_eq!(list.pop_back(), Some(9));
        assert!(list.is_empty());
        list.push_back(8);
        assert_eq!(list.pop_front(), Some(8));
        assert!(list.is_empty());
    }

    #[test]
    fn test_prev_links_rewire_after_pop_front() {
        let mut list = DoublyLinkedList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        list.pop_front();
        // Popping the new back exercises the rewired prev pointer.
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.to_vec(), vec![2]);
    }

    #[test]
    fn test_long_list_drops_without_overflow() {
        let mut list = DoublyLinkedList::new();
        for i in 0..100_000 {
            list.push_front(i);
        }
        drop(list);
    }

    #[test]
    fn test_empty_list_accessors() {
        let list: DoublyLinkedList<i64> = DoublyLinkedList::new();
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.to_vec(), vec![]);
        assert_eq!(list.len(), 0);
    }
}
