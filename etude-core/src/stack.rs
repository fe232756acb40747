use std::fmt;

/// Fixed-capacity LIFO stack.
///
/// Storage for `capacity` elements is allocated once at construction and
/// never grows. A push on a full stack is rejected and hands the value
/// back to the caller; pops and peeks on an empty stack report absence
/// with `None`. Every operation is O(1).
#[derive(Debug)]
pub struct Stack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Stack<T> {
    /// A stack holding at most `capacity` elements. Zero capacity is
    /// rejected since such a stack could never accept a push.
    pub fn new(capacity: usize) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError);
        }
        Ok(Self {
            items: Vec::with_capacity(capacity),
            capacity,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Push `value` on top. When the stack is full the push is rejected,
    /// the stack is left unchanged and the error carries the value back.
    pub fn push(&mut self, value: T) -> Result<(), OverflowError<T>> {
        if self.is_full() {
            return Err(OverflowError(value));
        }
        self.items.push(value);
        Ok(())
    }

    /// Remove and return the top element, `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// The most recently pushed element, without removing it.
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    /// The live elements, bottom to top.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

#[derive(Debug, PartialEq)]
pub struct CapacityError;

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CapacityError: stack capacity must be at least 1")
    }
}

/// A rejected push; the element that did not fit is handed back.
#[derive(Debug, PartialEq)]
pub struct OverflowError<T>(pub T);

impl<T> OverflowError<T> {
    pub fn into_value(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for OverflowError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "OverflowError: push on a full stack")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(capacity: usize, values: &[i64]) -> Stack<i64> {
        let mut stack = Stack::new(capacity).unwrap();
        for &v in values {
            stack.push(v).unwrap();
        }
        stack
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(Stack::<i64>::new(0).unwrap_err(), CapacityError);
        assert!(Stack::<i64>::new(1).is_ok());
    }

    #[test]
    fn test_push_pop_lifo() {
        let mut stack = filled(4, &[1, 2, 3]);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_top_does_not_remove() {
        let stack = filled(4, &[7, 8]);
        assert_eq!(stack.top(), Some(&8));
        assert_eq!(stack.top(), Some(&8));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_overflow_returns_value_and_preserves_contents() {
        let mut stack = filled(3, &[1, 2, 3]);
        assert!(stack.is_full());
        let err = stack.push(4).unwrap_err();
        assert_eq!(err.into_value(), 4);
        assert_eq!(stack.as_slice(), &[1, 2, 3]);
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn test_underflow_leaves_stack_empty() {
        let mut stack: Stack<i64> = Stack::new(2).unwrap();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.top(), None);
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_capacity_one() {
        let mut stack = Stack::new(1).unwrap();
        assert!(stack.is_empty() && !stack.is_full());
        stack.push(9).unwrap();
        assert!(stack.is_full() && !stack.is_empty());
        assert_eq!(stack.push(10).unwrap_err().into_value(), 10);
        assert_eq!(stack.pop(), Some(9));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_occupancy_counts() {
        let mut stack = Stack::new(3).unwrap();
        for (i, &v) in [5, 6, 7].iter().enumerate() {
            assert_eq!(stack.len(), i);
            stack.push(v).unwrap();
        }
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.capacity(), 3);
        stack.pop();
        assert_eq!(stack.len(), 2);
        assert!(!stack.is_full());
    }

    #[test]
    fn test_capacity_five_walkthrough() {
        let mut stack = Stack::new(5).unwrap();
        for &v in &[10, 20, 30] {
            stack.push(v).unwrap();
        }
        assert_eq!(stack.top(), Some(&30));
        assert_eq!(stack.pop(), Some(30));
        assert_eq!(stack.top(), Some(&20));
        for &v in &[40, 50, 60] {
            stack.push(v).unwrap();
        }
        assert!(stack.is_full());
        assert_eq!(stack.push(70).unwrap_err().into_value(), 70);
        assert_eq!(stack.as_slice(), &[10, 20, 40, 50, 60]);
        let mut drained = vec![];
        while let Some(v) = stack.pop() {
            drained.push(v);
        }
        assert_eq!(drained, vec![60, 50, 40, 20, 10]);
        assert!(stack.is_empty());
        assert_eq!(stack.top(), None);
    }

    #[test]
    fn test_string_elements() {
        let mut stack = Stack::new(2).unwrap();
        stack.push(String::from("a")).unwrap();
        stack.push(String::from("b")).unwrap();
        let rejected = stack.push(String::from("c")).unwrap_err().into_value();
        assert_eq!(rejected, "c");
        assert_eq!(stack.pop().as_deref(), Some("b"));
    }
}
