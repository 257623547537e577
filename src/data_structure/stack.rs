use thiserror::Error;

pub type Result<T, E = EmptyStackError> = std::result::Result<T, E>;

/// Returned by [`Stack::pop`] and [`Stack::top`] when the stack has no
/// elements. Reaching this is a contract violation on the caller's side;
/// check [`Stack::is_empty`] first if emptiness is a normal case.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("Pop or top was called on an empty stack")]
pub struct EmptyStackError;

/// A LIFO container with constant-time `push`, `pop`, `top`, `len` and
/// `is_empty`. Elements are held by value in a contiguous buffer.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: vec![] }
    }

    /// Pushes `value` as the new top.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the current top.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(EmptyStackError)
    }

    /// Returns the current top without removing it.
    pub fn top(&self) -> Result<&T> {
        self.items.last().ok_or(EmptyStackError)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_simple() {
        let mut s = Stack::new();
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.len(), 3);
        assert_eq!(s.top(), Ok(&3));
        assert_eq!(s.pop(), Ok(3));
        assert_eq!(s.pop(), Ok(2));
        assert_eq!(s.len(), 1);
        assert!(!s.is_empty());
        assert_eq!(s.pop(), Ok(1));
        assert!(s.is_empty());
    }

    #[test]
    fn test_empty() {
        let mut s = Stack::<i64>::new();
        assert_eq!(s.len(), 0);
        assert!(s.is_empty());
        assert_eq!(s.pop(), Err(EmptyStackError));
        assert_eq!(s.top(), Err(EmptyStackError));
        s.push(7);
        assert_eq!(s.pop(), Ok(7));
        assert_eq!(s.pop(), Err(EmptyStackError));
    }

    #[test]
    fn test_len_tracks_pushes_and_pops() {
        let mut s = Stack::new();
        for i in 0..10 {
            s.push(i);
            assert_eq!(s.len(), i as usize + 1);
        }
        for i in (0..10).rev() {
            assert_eq!(s.pop(), Ok(i));
            assert_eq!(s.len(), i as usize);
        }
    }
}
