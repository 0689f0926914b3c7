//! Fixed-capacity stack.
//!
//! The parse driver never recurses on the call stack; nesting depth is bounded
//! by the capacity of these stacks instead. Pushing onto a full stack is an
//! error, not a reallocation.

/// Errors from [`Stack`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    #[error("stack is full (capacity {capacity})")]
    Full { capacity: usize },

    #[error("stack is empty")]
    Empty,
}

/// Last-in-first-out container with inline storage for `N` items.
#[derive(Clone)]
pub struct Stack<T, const N: usize> {
    items: [T; N],
    len: usize,
}

impl<T: Copy + Default, const N: usize> Stack<T, N> {
    pub fn new() -> Self {
        Self {
            items: [T::default(); N],
            len: 0,
        }
    }

    /// Push an item, failing with [`StackError::Full`] at capacity.
    pub fn push(&mut self, item: T) -> Result<(), StackError> {
        let Some(slot) = self.items.get_mut(self.len) else {
            return Err(StackError::Full { capacity: N });
        };
        *slot = item;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the top item.
    pub fn pop(&mut self) -> Result<T, StackError> {
        if self.len == 0 {
            return Err(StackError::Empty);
        }
        self.len -= 1;
        Ok(self.items[self.len])
    }

    pub fn top(&self) -> Result<&T, StackError> {
        self.as_slice().last().ok_or(StackError::Empty)
    }

    pub fn top_mut(&mut self) -> Result<&mut T, StackError> {
        let len = self.len;
        self.items[..len].last_mut().ok_or(StackError::Empty)
    }

    /// Items from bottom to top.
    pub fn as_slice(&self) -> &[T] {
        &self.items[..self.len]
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl<T, const N: usize> Stack<T, N> {
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<T: Copy + Default, const N: usize> Default for Stack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default + std::fmt::Debug, const N: usize> std::fmt::Debug for Stack<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
