use std::error::Error;
use std::fmt;

/// A last-in-first-out container.
/// The most recently pushed element that has not been popped is always the next one
/// returned by [`Stack::pop`] and [`Stack::peek`].
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    #[inline]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity) }
    }

    /// Push `item` as the new top of the stack.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top of the stack.
    #[inline]
    pub fn pop(&mut self) -> Result<T, EmptyStackError> {
        self.items.pop().ok_or(EmptyStackError { op: StackOp::Pop })
    }

    /// Return the top of the stack without removing it.
    #[inline]
    pub fn peek(&self) -> Result<&T, EmptyStackError> {
        self.items.last().ok_or(EmptyStackError { op: StackOp::Peek })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Pops every element, top first.
    #[inline]
    pub fn drain_lifo(&mut self) -> DrainLifo<'_, T> {
        DrainLifo { stack: self }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    // Bottom to top, which matches the order the elements were pushed in.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter)
    }
}

pub struct DrainLifo<'a, T> {
    stack: &'a mut Stack<T>,
}

impl<T> Iterator for DrainLifo<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.stack.size();
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for DrainLifo<'_, T> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackOp {
    Pop,
    Peek,
}

impl fmt::Display for StackOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StackOp::Pop => "pop",
            StackOp::Peek => "peek",
        })
    }
}

/// Returned by [`Stack::pop`] and [`Stack::peek`] when there is no top element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStackError {
    pub op: StackOp,
}

impl fmt::Display for EmptyStackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from empty stack", self.op)
    }
}

impl Error for EmptyStackError {}
