use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Operand stack
///
/// The back of the vector is the top of the stack.

#[derive(Clone, PartialEq)]
pub struct Stack<T> {
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Stack<T> {
        Stack::new()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(vec: Vec<T>) -> Stack<T> {
        Stack { vec }
    }
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack { vec: vec![] }
    }
    fn underflow_error(&self) -> Error {
        error!(EmptyStack)
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }
    pub fn push(&mut self, val: T) {
        self.vec.push(val);
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
    /// Pops two items and returns them in stack order: `(left, right)`.
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        if self.vec.len() < 2 {
            return Err(self.underflow_error());
        }
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
    /// Discards the top `n` items. Fails without touching the stack
    /// if there are fewer than `n`.
    pub fn drop_n(&mut self, n: usize) -> Result<()> {
        if n > self.vec.len() {
            return Err(error!(EmptyStack; format!(
                "There should be at least {} value(s) in stack to drop",
                n
            )));
        }
        self.vec.truncate(self.vec.len() - n);
        Ok(())
    }
    /// Cyclic rotation of the whole stack. Positive `n` moves the top
    /// item to the bottom; negative `n` moves the bottom item to the top.
    pub fn rotate(&mut self, n: i64) {
        let len = self.vec.len();
        if len == 0 {
            return;
        }
        let shift = n.rem_euclid(len as i64) as usize;
        self.vec.rotate_right(shift);
    }
    /// Exact inverse of `rotate`.
    pub fn rotate_down(&mut self, n: i64) {
        let len = self.vec.len();
        if len == 0 {
            return;
        }
        let shift = n.rem_euclid(len as i64) as usize;
        self.vec.rotate_left(shift);
    }
    /// Moves the `n`th item, counted from 1 at the top, to the top.
    /// Past the bottom of the stack this does nothing.
    pub fn pick(&mut self, n: usize) -> Result<()> {
        if n < 1 {
            return Err(error!(InvalidCount; "Item to pick should be > 0"));
        }
        if n > self.vec.len() {
            return Ok(());
        }
        let item = self.vec.remove(self.vec.len() - n);
        self.vec.push(item);
        Ok(())
    }
}

impl<T: Clone> Stack<T> {
    /// Pushes a second copy of the top `n` items in their original order.
    pub fn duplicate(&mut self, n: usize) -> Result<()> {
        if n > self.vec.len() {
            return Err(error!(InsufficientDepth; format!(
                "There should be at least {} value(s) in stack to duplicate",
                n
            )));
        }
        if n < 1 {
            return Err(error!(InvalidCount; "Number of items to duplicate should be > 0"));
        }
        self.vec.extend_from_within(self.vec.len() - n..);
        Ok(())
    }
}
