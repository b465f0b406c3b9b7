/// A wrapper for the dense index of an action inside an `ActionSpace`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(usize);

impl ActionId {
    /// Get the position of the action without exposing the inner value for mutation.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for ActionId {
    fn from(value: usize) -> Self {
        ActionId(value)
    }
}
