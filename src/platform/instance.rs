//! Single-instance lifecycle
//!
//! A host keeps at most one game alive. Starting is asynchronous on the web
//! (GPU setup awaits), so a second start request must be refused while the
//! first is still in flight, not just once it has finished.

#[derive(Debug)]
pub enum InstanceSlot<T> {
    Empty,
    /// A start is in progress
    Starting,
    Active(T),
}

impl<T> InstanceSlot<T> {
    pub const fn new() -> Self {
        Self::Empty
    }

    /// Claim the slot for a new start; false if a game is starting or live
    pub fn begin(&mut self) -> bool {
        if matches!(self, Self::Empty) {
            *self = Self::Starting;
            true
        } else {
            false
        }
    }

    /// Finish a start claimed with [`begin`](Self::begin)
    pub fn activate(&mut self, value: T) {
        *self = Self::Active(value);
    }

    /// Give up a claimed start (initialisation failed)
    pub fn abort(&mut self) {
        if matches!(self, Self::Starting) {
            *self = Self::Empty;
        }
    }

    /// Remove the live instance so it can be torn down
    pub fn take(&mut self) -> Option<T> {
        match std::mem::replace(self, Self::Empty) {
            Self::Active(value) => Some(value),
            other => {
                *self = other;
                None
            }
        }
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Active(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for InstanceSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
