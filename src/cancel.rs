//! Cooperative cancellation for artifact emission.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{Error, Result};

/// Shared flag that an interrupt handler trips and emitters poll.
///
/// Clones observe the same flag. Nothing is interrupted asynchronously;
/// long-running operations call [`CancellationToken::check`] at their
/// write boundaries and unwind with [`Error::Canceled`].
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    canceled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::SeqCst);
    }

    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::SeqCst)
    }

    /// Checkpoint: `Err(Canceled)` once cancellation has been requested.
    pub fn check(&self) -> Result<()> {
        if self.is_canceled() {
            Err(Error::Canceled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let token = CancellationToken::new();
        let handler_side = token.clone();
        assert!(token.check().is_ok());

        handler_side.cancel();
        assert!(token.is_canceled());
        assert!(matches!(token.check(), Err(Error::Canceled)));
    }
}
