use core::fmt;

use tokio_util::sync::{
    CancellationToken, WaitForCancellationFuture, WaitForCancellationFutureOwned,
};

/// A cancellable execution scope shared by a set of racing queries.
///
/// A `QueryContext` is a cheap handle to a single cancellation signal.
/// Cloning it produces another handle to the *same* signal; [`child`]
/// derives a new scope that observes this one without being able to cancel
/// it.
///
/// Cancellation is cooperative: [`cancel`] only signals, it never terminates
/// anything. Queries observe the signal through [`cancelled`] or
/// [`is_cancelled`] and are expected to stop promptly, but nothing enforces
/// that they do.
///
/// [`child`]: QueryContext::child
/// [`cancel`]: QueryContext::cancel
/// [`cancelled`]: QueryContext::cancelled
/// [`is_cancelled`]: QueryContext::is_cancelled
///
/// # Examples
///
/// ```rust
/// use query_race::QueryContext;
///
/// let ctx = QueryContext::new();
/// let scope = ctx.child();
///
/// scope.cancel();
/// assert!(scope.is_cancelled());
/// assert!(!ctx.is_cancelled());
///
/// ctx.cancel();
/// assert!(ctx.is_cancelled());
/// ```
#[derive(Clone, Default)]
pub struct QueryContext {
    token: CancellationToken,
}

impl QueryContext {
    /// Creates a new, uncancelled context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals every holder of this context, and of any context derived from
    /// it, to stop.
    ///
    /// Cancelling an already-cancelled context is a no-op.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns `true` once this context has been cancelled, directly or
    /// through a parent.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Completes when this context is cancelled.
    ///
    /// This is what cooperative queries race their own work against. If the
    /// context is already cancelled the returned future is immediately ready.
    pub fn cancelled(&self) -> WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }

    /// Derives a child context.
    ///
    /// Cancelling the child does not affect `self`; cancelling `self` also
    /// cancels the child. A child derived from an already-cancelled context
    /// is born cancelled.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
        }
    }

    /// A `'static` variant of [`cancelled`][QueryContext::cancelled] holding
    /// its own handle to the signal.
    pub(crate) fn cancelled_owned(&self) -> WaitForCancellationFutureOwned {
        self.token.clone().cancelled_owned()
    }
}

impl fmt::Debug for QueryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryContext")
            .field("is_cancelled", &self.is_cancelled())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cancel_reaches_children_not_parents() {
        let root = QueryContext::new();
        let child = root.child();
        let grandchild = child.child();

        child.cancel();
        assert!(!root.is_cancelled());
        assert!(child.is_cancelled());
        assert!(grandchild.is_cancelled());
    }

    #[test]
    fn child_of_cancelled_is_born_cancelled() {
        let root = QueryContext::new();
        root.cancel();
        assert!(root.child().is_cancelled());
    }

    #[test]
    fn cancelled_future_resolves() {
        futures_lite::future::block_on(async {
            let ctx = QueryContext::new();
            ctx.cancel();
            ctx.cancelled().await;
        })
    }
}
