use core::future::Future;

use crate::context::QueryContext;

/// A single unit of racing work: given a cancellable context, produce either
/// an answer or a failure.
///
/// A query is consumed when it is started, so every implementation is
/// one-shot. Queries must respect cancellation of the supplied context
/// promptly, though nothing enforces that they do. A query that ignores the
/// signal keeps running until it is dropped and its outcome is discarded.
///
/// Any `FnOnce(QueryContext)` returning a `Result` future is a query, so
/// closures and async fns can be raced without further ceremony:
///
/// ```rust
/// use query_race::{Query, QueryContext};
///
/// let query = |ctx: QueryContext| async move {
///     if ctx.is_cancelled() {
///         return Err("cancelled before it began");
///     }
///     Ok(42)
/// };
///
/// let _fut = query.run(QueryContext::new());
/// ```
///
/// Heterogeneous query sets can be raced by boxing:
/// `Box<dyn FnOnce(QueryContext) -> Pin<Box<dyn Future<Output = ..>>>>`
/// satisfies this trait through the blanket impl.
pub trait Query {
    /// The answer produced on success.
    type Output;

    /// The failure produced when the query cannot answer.
    type Error;

    /// The [`Future`] driving this query.
    type Future: Future<Output = Result<Self::Output, Self::Error>>;

    /// Starts the query against the given context.
    fn run(self, ctx: QueryContext) -> Self::Future;
}

impl<F, Fut, T, E> Query for F
where
    F: FnOnce(QueryContext) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    type Output = T;
    type Error = E;
    type Future = Fut;

    fn run(self, ctx: QueryContext) -> Self::Future {
        (self)(ctx)
    }
}
