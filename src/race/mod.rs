use futures_core::Future;

use crate::context::QueryContext;
use crate::error::RaceError;

pub(crate) mod array;
pub(crate) mod racer;
pub(crate) mod vec;

pub use racer::Racer;

/// Race a set of queries to the first successful answer.
///
/// Runs every query concurrently against a context derived from `ctx`,
/// resolving as soon as one of them succeeds. The derived context is
/// cancelled the moment a winner is found, so the remaining queries are
/// signalled to stop; they are not forcibly terminated, and anything they
/// report afterwards is discarded.
///
/// Only if every query fails does the race fail, with an aggregate
/// enumerating each collected failure. Cancelling `ctx` itself ends the race
/// and is folded into that aggregate as one of the underlying failures,
/// unless a success had already landed, in which case the success still
/// wins.
pub trait Race {
    /// The answer produced by the winning query.
    type Output;

    /// The failure type shared by the racing queries.
    type Error;

    /// The [`Future`] implementation returned by this method.
    type Future: Future<Output = Result<Self::Output, RaceError<Self::Error>>>;

    /// Race the queries to the first successful answer.
    ///
    /// An empty set of queries resolves immediately to
    /// [`RaceError::NoQueries`] without starting anything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # futures_lite::future::block_on(async {
    /// use query_race::prelude::*;
    /// use query_race::QueryContext;
    ///
    /// async fn fetch(_ctx: QueryContext, id: u8) -> Result<u8, u8> {
    ///     if id == 0 {
    ///         Err(id)
    ///     } else {
    ///         Ok(id)
    ///     }
    /// }
    ///
    /// let ctx = QueryContext::new();
    /// let queries: Vec<_> = (0..3)
    ///     .map(|id| move |ctx: QueryContext| fetch(ctx, id))
    ///     .collect();
    ///
    /// let answer = queries.race(&ctx).await.unwrap();
    /// assert!(answer == 1 || answer == 2);
    /// # });
    /// ```
    fn race(self, ctx: &QueryContext) -> Self::Future;
}
