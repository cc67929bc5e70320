use core::fmt;
use core::future::Future;
use core::mem;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project::pin_project;
use tokio_util::sync::WaitForCancellationFutureOwned;

use crate::context::QueryContext;
use crate::error::{AggregateError, QueryFailure, RaceError};
use crate::query::Query;
use crate::utils::{iter_pin_mut, OutcomeSlot};

/// A future which resolves to the first query to answer successfully.
///
/// This `struct` is created by the [`race`] method on the [`Race`] trait. See
/// its documentation for more.
///
/// [`race`]: crate::Race::race
/// [`Race`]: crate::Race
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct Racer<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    slots: Pin<Box<[OutcomeSlot<Fut>]>>,
    #[pin]
    parent: WaitForCancellationFutureOwned,
    scope: QueryContext,
}

impl<Fut, T, E> Racer<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    pub(crate) fn new<I, Q>(queries: I, ctx: &QueryContext) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Query<Output = T, Error = E, Future = Fut>,
    {
        // One derived scope per invocation: cancelling it reaches every
        // query at once without touching the caller's context.
        let scope = ctx.child();
        let slots: Box<[_]> = queries
            .into_iter()
            .map(|query| OutcomeSlot::new(query.run(scope.clone())))
            .collect();
        Self {
            slots: slots.into(),
            parent: ctx.cancelled_owned(),
            scope,
        }
    }
}

impl<Fut, T, E> fmt::Debug for Racer<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>> + fmt::Debug,
    Fut::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots.iter()).finish()
    }
}

impl<Fut, T, E> Future for Racer<Fut, T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    type Output = Result<T, RaceError<E>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        if this.slots.is_empty() {
            return Poll::Ready(Err(RaceError::NoQueries));
        }

        let cancelled = this.parent.as_mut().poll(cx).is_ready();

        // Scanning after the cancellation check means a success that has
        // already landed still preempts a concurrent cancellation or
        // all-done event.
        let mut all_done = true;
        for mut slot in iter_pin_mut(this.slots.as_mut()) {
            if slot.as_mut().poll(cx).is_pending() {
                all_done = false;
            } else if let Some(output) = slot.take_ok() {
                this.scope.cancel();
                return Poll::Ready(Ok(output));
            }
        }

        if cancelled || all_done {
            this.scope.cancel();
            let mut slots = mem::replace(this.slots, Box::pin([]));
            let mut failures: Vec<QueryFailure<E>> = iter_pin_mut(slots.as_mut())
                .filter_map(|slot| slot.take_err())
                .map(QueryFailure::Error)
                .collect();
            if cancelled {
                failures.push(QueryFailure::Cancelled);
            }
            Poll::Ready(Err(RaceError::Failed(AggregateError::new(failures))))
        } else {
            Poll::Pending
        }
    }
}
