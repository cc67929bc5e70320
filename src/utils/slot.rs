use core::future::Future;
use core::mem;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

/// A per-query slot holding the in-flight future and, once the query
/// completes, its outcome.
///
/// Every racing query owns exactly one slot, so recording an outcome never
/// has to wait on the consuming side: a completed query parks its result or
/// error here and the racer claims it whenever it next looks. Outcomes left
/// unclaimed when the race is decided are dropped with the slot.
#[derive(Debug)]
pub(crate) enum OutcomeSlot<Fut: Future> {
    /// The query has not completed yet.
    Running(Fut),
    /// The outcome of the completed query.
    Ready(Fut::Output),
    /// The outcome has been claimed by the racer.
    Claimed,
}

impl<Fut: Future> OutcomeSlot<Fut> {
    pub(crate) fn new(future: Fut) -> Self {
        Self::Running(future)
    }
}

impl<Fut, T, E> OutcomeSlot<Fut>
where
    Fut: Future<Output = Result<T, E>>,
{
    /// Claims the successful answer, if the query completed with one.
    #[inline]
    pub(crate) fn take_ok(self: Pin<&mut Self>) -> Option<T> {
        let this = unsafe { self.get_unchecked_mut() };
        match this {
            OutcomeSlot::Ready(Ok(_)) => {}
            OutcomeSlot::Ready(Err(_)) | OutcomeSlot::Running(_) | OutcomeSlot::Claimed => {
                return None
            }
        }
        if let OutcomeSlot::Ready(Ok(output)) = mem::replace(this, OutcomeSlot::Claimed) {
            Some(output)
        } else {
            unreachable!()
        }
    }

    /// Claims the failure, if the query completed with one.
    #[inline]
    pub(crate) fn take_err(self: Pin<&mut Self>) -> Option<E> {
        let this = unsafe { self.get_unchecked_mut() };
        match this {
            OutcomeSlot::Ready(Err(_)) => {}
            OutcomeSlot::Ready(Ok(_)) | OutcomeSlot::Running(_) | OutcomeSlot::Claimed => {
                return None
            }
        }
        if let OutcomeSlot::Ready(Err(err)) = mem::replace(this, OutcomeSlot::Claimed) {
            Some(err)
        } else {
            unreachable!()
        }
    }
}

impl<Fut: Future> Future for OutcomeSlot<Fut> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let output = unsafe {
            match Pin::as_mut(&mut self).get_unchecked_mut() {
                OutcomeSlot::Running(fut) => ready!(Pin::new_unchecked(fut).poll(cx)),
                OutcomeSlot::Ready(_) => return Poll::Ready(()),
                OutcomeSlot::Claimed => panic!("query polled after outcome was claimed"),
            }
        };
        self.set(OutcomeSlot::Ready(output));
        Poll::Ready(())
    }
}
