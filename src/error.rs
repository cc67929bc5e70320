use core::fmt;
use core::ops::{Deref, DerefMut};
use std::error::Error;

/// Why a single query produced no answer.
#[derive(Debug)]
pub enum QueryFailure<E> {
    /// The query ran and reported an error of its own.
    Error(E),
    /// The caller's context was cancelled before any query succeeded.
    Cancelled,
}

impl<E> QueryFailure<E> {
    /// Returns `true` if this failure records the caller's context being
    /// cancelled rather than a query's own error.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns the query's own error, if there is one.
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Error(err) => Some(err),
            Self::Cancelled => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for QueryFailure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(err) => err.fmt(f),
            Self::Cancelled => write!(f, "context cancelled"),
        }
    }
}

impl<E: Error> Error for QueryFailure<E> {}

/// A collection of failures, one per query that reported one.
///
/// Returned when a race ends without a winner. Derefs to the underlying
/// `Vec` so callers can enumerate the individual [`QueryFailure`]s. The
/// failures of queries still in flight when the race was decided are not
/// included, so the collection may hold fewer entries than there were
/// queries.
#[repr(transparent)]
pub struct AggregateError<E> {
    pub(crate) inner: Vec<QueryFailure<E>>,
}

impl<E> AggregateError<E> {
    pub(crate) fn new(inner: Vec<QueryFailure<E>>) -> Self {
        Self { inner }
    }
}

impl<E: fmt::Display> fmt::Debug for AggregateError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{self}:")?;

        for (i, failure) in self.inner.iter().enumerate() {
            writeln!(f, "- Failure {}: {failure}", i + 1)?;
        }

        Ok(())
    }
}

impl<E: fmt::Display> fmt::Display for AggregateError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} queries failed", self.inner.len())
    }
}

impl<E> Deref for AggregateError<E> {
    type Target = Vec<QueryFailure<E>>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<E> DerefMut for AggregateError<E> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<E: Error> Error for AggregateError<E> {}

/// Error returned by [`race`][crate::Race::race].
pub enum RaceError<E> {
    /// No queries were supplied, so there was nothing to race.
    NoQueries,
    /// Every query failed to produce an answer.
    Failed(AggregateError<E>),
}

impl<E> RaceError<E> {
    /// Returns the collected failures, if the race ran and lost.
    pub fn into_failures(self) -> Option<AggregateError<E>> {
        match self {
            Self::NoQueries => None,
            Self::Failed(errs) => Some(errs),
        }
    }
}

impl<E: fmt::Display> fmt::Debug for RaceError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoQueries => write!(f, "NoQueries"),
            Self::Failed(errs) => fmt::Debug::fmt(errs, f),
        }
    }
}

impl<E: fmt::Display> fmt::Display for RaceError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoQueries => write!(f, "no queries supplied"),
            Self::Failed(errs) => fmt::Display::fmt(errs, f),
        }
    }
}

impl<E: Error> Error for RaceError<E> {}

#[cfg(test)]
mod test {
    use super::*;
    use std::io;

    #[test]
    fn aggregate_debug_lists_each_failure() {
        let errs: AggregateError<io::Error> = AggregateError::new(vec![
            QueryFailure::Error(io::Error::new(io::ErrorKind::Other, "oops")),
            QueryFailure::Cancelled,
        ]);
        assert_eq!(errs.to_string(), "2 queries failed");

        let debug = format!("{errs:?}");
        assert!(debug.contains("- Failure 1: oops"));
        assert!(debug.contains("- Failure 2: context cancelled"));
    }

    #[test]
    fn failures_can_be_enumerated() {
        let errs: AggregateError<&str> =
            AggregateError::new(vec![QueryFailure::Error("e1"), QueryFailure::Cancelled]);
        assert_eq!(errs.len(), 2);
        assert!(!errs[0].is_cancelled());
        assert!(errs[1].is_cancelled());
    }

    #[test]
    fn no_queries_display() {
        let err: RaceError<&str> = RaceError::NoQueries;
        assert_eq!(err.to_string(), "no queries supplied");
        assert!(err.into_failures().is_none());
    }
}
