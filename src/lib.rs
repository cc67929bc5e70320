//! Race redundant async queries to the first successful answer.
//!
//! When several alternative sources (replicas, mirrors, fallback endpoints)
//! can answer the same request, the lowest-latency answer is the one that
//! arrives first, and the failures along the way only matter if *nobody*
//! answers. This crate provides exactly that coordination and nothing else:
//! run every query concurrently against a shared cancellable context, resolve
//! to the first success, signal the rest to stop, and surface an aggregate of
//! all collected failures only when every query fails.
//!
//! # Examples
//!
//! Race two sources and take whichever answers first:
//!
//! ```rust
//! use futures_lite::future::block_on;
//! use query_race::prelude::*;
//! use query_race::QueryContext;
//!
//! async fn lookup(_ctx: QueryContext, source: &'static str) -> Result<&'static str, &'static str> {
//!     match source {
//!         "primary" => Err("primary is down"),
//!         other => Ok(other),
//!     }
//! }
//!
//! block_on(async {
//!     let ctx = QueryContext::new();
//!     let queries: Vec<_> = ["primary", "replica"]
//!         .into_iter()
//!         .map(|source| move |ctx: QueryContext| lookup(ctx, source))
//!         .collect();
//!
//!     let answer = queries.race(&ctx).await;
//!     assert_eq!(answer.unwrap(), "replica");
//! })
//! ```
//!
//! # Semantics
//!
//! - Every query receives a context derived from the caller's; once a winner
//!   is found the derived context is cancelled, so a single signal reaches
//!   all still-running queries at once.
//! - Cancellation is cooperative. Queries are expected to stop promptly when
//!   their context is cancelled, but non-cooperative queries are merely
//!   dropped and their outcome discarded.
//! - A success anywhere discards all failures, even ones already collected.
//!   Only when every query fails does the caller see an [`AggregateError`]
//!   enumerating each underlying failure.
//! - Cancelling the caller's own context ends the race and is reported as
//!   one of the underlying failures, not swallowed.
//!
//! There is no retry logic, no backoff, and no ordering preference among
//! queries; callers compose timeouts and retries on top via the context and
//! re-invocation.

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

mod context;
mod error;
mod query;
mod race;
mod utils;

pub use context::QueryContext;
pub use error::{AggregateError, QueryFailure, RaceError};
pub use query::Query;
pub use race::{Race, Racer};

/// The query-race prelude.
pub mod prelude {
    pub use super::Query as _;
    pub use super::Race as _;
}
