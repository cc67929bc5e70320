use super::{Race as RaceTrait, Racer};
use crate::context::QueryContext;
use crate::query::Query;

impl<Q, T, E> RaceTrait for Vec<Q>
where
    Q: Query<Output = T, Error = E>,
{
    type Output = T;
    type Error = E;
    type Future = Racer<Q::Future, T, E>;

    fn race(self, ctx: &QueryContext) -> Self::Future {
        Racer::new(self, ctx)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::{QueryFailure, RaceError};
    use std::future;
    use std::io::{Error, ErrorKind};

    fn ready<T, E>(output: Result<T, E>) -> impl FnOnce(QueryContext) -> future::Ready<Result<T, E>>
    {
        move |_| future::ready(output)
    }

    #[test]
    fn all_ok() {
        futures_lite::future::block_on(async {
            let ctx = QueryContext::new();
            let res: Result<&str, RaceError<Error>> =
                vec![ready(Ok("hello")), ready(Ok("world"))].race(&ctx).await;
            assert!(res.is_ok());
        })
    }

    #[test]
    fn one_err() {
        futures_lite::future::block_on(async {
            let ctx = QueryContext::new();
            let err = Error::new(ErrorKind::Other, "oh no");
            let res: Result<&str, RaceError<Error>> =
                vec![ready(Ok("hello")), ready(Err(err))].race(&ctx).await;
            assert_eq!(res.unwrap(), "hello");
        });
    }

    #[test]
    fn all_err() {
        futures_lite::future::block_on(async {
            let ctx = QueryContext::new();
            let err1 = Error::new(ErrorKind::Other, "oops");
            let err2 = Error::new(ErrorKind::Other, "oh no");
            let res: Result<&str, RaceError<Error>> =
                vec![ready(Err(err1)), ready(Err(err2))].race(&ctx).await;
            let errs = res.unwrap_err().into_failures().unwrap();
            assert_eq!(errs[0].to_string(), "oops");
            assert_eq!(errs[1].to_string(), "oh no");
        });
    }

    #[test]
    fn no_queries() {
        futures_lite::future::block_on(async {
            let ctx = QueryContext::new();
            let queries: Vec<fn(QueryContext) -> future::Ready<Result<&'static str, Error>>> =
                vec![];
            let res = queries.race(&ctx).await;
            assert!(matches!(res.unwrap_err(), RaceError::NoQueries));
        });
    }

    #[test]
    fn cancelled_context_is_reported() {
        futures_lite::future::block_on(async {
            let ctx = QueryContext::new();
            ctx.cancel();
            let queries: Vec<fn(QueryContext) -> future::Pending<Result<&'static str, Error>>> =
                vec![|_| future::pending(), |_| future::pending()];
            let errs = queries
                .race(&ctx)
                .await
                .unwrap_err()
                .into_failures()
                .unwrap();
            assert_eq!(errs.len(), 1);
            assert!(matches!(errs[0], QueryFailure::Cancelled));
        });
    }
}
