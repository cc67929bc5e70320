use super::{Race as RaceTrait, Racer};
use crate::context::QueryContext;
use crate::query::Query;

impl<Q, T, E, const N: usize> RaceTrait for [Q; N]
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
    use crate::error::RaceError;
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
                [ready(Ok("hello")), ready(Ok("world"))].race(&ctx).await;
            assert!(res.is_ok());
        })
    }

    #[test]
    fn all_err() {
        futures_lite::future::block_on(async {
            let ctx = QueryContext::new();
            let err1 = Error::new(ErrorKind::Other, "oops");
            let err2 = Error::new(ErrorKind::Other, "oh no");
            let res: Result<&str, RaceError<Error>> =
                [ready(Err(err1)), ready(Err(err2))].race(&ctx).await;
            let errs = res.unwrap_err().into_failures().unwrap();
            assert_eq!(errs.len(), 2);
        });
    }

    #[test]
    fn empty_array() {
        futures_lite::future::block_on(async {
            let ctx = QueryContext::new();
            let queries: [fn(QueryContext) -> future::Ready<Result<&'static str, Error>>; 0] = [];
            let res = queries.race(&ctx).await;
            assert!(matches!(res.unwrap_err(), RaceError::NoQueries));
        });
    }
}
