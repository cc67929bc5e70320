use std::error::Error;
use std::io;
use std::time::Duration;

use futures_time::prelude::*;
use futures_time::time::Duration as Deadline;
use query_race::prelude::*;
use query_race::QueryContext;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let doc = fetch_from_any_mirror("index.html").await?;
    println!("{doc}");
    Ok(())
}

/// Mirror failover!
///
/// 1. Build one query per mirror, each respecting the shared context
/// 2. Stagger the mirrors so the nearest one gets a head start
/// 3. Race them: the first successful answer wins and the rest are
///    signalled to stop
/// 4. Set a deadline for the whole race, so a dead set of mirrors cannot
///    hang the caller
async fn fetch_from_any_mirror(
    path: &'static str,
) -> Result<String, Box<dyn Error + Send + Sync + 'static>> {
    let mirrors = ["eu.mirror.example", "us.mirror.example", "ap.mirror.example"];

    let ctx = QueryContext::new();
    let queries: Vec<_> = mirrors
        .into_iter()
        .enumerate()
        .map(|(nth, host)| {
            move |ctx: QueryContext| fetch(ctx, host, path, Duration::from_millis(50 * nth as u64))
        })
        .collect();

    let doc = queries
        .race(&ctx)
        .timeout(Deadline::from_secs(2))
        .await??;

    Ok(doc)
}

/// Stand-in for a real transfer: waits out its head start, then either
/// answers or reports the mirror as unreachable. Stops early when the race
/// is already decided.
async fn fetch(
    ctx: QueryContext,
    host: &'static str,
    path: &'static str,
    head_start: Duration,
) -> io::Result<String> {
    tokio::select! {
        _ = ctx.cancelled() => {
            Err(io::Error::new(io::ErrorKind::Interrupted, format!("{host}: race already decided")))
        }
        _ = tokio::time::sleep(head_start) => {
            if host.starts_with("eu") {
                Err(io::Error::new(io::ErrorKind::ConnectionRefused, format!("{host}: unreachable")))
            } else {
                Ok(format!("<!-- {path} served by {host} -->"))
            }
        }
    }
}
