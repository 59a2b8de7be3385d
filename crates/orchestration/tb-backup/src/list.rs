//! Table enumeration with pagination support.

use std::collections::{HashSet, VecDeque};

use async_stream::try_stream;
use futures::{Stream, StreamExt, pin_mut};
use tb_error::{Result, TbError};
use tb_traits::{StorageClient, TableName};
use tracing::{debug, info};

/// List every table reachable by `client`.
///
/// Returns a stream of table names, handling pagination automatically: the first
/// call carries no cursor, and while a page returns a continuation cursor the next
/// call starts after it. Names keep the service's order and pages are concatenated
/// in pagination order.
///
/// Any failing listing call yields a single [`TbError::ListingFailed`] and ends the stream.
///
/// # Example
///
/// ```ignore
/// use futures::StreamExt;
///
/// let stream = list_tables(&client, None);
/// pin_mut!(stream);
///
/// while let Some(result) = stream.next().await {
///     println!("Found table: {}", result?);
/// }
/// ```
pub fn list_tables<'a, C>(
    client: &'a C,
    page_size: Option<i32>,
) -> impl Stream<Item = Result<TableName>> + 'a
where
    C: StorageClient + ?Sized + 'a,
{
    try_stream! {
        let mut cursor: Option<TableName> = None;
        let mut page_number = 0usize;

        loop {
            let page = client
                .list_tables(cursor.as_deref(), page_size)
                .await
                .map_err(as_listing_failure)?;
            page_number += 1;

            debug!(
                page = page_number,
                tables = page.table_names.len(),
                more = page.has_more(),
                "Listed table page"
            );

            let next = page.last_evaluated_table_name;
            if next.is_some() && next == cursor {
                Err::<(), _>(TbError::ListingFailed(format!(
                    "listing did not advance past {}",
                    next.as_deref().unwrap_or_default()
                )))?;
            }

            for name in page.table_names {
                yield name;
            }

            match next {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }
    }
}

/// Collect every table name into a dispatch queue.
///
/// Enumeration is all-or-nothing: the first listing failure is returned and no
/// partial result escapes. A name the service repeats across pages is queued once.
pub async fn collect_tables<C>(client: &C, page_size: Option<i32>) -> Result<VecDeque<TableName>>
where
    C: StorageClient + ?Sized,
{
    info!("Collecting table names");

    let stream = list_tables(client, page_size);
    pin_mut!(stream);

    let mut seen = HashSet::new();
    let mut tables = VecDeque::new();

    while let Some(result) = stream.next().await {
        let name = result?;
        if seen.insert(name.clone()) {
            tables.push_back(name);
        } else {
            debug!(table = %name, "Skipping duplicate table name");
        }
    }

    info!(tables = tables.len(), "Collected table names");

    Ok(tables)
}

fn as_listing_failure(error: TbError) -> TbError {
    match error {
        TbError::ListingFailed(_) => error,
        other => TbError::ListingFailed(other.to_string()),
    }
}
