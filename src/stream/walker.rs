//! Background page walker feeding a bounded channel.

use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

use serde::de::DeserializeOwned;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use crate::decode::{EntityDecoder, JsonEntityDecoder};
use crate::error::{Error, Result};
use crate::http::ApiClient;
use crate::pagination::{self, PageEnvelope};
use crate::types::QueryMap;

use super::cancel::CancelHandle;

/// Receiving half of a spawned entity stream.
///
/// Entities arrive one at a time through [`recv`](Self::recv); once that
/// returns `None`, [`finish`](Self::finish) reports whether the walk ran
/// to the end of the collection or stopped on an error.
pub struct EntityStream<T> {
    items: mpsc::Receiver<T>,
    error: oneshot::Receiver<Error>,
    cancel: CancelHandle,
}

impl<T> EntityStream<T> {
    /// Receives the next entity, or `None` when the stream is finished.
    pub async fn recv(&mut self) -> Option<T> {
        self.items.recv().await
    }

    /// Returns a handle that can cancel this stream from elsewhere.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Requests cancellation; at most one more item is delivered.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Consumes the stream and reports how the walk ended.
    ///
    /// Returns `Ok(())` for a clean end (all pages read, or cancelled)
    /// and the walk's error otherwise. Call after [`recv`](Self::recv)
    /// returns `None`.
    pub async fn finish(self) -> Result<()> {
        match self.error.await {
            Ok(err) => Err(err),
            Err(_) => Ok(()),
        }
    }
}

impl<T> futures::Stream for EntityStream<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.get_mut().items.poll_recv(cx)
    }
}

impl<T> fmt::Debug for EntityStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityStream").finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Spawns a background walk over the collection at `path`, decoding
    /// each page's entity block with `decoder`.
    pub fn stream<T, D>(&self, path: &str, params: QueryMap, decoder: D) -> EntityStream<T>
    where
        T: Send + 'static,
        D: EntityDecoder<Item = T> + 'static,
    {
        let seed = PageEnvelope::seed(path, &params);
        let (items_tx, items_rx) = mpsc::channel(1);
        let (error_tx, error_rx) = oneshot::channel();
        let cancel = CancelHandle::new();

        let client = self.clone();
        let task_cancel = cancel.clone();
        tokio::spawn(async move {
            if let Err(err) = page_walk(&client, seed, &decoder, &items_tx, &task_cancel).await {
                if !err.is_end_of_list() {
                    let _ = error_tx.send(err);
                }
            }
        });

        EntityStream {
            items: items_rx,
            error: error_rx,
            cancel,
        }
    }

    /// Streams a collection whose entity blocks decode as JSON arrays
    /// of `T`.
    pub fn stream_json<T>(&self, path: &str, params: QueryMap) -> EntityStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.stream(path, params, JsonEntityDecoder::new())
    }
}

/// Walks pages from the seed until the collection is exhausted.
///
/// Termination is checked in order: no next link, an empty page, a
/// dropped receiver, a cancellation request, and finally the emitted
/// count reaching the latest reported total.
async fn page_walk<T, D>(
    client: &ApiClient,
    seed: PageEnvelope,
    decoder: &D,
    items: &mpsc::Sender<T>,
    cancel: &CancelHandle,
) -> Result<()>
where
    D: EntityDecoder<Item = T>,
{
    let mut current = seed;
    let mut emitted: u64 = 0;

    loop {
        let request = pagination::next_request(&current)?;
        current = client.fetch_page(&request).await?;
        debug!(
            "fetched page: offset={} size={} total={}",
            current.properties.offset, current.properties.size, current.properties.total
        );

        if current.properties.size == 0 {
            return Ok(());
        }

        let page_items = match &current.entities {
            Some(raw) => decoder.decode(raw)?,
            None => {
                return Err(Error::decode(
                    "page reported items but carried no entity block",
                ))
            }
        };

        for item in page_items {
            if cancel.is_cancelled() {
                return Ok(());
            }
            if items.send(item).await.is_err() {
                return Ok(());
            }
            emitted += 1;
        }

        if emitted == current.properties.total {
            return Ok(());
        }
    }
}
