//! Delivery of live contract logs to a consumer.
//!
//! The transport stream is driven by a background task that decodes each log and pushes the
//! result into a bounded channel. Cancelling (or dropping) the subscription stops the task, which
//! drops the transport stream and with it the node-side subscription.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use ethers::types::Log;
use futures::{Stream, StreamExt};
use log::{debug, warn};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Decoded events buffered before the transport task waits on the consumer.
const DELIVERY_BUFFER: usize = 64;

/// A live stream of decoded events.
///
/// Items are either a decoded event or the error the transport or decoder produced for it. `None`
/// means the transport stream has terminated.
pub struct EventSubscription<T, E> {
    events: mpsc::Receiver<Result<T, E>>,
    cancel: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl<T, E> EventSubscription<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Spawns `deliver` on the runtime. It receives the sending half of the delivery channel and
    /// runs until its source is exhausted or the subscription is cancelled.
    pub fn spawn<F, Fut>(deliver: F) -> Self
    where
        F: FnOnce(mpsc::Sender<Result<T, E>>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (sink, events) = mpsc::channel(DELIVERY_BUFFER);
        let (cancel, cancelled) = oneshot::channel::<()>();
        let delivery = deliver(sink);

        let task = tokio::spawn(async move {
            // A dropped subscription resolves `cancelled` as well.
            tokio::select! {
                _ = cancelled => debug!("Event subscription cancelled"),
                _ = delivery => debug!("Event subscription closed by transport"),
            }
        });

        Self {
            events,
            cancel,
            task,
        }
    }

    /// Waits for the next event.
    pub async fn recv(&mut self) -> Option<Result<T, E>> {
        self.events.recv().await
    }

    /// Stops delivery and waits until the transport stream has been released.
    pub async fn unsubscribe(self) {
        let _ = self.cancel.send(());
        if let Err(e) = self.task.await {
            warn!("Event subscription task failed: {}", e);
        }
    }
}

impl<T, E> Stream for EventSubscription<T, E> {
    type Item = Result<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().events.poll_recv(cx)
    }
}

/// Decodes every log of `logs` and pushes it into `sink`, until either the stream ends or the
/// receiving side goes away. Decoding failures are forwarded and do not stop the loop.
pub async fn forward<S, T, E, F>(logs: S, sink: mpsc::Sender<Result<T, E>>, decode: F)
where
    S: Stream<Item = Log>,
    F: Fn(Log) -> Result<T, E>,
{
    futures::pin_mut!(logs);
    while let Some(log) = logs.next().await {
        if sink.send(decode(log)).await.is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ethers::abi::{encode, Token};
    use ethers::contract::{parse_log, EthEvent};
    use ethers::types::U256;
    use futures::channel::mpsc::{unbounded, UnboundedSender};

    use super::*;
    use crate::bindings::val_set_driver::{SetEpochDurationFilter, SetNumAggregatorsFilter};

    type EpochSubscription = EventSubscription<SetEpochDurationFilter, ethers::abi::Error>;

    fn epoch_duration_log(epoch_duration: u64) -> Log {
        Log {
            topics: vec![SetEpochDurationFilter::signature()],
            data: encode(&[Token::Uint(U256::from(epoch_duration))]).into(),
            ..Default::default()
        }
    }

    fn subscribe() -> (UnboundedSender<Log>, EpochSubscription) {
        let (logs, source) = unbounded::<Log>();
        let subscription = EventSubscription::spawn(move |sink| {
            forward(source, sink, parse_log::<SetEpochDurationFilter>)
        });
        (logs, subscription)
    }

    async fn wait_closed(logs: &UnboundedSender<Log>) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while !logs.is_closed() {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("transport stream was not released");
    }

    #[tokio::test]
    async fn test_delivers_in_order() {
        env_logger::try_init().unwrap_or_default();
        let (logs, mut subscription) = subscribe();

        logs.unbounded_send(epoch_duration_log(3600)).unwrap();
        logs.unbounded_send(epoch_duration_log(7200)).unwrap();

        let first = subscription.recv().await.unwrap().unwrap();
        let second = subscription.next().await.unwrap().unwrap();
        assert_eq!(first.epoch_duration, 3600);
        assert_eq!(second.epoch_duration, 7200);

        subscription.unsubscribe().await;
    }

    #[tokio::test]
    async fn test_decode_error_is_forwarded() {
        let (logs, mut subscription) = subscribe();

        let mut foreign = epoch_duration_log(1);
        foreign.topics = vec![SetNumAggregatorsFilter::signature()];
        logs.unbounded_send(foreign).unwrap();
        logs.unbounded_send(epoch_duration_log(60)).unwrap();

        assert!(subscription.recv().await.unwrap().is_err());
        assert_eq!(
            subscription.recv().await.unwrap().unwrap().epoch_duration,
            60
        );

        subscription.unsubscribe().await;
    }

    #[tokio::test]
    async fn test_transport_end_closes_subscription() {
        let (logs, mut subscription) = subscribe();

        logs.unbounded_send(epoch_duration_log(10)).unwrap();
        drop(logs);

        assert!(subscription.recv().await.unwrap().is_ok());
        assert!(subscription.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_unsubscribe_releases_transport() {
        let (logs, mut subscription) = subscribe();

        logs.unbounded_send(epoch_duration_log(10)).unwrap();
        assert!(subscription.recv().await.unwrap().is_ok());

        subscription.unsubscribe().await;
        assert!(logs.is_closed());
        assert!(logs.unbounded_send(epoch_duration_log(20)).is_err());
    }

    #[tokio::test]
    async fn test_drop_releases_transport() {
        let (logs, subscription) = subscribe();
        drop(subscription);
        wait_closed(&logs).await;
    }
}
