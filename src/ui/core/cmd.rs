use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

pub type BoxFuture<M> = Pin<Box<dyn Future<Output = M> + Send + 'static>>;

/// Side effects requested by an update.
///
/// A command is a set of futures, each resolving to one message that is fed
/// back into the update loop. Commands are inert until the runtime spawns them.
#[must_use]
pub struct Cmd<M> {
    futures: Vec<BoxFuture<M>>,
}

impl<M: Send + 'static> Cmd<M> {
    pub fn none() -> Self {
        Self { futures: Vec::new() }
    }

    /// Dispatch `msg` on the next turn of the loop
    pub fn msg(msg: M) -> Self {
        Self::perform(async move { msg })
    }

    pub fn perform<F>(future: F) -> Self
    where
        F: Future<Output = M> + Send + 'static,
    {
        Self {
            futures: vec![Box::pin(future)],
        }
    }

    /// Dispatch `msg` once `delay` has elapsed
    pub fn after(delay: Duration, msg: M) -> Self {
        Self::perform(async move {
            tokio::time::sleep(delay).await;
            msg
        })
    }

    pub fn batch(cmds: impl IntoIterator<Item = Cmd<M>>) -> Self {
        Self {
            futures: cmds.into_iter().flat_map(|cmd| cmd.futures).collect(),
        }
    }

    /// Wrap every resulting message, e.g. a child message into its parent's variant
    pub fn map<N, F>(self, f: F) -> Cmd<N>
    where
        N: Send + 'static,
        F: Fn(M) -> N + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        Cmd {
            futures: self
                .futures
                .into_iter()
                .map(|future| {
                    let f = Arc::clone(&f);
                    Box::pin(async move { f(future.await) }) as BoxFuture<N>
                })
                .collect(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.futures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.futures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.futures.is_empty()
    }

    pub fn into_futures(self) -> Vec<BoxFuture<M>> {
        self.futures
    }

    /// Await every future in order and collect the messages
    pub async fn collect(self) -> Vec<M> {
        let mut messages = Vec::with_capacity(self.futures.len());
        for future in self.futures {
            messages.push(future.await);
        }
        messages
    }
}

impl<M: Send + 'static> Default for Cmd<M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<M> fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cmd({} pending)", self.futures.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_map_wraps_every_message() {
        let cmd = Cmd::batch([Cmd::msg(1), Cmd::msg(2)]).map(|n| n * 10);
        assert_eq!(cmd.len(), 2);
        assert_eq!(cmd.collect().await, vec![10, 20]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_after_waits_for_delay() {
        let cmd = Cmd::after(Duration::from_secs(5), "done");
        let started = tokio::time::Instant::now();
        assert_eq!(cmd.collect().await, vec!["done"]);
        assert!(started.elapsed() >= Duration::from_secs(5));
    }

    #[test]
    fn test_none_is_empty() {
        let cmd: Cmd<()> = Cmd::none();
        assert!(cmd.is_none());
        assert_eq!(format!("{cmd:?}"), "Cmd(0 pending)");
    }
}
