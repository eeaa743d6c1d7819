use super::cmd::Cmd;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
struct BackgroundTask {
    handle: JoinHandle<()>,
    started_at: std::time::Instant,
}

/// Runs command futures on the tokio runtime and feeds their messages back
/// through a channel the event loop drains.
pub struct TaskManager<M> {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    sender: mpsc::UnboundedSender<M>,
}

impl<M: Send + 'static> TaskManager<M> {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<M>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                sender: tx,
            },
            rx,
        )
    }

    /// Spawn every future of a command, one task each
    pub fn spawn(&mut self, cmd: Cmd<M>) -> Vec<TaskId> {
        cmd.into_futures().into_iter().map(|future| self.spawn_one(future)).collect()
    }

    fn spawn_one(&mut self, future: super::cmd::BoxFuture<M>) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let sender = self.sender.clone();
        let handle = tokio::spawn(async move {
            let msg = future.await;
            if sender.send(msg).is_err() {
                log::debug!("Task {task_id} finished after the event loop closed");
            }
        });

        self.tasks.insert(
            task_id,
            BackgroundTask {
                handle,
                started_at: std::time::Instant::now(),
            },
        );
        task_id
    }

    /// Forget finished tasks, returning how many were removed
    pub fn cleanup_finished(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task_id, task| {
            let finished = task.handle.is_finished();
            if finished {
                log::trace!("Task {task_id} done after {:?}", task.started_at.elapsed());
            }
            !finished
        });
        before - self.tasks.len()
    }

    /// Number of tasks not yet cleaned up
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn abort_all(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }
}

impl<M> Drop for TaskManager<M> {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_spawned_commands_deliver_messages() {
        let (mut manager, mut rx) = TaskManager::new();
        let ids = manager.spawn(Cmd::batch(vec![Cmd::msg(1), Cmd::msg(2)]));
        assert_eq!(ids, vec![1, 2]);

        let mut received = vec![rx.recv().await, rx.recv().await];
        received.sort();
        assert_eq!(received, vec![Some(1), Some(2)]);
    }

    #[tokio::test]
    async fn test_empty_command_spawns_nothing() {
        let (mut manager, _rx) = TaskManager::<u8>::new();
        assert!(manager.spawn(Cmd::none()).is_empty());
        assert_eq!(manager.task_count(), 0);
    }
}
