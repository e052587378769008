// src/chat/scheduler.rs
//! Delayed tasks owned by a component and cancelled with it.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

pub type TaskId = u64;

#[derive(Debug, Default)]
pub struct TaskScheduler {
    next_id: AtomicU64,
    tasks: Mutex<HashMap<TaskId, JoinHandle<()>>>,
}

impl TaskScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` once `delay` has elapsed. Must be called from within a
    /// tokio runtime.
    pub fn schedule<F>(&self, delay: Duration, task: F) -> TaskId
    where
        F: FnOnce() + Send + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });

        let mut tasks = self.tasks.lock();
        tasks.retain(|_, handle| !handle.is_finished());
        tasks.insert(id, handle);
        id
    }

    /// Returns false when the task already ran or was unknown.
    pub fn cancel(&self, id: TaskId) -> bool {
        match self.tasks.lock().remove(&id) {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    pub fn cancel_all(&self) {
        let tasks: Vec<JoinHandle<()>> = self.tasks.lock().drain().map(|(_, h)| h).collect();
        let mut cancelled = 0;
        for handle in tasks {
            if !handle.is_finished() {
                handle.abort();
                cancelled += 1;
            }
        }
        if cancelled > 0 {
            debug!("Cancelled {} pending task(s)", cancelled);
        }
    }

    pub fn pending(&self) -> usize {
        self.tasks
            .lock()
            .values()
            .filter(|handle| !handle.is_finished())
            .count()
    }
}

impl Drop for TaskScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
