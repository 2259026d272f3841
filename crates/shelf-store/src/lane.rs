use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use tracing::warn;

/// A queued unit of work.
pub(crate) type Job = Box<dyn FnOnce() + Send + 'static>;

/// Single-lane background work queue.
///
/// One dedicated worker thread drains a FIFO channel of jobs, so every job
/// runs with mutual exclusion against all others submitted to the same
/// lane. A lane is scoped to one store instance and never shared.
///
/// There is no cancellation and no timeout: a submitted job always runs,
/// including during shutdown — dropping the lane closes the channel, lets
/// the worker drain what remains, and joins it.
pub(crate) struct WorkLane {
    tx: Option<Sender<Job>>,
    worker: Option<JoinHandle<()>>,
}

impl WorkLane {
    /// Spawn the worker thread for a new, empty lane.
    pub(crate) fn new() -> Self {
        let (tx, rx) = mpsc::channel::<Job>();
        let worker = thread::spawn(move || {
            while let Ok(job) = rx.recv() {
                job();
            }
        });
        Self {
            tx: Some(tx),
            worker: Some(worker),
        }
    }

    /// Enqueue a job. Never blocks the caller.
    pub(crate) fn submit(&self, job: Job) {
        if let Some(tx) = &self.tx {
            if tx.send(job).is_err() {
                warn!("work lane is closed; dropping job");
            }
        }
    }

    /// Block until every job submitted before this call has executed.
    pub(crate) fn flush(&self) {
        let (done_tx, done_rx) = mpsc::channel::<()>();
        self.submit(Box::new(move || {
            let _ = done_tx.send(());
        }));
        // A closed lane has nothing pending; a recv error means exactly that.
        let _ = done_rx.recv();
    }
}

impl Drop for WorkLane {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain remaining jobs and exit.
        drop(self.tx.take());
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("store worker thread panicked");
            }
        }
    }
}
