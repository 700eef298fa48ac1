//! Background worker for coolmenu.
//!
//! Rescanning PATH can take a moment on large systems, so the menu opens on the cached
//! list and asks the refresh worker for a fresh one. Requests [WorkerTask] go to the worker
//! thread over a channel and results [WorkerResponse] come back the same way.
//!
//! The task channel is bounded to one slot: a refresh requested while another is still
//! queued is dropped, the queued one already answers it. [RefreshStatus::Pending] tells
//! the caller to keep waiting on the request id of the queued task.

use crate::core::source::CandidateSource;

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded, unbounded};

use std::sync::Arc;
use std::thread;

/// Tasks sent to the worker thread via channel.
#[derive(Debug)]
pub enum WorkerTask {
    Refresh { request_id: u64 },
}

/// Responses sent from the worker thread back to the main thread.
#[derive(Debug)]
pub enum WorkerResponse {
    Candidates { items: Vec<String>, request_id: u64 },
    Error { message: String, request_id: u64 },
}

/// Outcome of [Workers::request_refresh].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStatus {
    /// The task was queued under the given request id.
    Queued,
    /// An earlier task is still queued, this request id was not sent.
    Pending,
    /// The worker thread has exited.
    Disconnected,
}

/// Channel ends of the refresh worker.
pub struct Workers {
    refresh_tx: Sender<WorkerTask>,
    response_rx: Receiver<WorkerResponse>,
}

impl Workers {
    /// Spawns the refresh worker thread for `source`.
    pub fn spawn(source: Arc<dyn CandidateSource>) -> Self {
        let (refresh_tx, refresh_rx) = bounded::<WorkerTask>(1);
        let (res_tx, response_rx) = unbounded::<WorkerResponse>();

        start_refresh_worker(source, refresh_rx, res_tx);

        Self {
            refresh_tx,
            response_rx,
        }
    }

    /// Queues a refresh tagged with `request_id`.
    pub fn request_refresh(&self, request_id: u64) -> RefreshStatus {
        match self.refresh_tx.try_send(WorkerTask::Refresh { request_id }) {
            Ok(()) => RefreshStatus::Queued,
            Err(TrySendError::Full(_)) => RefreshStatus::Pending,
            Err(TrySendError::Disconnected(_)) => RefreshStatus::Disconnected,
        }
    }

    /// Accessor for the worker response receiver.
    pub fn response_rx(&self) -> &Receiver<WorkerResponse> {
        &self.response_rx
    }
}

/// Starts the refresh worker thread, which listens to [WorkerTask] and answers with [WorkerResponse]
fn start_refresh_worker(
    source: Arc<dyn CandidateSource>,
    task_rx: Receiver<WorkerTask>,
    res_tx: Sender<WorkerResponse>,
) {
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            let WorkerTask::Refresh { request_id } = task;
            let response = match source.refresh() {
                Ok(items) => WorkerResponse::Candidates { items, request_id },
                Err(e) => WorkerResponse::Error {
                    message: e.to_string(),
                    request_id,
                },
            };
            if res_tx.send(response).is_err() {
                break;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::{Candidates, Origin};
    use crate::error::{Error, Result};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct CountingSource {
        calls: AtomicUsize,
    }

    impl CandidateSource for CountingSource {
        fn load(&self) -> Result<Candidates> {
            Ok(Candidates {
                items: Vec::new(),
                origin: Origin::Cache,
            })
        }

        fn refresh(&self) -> Result<Vec<String>> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![format!("scan{}", n)])
        }
    }

    struct FailingSource;

    impl CandidateSource for FailingSource {
        fn load(&self) -> Result<Candidates> {
            self.refresh().map(|items| Candidates {
                items,
                origin: Origin::Scan,
            })
        }

        fn refresh(&self) -> Result<Vec<String>> {
            Err(Error::NotFound("PATH".into()))
        }
    }

    #[test]
    fn test_refresh_worker_answers_with_request_id() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let source = Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
        });
        let workers = Workers::spawn(source);
        assert_eq!(workers.request_refresh(7), RefreshStatus::Queued);

        match workers.response_rx().recv_timeout(Duration::from_secs(5))? {
            WorkerResponse::Candidates { items, request_id } => {
                assert_eq!(request_id, 7);
                assert_eq!(items, vec!["scan0"]);
            }
            other => panic!("unexpected response: {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_refresh_worker_reports_errors() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let workers = Workers::spawn(Arc::new(FailingSource));
        assert_eq!(workers.request_refresh(1), RefreshStatus::Queued);

        match workers.response_rx().recv_timeout(Duration::from_secs(5))? {
            WorkerResponse::Error {
                message,
                request_id,
            } => {
                assert_eq!(request_id, 1);
                assert!(message.contains("PATH"));
            }
            other => panic!("unexpected response: {:?}", other),
        }
        Ok(())
    }
}
