// crates/framematch-net/src/worker.rs
//
// UploadWorker: runs each submission on its own thread and reports back to
// the UI over a channel. The UI drains `rx` once per frame.
//
// Only one upload is in flight at a time from the UI's perspective (the
// controller refuses to dispatch while uploading), but each job carries its
// id so late events from an older job are recognisable.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use anyhow::Context;
use crossbeam_channel::{bounded, Receiver, Sender};
use parking_lot::RwLock;

use framematch_core::media_types::{TransportFailure, UploadEvent, UploadJob};
use framematch_core::upload::UploadDispatch;

use crate::client::{ClientConfig, DetectionClient};

/// Called after every event send so an idle UI wakes up to drain it.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

pub struct UploadWorker {
    /// Progress and completion events for every job.
    pub rx:   Receiver<UploadEvent>,
    tx:       Sender<UploadEvent>,
    /// Read at dispatch time; edits apply to the next submission.
    config:   Arc<RwLock<ClientConfig>>,
    waker:    Option<Waker>,
    shutdown: Arc<AtomicBool>,
}

impl UploadWorker {
    pub fn new(config: ClientConfig) -> Self {
        let (tx, rx) = bounded(256);
        Self {
            rx,
            tx,
            config:   Arc::new(RwLock::new(config)),
            waker:    None,
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_waker(mut self, waker: impl Fn() + Send + Sync + 'static) -> Self {
        self.waker = Some(Arc::new(waker));
        self
    }

    pub fn config(&self) -> ClientConfig {
        self.config.read().clone()
    }

    pub fn set_endpoint(&self, endpoint: String) {
        self.config.write().endpoint = endpoint;
    }

    /// Stop reporting. A request already on the wire runs to completion;
    /// its events are discarded.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Spawn a thread that uploads `job` and reports progress and outcome.
    pub fn start_upload(&self, job: UploadJob) {
        let tx       = self.tx.clone();
        let sd       = self.shutdown.clone();
        let waker    = self.waker.clone();
        let config   = self.config();
        let job_id   = job.job_id;

        let spawned = thread::Builder::new()
            .name(format!("upload-{job_id}"))
            .spawn(move || {
                let wake = || {
                    if let Some(w) = &waker {
                        w();
                    }
                };

                // Whole-percent throttle: a multi-GB video would otherwise
                // flood the channel with one event per read() call.
                let mut last_pct = None;
                let progress_tx = tx.clone();
                let progress_sd = sd.clone();
                let on_progress = |sent: u64, total: u64| {
                    if progress_sd.load(Ordering::Relaxed) || total == 0 {
                        return;
                    }
                    let pct = sent * 100 / total;
                    if last_pct == Some(pct) {
                        return;
                    }
                    last_pct = Some(pct);
                    // Best effort: a full channel just drops this report.
                    let _ = progress_tx.try_send(UploadEvent::Progress { job_id, sent, total });
                    wake();
                };

                let outcome = run_upload(&job, config, on_progress).map_err(|e| TransportFailure {
                    detail: format!("{e:#}"),
                });

                if sd.load(Ordering::Relaxed) {
                    tracing::debug!(%job_id, "worker shut down, discarding upload outcome");
                    return;
                }
                let _ = tx.send(UploadEvent::Finished { job_id, outcome });
                wake();
            });

        if let Err(e) = spawned {
            tracing::error!(%job_id, error = %e, "could not spawn upload thread");
            let _ = self.tx.send(UploadEvent::Finished {
                job_id,
                outcome: Err(TransportFailure { detail: format!("thread spawn failed: {e}") }),
            });
        }
    }
}

fn run_upload<F: FnMut(u64, u64)>(
    job:         &UploadJob,
    config:      ClientConfig,
    on_progress: F,
) -> anyhow::Result<framematch_core::DetectionResponse> {
    let endpoint = config.endpoint.clone();
    let client = DetectionClient::new(config);
    let resp = client
        .upload(job, on_progress)
        .with_context(|| format!("uploading job {} to {endpoint}", job.job_id))?;
    Ok(resp)
}

impl UploadDispatch for UploadWorker {
    fn dispatch(&mut self, job: UploadJob) {
        self.start_upload(job);
    }
}
