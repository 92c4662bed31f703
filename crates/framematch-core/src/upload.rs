// crates/framematch-core/src/upload.rs
//
// UploadController: the submit lifecycle for one form instance.
//
// State machine:
//
//   Idle / Succeeded / Failed
//       → submit() with both slots filled
//       → Uploading { percent: 0 }, "processing" notice, job dispatched
//
//   Uploading
//       → Progress events raise percent (never lowers it)
//       → submit() is a no-op
//
//   Uploading → Finished(Ok(success: true))   → Succeeded, page state replaced
//   Uploading → Finished(Ok(success: false))  → Failed(server message)
//   Uploading → Finished(Err(transport))      → Failed(generic message)
//
// The network work happens elsewhere (framematch-net's UploadWorker); this
// type only sees jobs going out and events coming back, so every transition
// is testable without a socket.

use uuid::Uuid;

use crate::detection::{DetectionResponse, DetectionResult};
use crate::error::SubmitError;
use crate::helpers::progress::MonotonicPercent;
use crate::helpers::url::resolve;
use crate::intake::FileIntake;
use crate::media_types::{FilePart, MediaKind, UploadEvent, UploadJob};
use crate::notify::{NoticeLevel, Notifier};
use crate::preview::PreviewBackend;
use crate::state::{PageState, UploadState};

pub const PROCESSING_NOTICE:  &str = "Processing video…";
pub const SUCCESS_NOTICE:     &str = "Processing done";
pub const SERVICE_FALLBACK:   &str = "Detection failed";
pub const TRANSPORT_MESSAGE:  &str = "Something went wrong. Check backend logs.";

/// Hands a job to whatever performs the HTTP request.
pub trait UploadDispatch {
    fn dispatch(&mut self, job: UploadJob);
}

#[derive(Default)]
pub struct UploadController {
    state:      UploadState,
    active_job: Option<Uuid>,
    progress:   MonotonicPercent,
}

impl UploadController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn active_job(&self) -> Option<Uuid> {
        self.active_job
    }

    /// False only while a request is in flight.
    pub fn can_submit(&self) -> bool {
        !self.state.is_uploading()
    }

    /// Start a submission. Returns the dispatched job id, or `None` if a
    /// submission was already in flight (no-op).
    pub fn submit<B: PreviewBackend>(
        &mut self,
        intake:     &FileIntake<B>,
        notifier:   &mut dyn Notifier,
        dispatcher: &mut dyn UploadDispatch,
    ) -> Result<Option<Uuid>, SubmitError> {
        if self.state.is_uploading() {
            tracing::debug!("submit ignored: upload already in flight");
            return Ok(None);
        }

        let (Some(image), Some(video)) = (intake.slot(MediaKind::Image), intake.slot(MediaKind::Video)) else {
            let err = SubmitError::Validation;
            notifier.notify(NoticeLevel::Error, &err.to_string());
            self.state = UploadState::Failed { message: err.to_string() };
            return Err(err);
        };

        let job = UploadJob {
            job_id: Uuid::new_v4(),
            image:  FilePart::from(image),
            video:  FilePart::from(video),
        };
        let job_id = job.job_id;

        self.state      = UploadState::Uploading { percent: 0 };
        self.active_job = Some(job_id);
        self.progress   = MonotonicPercent::default();
        notifier.notify(NoticeLevel::Loading, PROCESSING_NOTICE);

        tracing::info!(%job_id, image = %job.image.name, video = %job.video.name, "submitting");
        dispatcher.dispatch(job);
        Ok(Some(job_id))
    }

    /// Apply an event from the upload thread. Events for any job other than
    /// the active one are dropped.
    pub fn handle_event(
        &mut self,
        event:    UploadEvent,
        notifier: &mut dyn Notifier,
        page:     &mut PageState,
        base_url: &str,
    ) {
        if self.active_job != Some(event.job_id()) {
            tracing::debug!(job_id = %event.job_id(), "stale upload event dropped");
            return;
        }

        match event {
            UploadEvent::Progress { sent, total, .. } => {
                if let Some(percent) = self.progress.advance(sent, total) {
                    self.state = UploadState::Uploading { percent };
                }
            }
            UploadEvent::Finished { job_id, outcome } => {
                self.active_job = None;
                self.progress   = MonotonicPercent::default();
                notifier.dismiss_pending();

                match outcome {
                    Ok(resp) if resp.success => {
                        tracing::info!(%job_id, "detection succeeded");
                        apply_success(resp, page, base_url);
                        self.state = UploadState::Succeeded;
                        notifier.notify(NoticeLevel::Success, SUCCESS_NOTICE);
                    }
                    Ok(resp) => {
                        let message = resp
                            .error
                            .filter(|e| !e.trim().is_empty())
                            .unwrap_or_else(|| SERVICE_FALLBACK.to_string());
                        tracing::warn!(%job_id, error = %message, "detection service reported failure");
                        notifier.notify(NoticeLevel::Error, &message);
                        self.state = UploadState::Failed { message };
                    }
                    Err(failure) => {
                        tracing::error!(%job_id, detail = %failure.detail, "upload transport failure");
                        notifier.notify(NoticeLevel::Error, TRANSPORT_MESSAGE);
                        self.state = UploadState::Failed { message: TRANSPORT_MESSAGE.to_string() };
                    }
                }
            }
        }
    }

    /// Return a terminal state to Idle, e.g. after the user picks a new file.
    pub fn reset(&mut self) {
        if !self.state.is_uploading() {
            self.state = UploadState::Idle;
        }
    }
}

fn apply_success(resp: DetectionResponse, page: &mut PageState, base_url: &str) {
    page.result          = Some(DetectionResult::new(resp.detections.unwrap_or_default()));
    page.video_url       = resp.video_url.as_deref().map(|p| resolve(base_url, p));
    page.summary         = resp.message;
    page.base_url        = base_url.to_string();
    page.processing_done = true;
}
