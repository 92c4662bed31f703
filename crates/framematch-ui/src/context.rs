// crates/framematch-ui/src/context.rs
//
// AppContext owns the runtime handles that are not part of PageState:
//   AppContext
//     ├── worker   : upload thread handle + event channel
//     ├── toasts   : notification stack (the Notifier the controller posts to)
//     ├── intake   : the two file slots and their preview references
//     └── upload   : submission state machine

use framematch_core::commands::FormCommand;
use framematch_core::media_types::MediaKind;
use framematch_core::intake::FileIntake;
use framematch_core::notify::{NoticeLevel, Notifier};
use framematch_core::state::PageState;
use framematch_core::upload::UploadController;
use framematch_net::UploadWorker;

use crate::preview::EguiPreviewBackend;
use crate::toasts::Toasts;

pub struct AppContext {
    pub worker: UploadWorker,
    pub toasts: Toasts,
    pub intake: FileIntake<EguiPreviewBackend>,
    pub upload: UploadController,
}

impl AppContext {
    pub fn new(worker: UploadWorker, ctx: egui::Context) -> Self {
        Self {
            worker,
            toasts: Toasts::default(),
            intake: FileIntake::new(EguiPreviewBackend::new(ctx)),
            upload: UploadController::new(),
        }
    }

    /// Drain the upload channel into the controller. Called once per frame
    /// before any panel draws.
    pub fn poll_upload(&mut self, page: &mut PageState, base_url: &str) {
        while let Ok(event) = self.worker.rx.try_recv() {
            self.upload.handle_event(event, &mut self.toasts, page, base_url);
        }
    }

    /// Apply one file-slot command. Returns false for commands that are not
    /// about file slots.
    pub fn apply_file_command(&mut self, cmd: &FormCommand) -> bool {
        let (kind, outcome) = match cmd {
            FormCommand::SelectFile { kind, path } => {
                (*kind, self.intake.select_file(*kind, Some(path.clone())))
            }
            FormCommand::DropFiles { kind, files } => (*kind, self.intake.drop_file(*kind, files)),
            FormCommand::ClearFile(kind) => {
                self.intake.clear(*kind);
                (*kind, Ok(true))
            }
            _ => return false,
        };

        match outcome {
            Ok(true) => self.upload.reset(),
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(kind = ?kind, error = %e, "file intake failed");
                self.toasts.notify(NoticeLevel::Error, &Self::intake_message(kind));
            }
        }
        true
    }

    fn intake_message(kind: MediaKind) -> String {
        format!("Could not open the selected {} file.", kind.label().to_lowercase())
    }

    pub fn submit(&mut self) {
        // Validation failures are already reported through the toasts.
        if let Err(e) = self.upload.submit(&self.intake, &mut self.toasts, &mut self.worker) {
            tracing::debug!(error = %e, "submit rejected");
        }
    }

    pub fn shutdown(&mut self) {
        self.worker.shutdown();
        self.intake.release_all();
    }
}
