// src/app.rs (framematch-ui)
use framematch_core::commands::FormCommand;
use framematch_core::media_types::{DroppedFile, MediaKind};
use framematch_core::state::PageState;
use framematch_net::UploadWorker;

use crate::context::AppContext;
use crate::modules::{
    results::ResultsModule,
    upload_form::UploadFormModule,
    FormView, PanelModule,
};
use crate::settings::{Settings, SETTINGS_KEY};
use crate::theme::{configure_style, ACCENT, DARK_TEXT_DIM};
use eframe::egui;

// ── App ───────────────────────────────────────────────────────────────────────

pub struct FrameMatchApp {
    page:          PageState,
    context:       AppContext,
    settings:      Settings,
    /// Endpoint text box contents; applied on Enter or focus loss.
    endpoint_edit: String,
    upload_panel:  UploadFormModule,
    results_panel: ResultsModule,
    /// Commands emitted by panels each frame, processed after the UI pass
    pending_cmds:  Vec<FormCommand>,
}

impl FrameMatchApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        configure_style(&cc.egui_ctx);

        let settings = Settings::load(cc.storage);
        tracing::info!(endpoint = %settings.endpoint, timeout_secs = settings.timeout_secs, "starting");

        let repaint_ctx = cc.egui_ctx.clone();
        let worker = UploadWorker::new(settings.client_config())
            .with_waker(move || repaint_ctx.request_repaint());

        Self {
            page:          PageState::default(),
            context:       AppContext::new(worker, cc.egui_ctx.clone()),
            endpoint_edit: settings.endpoint.clone(),
            settings,
            upload_panel:  UploadFormModule::default(),
            results_panel: ResultsModule,
            pending_cmds:  Vec::new(),
        }
    }

    fn process_command(&mut self, ctx: &egui::Context, cmd: FormCommand) {
        if self.context.apply_file_command(&cmd) {
            return;
        }
        match cmd {
            FormCommand::Submit => self.context.submit(),
            FormCommand::OpenVideo(url) => {
                tracing::info!(%url, "opening processed video");
                ctx.open_url(egui::OpenUrl::new_tab(url));
            }
            FormCommand::SetEndpoint(endpoint) => {
                let endpoint = endpoint.trim().to_string();
                if endpoint.is_empty() || endpoint == self.settings.endpoint {
                    return;
                }
                tracing::info!(%endpoint, "endpoint changed");
                self.settings.endpoint = endpoint.clone();
                self.context.worker.set_endpoint(endpoint);
            }
            FormCommand::SelectFile { .. } | FormCommand::DropFiles { .. } | FormCommand::ClearFile(_) => {}
        }
    }

    /// Route OS file drops to the zone under the pointer; when the pointer
    /// position is unknown, guess the zone from the first file's extension.
    fn handle_drag_and_drop(&mut self, ctx: &egui::Context) {
        let (dropped, pointer) = ctx.input(|i| (i.raw.dropped_files.clone(), i.pointer.hover_pos()));
        if dropped.is_empty() {
            return;
        }

        let files: Vec<DroppedFile> = dropped
            .into_iter()
            .map(|f| DroppedFile { path: f.path, name: f.name })
            .collect();

        let kind = pointer
            .and_then(|p| self.upload_panel.zone_at(p))
            .or_else(|| files.iter().find_map(|f| f.path.as_deref()).and_then(MediaKind::from_path));

        match kind {
            Some(kind) => self.pending_cmds.push(FormCommand::DropFiles { kind, files }),
            None => tracing::debug!(count = files.len(), "drop outside any zone ignored"),
        }
    }

    fn top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_centered(|ui| {
            ui.label(egui::RichText::new("🎥 FrameMatch").strong().size(15.0).color(ACCENT));
            ui.separator();
            ui.label(egui::RichText::new("Find a face or object from an image inside a video").size(12.0).weak());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.endpoint_edit)
                        .desired_width(220.0)
                        .hint_text(framematch_net::DEFAULT_ENDPOINT),
                );
                if resp.lost_focus() {
                    self.pending_cmds.push(FormCommand::SetEndpoint(self.endpoint_edit.clone()));
                }
                ui.label(egui::RichText::new("Service").size(11.0).color(DARK_TEXT_DIM));
            });
        });
    }
}

// ── eframe::App ───────────────────────────────────────────────────────────────

impl eframe::App for FrameMatchApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, SETTINGS_KEY, &self.settings);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.context.shutdown();
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_drag_and_drop(ctx);
        self.context.poll_upload(&mut self.page, &self.settings.endpoint);

        egui::TopBottomPanel::top("top_panel")
            .exact_height(40.0)
            .show(ctx, |ui| self.top_bar(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                let view = FormView {
                    image:    self.context.intake.slot(MediaKind::Image),
                    video:    self.context.intake.slot(MediaKind::Video),
                    upload:   self.context.upload.state(),
                    page:     &self.page,
                };

                self.upload_panel.ui(ui, &view, &mut self.pending_cmds);

                if self.page.processing_done {
                    ui.add_space(16.0);
                    self.results_panel.ui(ui, &view, &mut self.pending_cmds);
                }
            });
        });

        self.context.toasts.show(ctx);

        // ── Process commands emitted by panels this frame ─────────────────────
        let cmds: Vec<FormCommand> = self.pending_cmds.drain(..).collect();
        for cmd in cmds {
            self.process_command(ctx, cmd);
        }

        if self.context.upload.state().is_uploading() {
            // Worker events also wake us; this keeps the spinner moving.
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
