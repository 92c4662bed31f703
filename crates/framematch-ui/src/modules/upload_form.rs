// crates/framematch-ui/src/modules/upload_form.rs
//
// Two drop zones (reference image, video), the submit button and the
// upload progress bar. Zone rects are remembered each frame so app.rs can
// route an OS file drop to the zone under the pointer.

use egui::{Align, Color32, Layout, Pos2, Rect, RichText, Sense, Stroke, Ui};
use rfd::FileDialog;

use framematch_core::commands::FormCommand;
use framematch_core::media_types::{MediaKind, SelectedFile};
use framematch_core::state::UploadState;

use super::{FormView, PanelModule};
use crate::helpers::format::{fit_file_name, format_bytes};
use crate::theme::{
    ACCENT, DARK_BG_0, DARK_BG_2, DARK_BORDER, DARK_TEXT, DARK_TEXT_DIM, ERROR_RED,
    SUCCESS_GREEN, TRACK_BG, TRACK_FG, WARN_AMBER,
};

const ZONE_HEIGHT:   f32 = 220.0;
const BAR_HEIGHT:    f32 = 10.0;
const SUBMIT_LABEL:  &str = "🔍 Detect face in video";
const WORKING_LABEL: &str = "Processing…";

#[derive(Default)]
pub struct UploadFormModule {
    drop_zones: [Option<Rect>; 2],
}

impl UploadFormModule {
    /// Which zone, if any, contains `pos` as of the last frame.
    pub fn zone_at(&self, pos: Pos2) -> Option<MediaKind> {
        MediaKind::ALL
            .into_iter()
            .find(|k| self.drop_zones[k.index()].is_some_and(|r| r.contains(pos)))
    }

    fn zone_title(kind: MediaKind) -> &'static str {
        match kind {
            MediaKind::Image => "🖼 Reference Image",
            MediaKind::Video => "🎬 Video",
        }
    }

    fn drop_zone(&mut self, ui: &mut Ui, kind: MediaKind, file: Option<&SelectedFile>, cmd: &mut Vec<FormCommand>) {
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(Self::zone_title(kind)).size(13.0).strong());
                if file.is_some() {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.small_button("✕").on_hover_text("Remove").clicked() {
                            cmd.push(FormCommand::ClearFile(kind));
                        }
                    });
                }
            });

            let width = ui.available_width();
            let (rect, resp) = ui.allocate_exact_size(egui::vec2(width, ZONE_HEIGHT), Sense::click());
            self.drop_zones[kind.index()] = Some(rect);

            let dragging = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
            let targeted = dragging
                && ui.ctx().input(|i| i.pointer.hover_pos()).is_some_and(|p| rect.contains(p));

            let border = if targeted {
                Stroke::new(2.0, ACCENT)
            } else if resp.hovered() {
                Stroke::new(1.5, ACCENT.gamma_multiply(0.6))
            } else {
                Stroke::new(1.0, DARK_BORDER)
            };
            let painter = ui.painter_at(rect.expand(2.0));
            painter.rect_filled(rect, 8.0, if targeted { DARK_BG_2 } else { DARK_BG_0 });
            painter.rect_stroke(rect, 8, border, egui::StrokeKind::Inside);

            match file {
                None => {
                    painter.text(
                        rect.center() - egui::vec2(0.0, 10.0),
                        egui::Align2::CENTER_CENTER,
                        "Drop a file here",
                        egui::FontId::proportional(14.0),
                        DARK_TEXT,
                    );
                    painter.text(
                        rect.center() + egui::vec2(0.0, 12.0),
                        egui::Align2::CENTER_CENTER,
                        "or click to browse",
                        egui::FontId::proportional(11.0),
                        DARK_TEXT_DIM,
                    );
                }
                Some(f) => Self::draw_selected(ui, rect, f),
            }

            if resp.clicked() {
                if let Some(path) = FileDialog::new()
                    .add_filter(kind.label(), kind.extensions())
                    .pick_file()
                {
                    cmd.push(FormCommand::SelectFile { kind, path });
                }
            }

            if let Some(f) = file {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(fit_file_name(&f.name, 40)).size(11.0).color(DARK_TEXT),
                    )
                    .on_hover_text(f.path.display().to_string());
                    ui.label(RichText::new(format_bytes(f.size_bytes)).size(10.0).color(DARK_TEXT_DIM));
                });
                if !kind.accepts(&f.path) {
                    ui.label(
                        RichText::new(format!("⚠ This does not look like a {} file", kind.label().to_lowercase()))
                            .size(10.0)
                            .color(WARN_AMBER),
                    );
                }
            }
        });
    }

    fn draw_selected(ui: &mut Ui, rect: Rect, file: &SelectedFile) {
        let inner = rect.shrink(8.0);
        match file.kind {
            MediaKind::Image => {
                egui::Image::from_uri(file.preview.uri())
                    .maintain_aspect_ratio(true)
                    .fit_to_exact_size(inner.size())
                    .corner_radius(6)
                    .paint_at(ui, inner);
            }
            MediaKind::Video => {
                // No decoding here; a file card stands in for a player.
                let painter = ui.painter_at(rect);
                painter.text(
                    inner.center() - egui::vec2(0.0, 14.0),
                    egui::Align2::CENTER_CENTER,
                    "🎞",
                    egui::FontId::proportional(36.0),
                    ACCENT,
                );
                painter.text(
                    inner.center() + egui::vec2(0.0, 22.0),
                    egui::Align2::CENTER_CENTER,
                    fit_file_name(&file.name, 36),
                    egui::FontId::proportional(12.0),
                    DARK_TEXT,
                );
            }
        }
    }

    fn progress_bar(ui: &mut Ui, percent: u8) {
        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, BAR_HEIGHT), Sense::hover());
        let painter = ui.painter();
        painter.rect_filled(rect, 5.0, TRACK_BG);
        let filled = Rect::from_min_size(
            rect.min,
            egui::vec2(rect.width() * f32::from(percent) / 100.0, rect.height()),
        );
        painter.rect_filled(filled, 5.0, TRACK_FG);
        ui.label(RichText::new(format!("Uploading… {percent}%")).size(11.0).color(DARK_TEXT_DIM));
    }

    fn status_banner(ui: &mut Ui, state: &UploadState) {
        let (text, color) = match state {
            UploadState::Failed { message } => (format!("❌ {message}"), ERROR_RED),
            UploadState::Succeeded => ("✅ Processing done".to_string(), SUCCESS_GREEN),
            _ => return,
        };
        egui::Frame::new()
            .fill(color.gamma_multiply(0.12))
            .stroke(Stroke::new(1.0, color.gamma_multiply(0.6)))
            .corner_radius(egui::CornerRadius::same(6))
            .inner_margin(egui::Margin::symmetric(10, 6))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(text).size(12.0).color(color));
            });
    }
}

impl PanelModule for UploadFormModule {
    fn name(&self) -> &str {
        "Upload"
    }

    fn ui(&mut self, ui: &mut Ui, view: &FormView, cmd: &mut Vec<FormCommand>) {
        // ── Drop zones ──────────────────────────────────────────────────────
        ui.columns(2, |cols| {
            for (col, kind) in cols.iter_mut().zip(MediaKind::ALL) {
                self.drop_zone(col, kind, view.slot(kind), cmd);
            }
        });

        ui.add_space(12.0);

        // ── Submit ──────────────────────────────────────────────────────────
        let uploading = view.upload.is_uploading();
        let label = if uploading { WORKING_LABEL } else { SUBMIT_LABEL };
        let button = egui::Button::new(RichText::new(label).size(14.0).color(Color32::WHITE))
            .fill(if uploading { ACCENT.gamma_multiply(0.5) } else { ACCENT })
            .min_size(egui::vec2(ui.available_width(), 36.0));
        if ui.add_enabled(!uploading, button).clicked() {
            cmd.push(FormCommand::Submit);
        }

        ui.add_space(8.0);

        if let Some(percent) = view.upload.percent() {
            Self::progress_bar(ui, percent);
        } else {
            Self::status_banner(ui, view.upload);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_lookup_uses_last_frame_rects() {
        let mut m = UploadFormModule::default();
        assert_eq!(m.zone_at(Pos2::new(10.0, 10.0)), None);

        m.drop_zones[MediaKind::Image.index()] =
            Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(100.0, 100.0)));
        m.drop_zones[MediaKind::Video.index()] =
            Some(Rect::from_min_size(Pos2::new(120.0, 0.0), egui::vec2(100.0, 100.0)));

        assert_eq!(m.zone_at(Pos2::new(50.0, 50.0)), Some(MediaKind::Image));
        assert_eq!(m.zone_at(Pos2::new(150.0, 50.0)), Some(MediaKind::Video));
        assert_eq!(m.zone_at(Pos2::new(110.0, 50.0)), None);
    }
}
