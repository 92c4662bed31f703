// crates/framematch-ui/src/modules/results.rs
use egui::{Align, Layout, RichText, ScrollArea, Stroke, Ui};

use framematch_core::commands::FormCommand;
use framematch_core::render::{format_similarity, render, ConfidenceGrade, MatchCard, ResultView};

use super::{FormView, PanelModule};
use crate::theme::{
    ACCENT, DARK_BG_0, DARK_BG_2, DARK_BORDER, DARK_TEXT, DARK_TEXT_DIM, GRADE_HIGH,
    GRADE_MODERATE,
};

const CARD_IMAGE_HEIGHT: f32 = 180.0;

#[derive(Default)]
pub struct ResultsModule;

impl ResultsModule {
    fn grade_color(grade: ConfidenceGrade) -> egui::Color32 {
        match grade {
            ConfidenceGrade::High     => GRADE_HIGH,
            ConfidenceGrade::Moderate => GRADE_MODERATE,
        }
    }

    fn placeholder(ui: &mut Ui, text: &str) {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(text).size(13.0).color(DARK_TEXT_DIM));
        });
        ui.add_space(24.0);
    }

    fn card(ui: &mut Ui, card: &MatchCard) {
        let color = Self::grade_color(card.grade);
        egui::Frame::new()
            .fill(DARK_BG_2)
            .stroke(Stroke::new(1.0, DARK_BORDER))
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("Frame {}", card.frame)).size(13.0).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(format_similarity(card.similarity))
                                .size(13.0)
                                .color(color)
                                .strong(),
                        );
                        egui::Frame::new()
                            .fill(color.gamma_multiply(0.15))
                            .corner_radius(egui::CornerRadius::same(4))
                            .inner_margin(egui::Margin::symmetric(6, 2))
                            .show(ui, |ui| {
                                ui.label(RichText::new(card.grade.label()).size(10.0).color(color));
                            });
                    });
                });

                if let Some(url) = &card.image_url {
                    ui.add_space(4.0);
                    ui.add(
                        egui::Image::from_uri(url.as_str())
                            .max_height(CARD_IMAGE_HEIGHT)
                            .maintain_aspect_ratio(true)
                            .corner_radius(6)
                            .show_loading_spinner(true),
                    );
                }

                if !card.message.is_empty() {
                    ui.add_space(2.0);
                    ui.label(RichText::new(&card.message).size(11.0).color(DARK_TEXT_DIM));
                }
            });
    }
}

impl PanelModule for ResultsModule {
    fn name(&self) -> &str {
        "Results"
    }

    fn ui(&mut self, ui: &mut Ui, view: &FormView, cmd: &mut Vec<FormCommand>) {
        egui::Frame::new()
            .fill(DARK_BG_0)
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                // ── Header ──────────────────────────────────────────────────
                ui.horizontal(|ui| {
                    ui.label(RichText::new("🎯 Detection Result").size(15.0).strong().color(DARK_TEXT));
                    if let Some(url) = &view.page.video_url {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if ui
                                .button(RichText::new("▶ Open processed video").size(11.0).color(ACCENT))
                                .on_hover_text(url.as_str())
                                .clicked()
                            {
                                cmd.push(FormCommand::OpenVideo(url.clone()));
                            }
                        });
                    }
                });
                if let Some(summary) = view.page.summary.as_deref().filter(|s| !s.is_empty()) {
                    ui.label(RichText::new(summary).size(11.0).color(DARK_TEXT_DIM));
                }
                ui.separator();

                // ── Cards ───────────────────────────────────────────────────
                match render(view.page.result.as_ref(), &view.page.base_url) {
                    ResultView::NoResultsYet => Self::placeholder(ui, "No results yet."),
                    ResultView::NoMatch => {
                        Self::placeholder(ui, "❌ The reference image was not found in this video.")
                    }
                    ResultView::Cards(cards) => {
                        ui.label(
                            RichText::new(format!("{} matching frame(s)", cards.len()))
                                .size(11.0)
                                .color(DARK_TEXT_DIM),
                        );
                        ScrollArea::vertical().auto_shrink([false, true]).show(ui, |ui| {
                            for card in &cards {
                                Self::card(ui, card);
                                ui.add_space(6.0);
                            }
                        });
                    }
                }
            });
    }
}
