// crates/framematch-ui/src/toasts.rs
//
// Top-right notification stack. Implements the core Notifier trait, so the
// upload controller can post to it without knowing anything about egui.
// Loading toasts stay until dismiss_pending(); the rest fade after
// TOAST_SECS.

use framematch_core::notify::{NoticeLevel, Notifier};

use crate::theme::{ACCENT, DARK_TEXT, ERROR_RED, SUCCESS_GREEN};
use egui::{Color32, RichText, Stroke};

const TOAST_SECS: f64 = 4.0;
const MAX_TOASTS: usize = 5;

struct Toast {
    level:   NoticeLevel,
    message: String,
    /// egui time of first display; set lazily because notify() has no ctx.
    shown:   Option<f64>,
}

#[derive(Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    fn expired(toast: &Toast, now: f64) -> bool {
        toast.level != NoticeLevel::Loading
            && toast.shown.map(|t| now - t > TOAST_SECS).unwrap_or(false)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.items.len()
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if self.items.is_empty() {
            return;
        }
        let now = ctx.input(|i| i.time);
        for t in &mut self.items {
            t.shown.get_or_insert(now);
        }
        self.items.retain(|t| !Self::expired(t, now));

        egui::Area::new(egui::Id::new("toasts"))
            .order(egui::Order::Tooltip)
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 48.0))
            .show(ctx, |ui| {
                for t in &self.items {
                    let (icon, color) = match t.level {
                        NoticeLevel::Loading => ("⏳", ACCENT),
                        NoticeLevel::Info    => ("ℹ", ACCENT),
                        NoticeLevel::Success => ("✅", SUCCESS_GREEN),
                        NoticeLevel::Error   => ("❌", ERROR_RED),
                    };
                    egui::Frame::new()
                        .fill(Color32::from_rgba_unmultiplied(18, 20, 28, 235))
                        .stroke(Stroke::new(1.0, color))
                        .corner_radius(egui::CornerRadius::same(6))
                        .inner_margin(egui::Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            ui.set_max_width(320.0);
                            ui.horizontal(|ui| {
                                if t.level == NoticeLevel::Loading {
                                    ui.spinner();
                                } else {
                                    ui.label(RichText::new(icon).color(color));
                                }
                                ui.label(RichText::new(&t.message).size(12.0).color(DARK_TEXT));
                            });
                        });
                    ui.add_space(6.0);
                }
            });

        // Keep repainting so timed toasts disappear without user input.
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, level: NoticeLevel, message: &str) {
        self.items.push(Toast { level, message: message.to_string(), shown: None });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
    }

    fn dismiss_pending(&mut self) {
        self.items.retain(|t| t.level != NoticeLevel::Loading);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_only_removes_loading() {
        let mut t = Toasts::default();
        t.notify(NoticeLevel::Loading, "Processing video…");
        t.notify(NoticeLevel::Error, "nope");
        t.dismiss_pending();
        assert_eq!(t.len(), 1);
        assert_eq!(t.items[0].level, NoticeLevel::Error);
    }

    #[test]
    fn stack_is_bounded() {
        let mut t = Toasts::default();
        for i in 0..(MAX_TOASTS + 3) {
            t.notify(NoticeLevel::Info, &format!("n{i}"));
        }
        assert_eq!(t.len(), MAX_TOASTS);
        assert_eq!(t.items[0].message, "n3");
    }

    #[test]
    fn loading_never_expires() {
        let loading = Toast { level: NoticeLevel::Loading, message: String::new(), shown: Some(0.0) };
        let info    = Toast { level: NoticeLevel::Info,    message: String::new(), shown: Some(0.0) };
        assert!(!Toasts::expired(&loading, 1_000.0));
        assert!(Toasts::expired(&info, TOAST_SECS + 1.0));
        assert!(!Toasts::expired(&info, 1.0));
    }
}
