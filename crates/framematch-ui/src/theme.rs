// crates/framematch-ui/src/theme.rs
use egui::{Color32, Context, Stroke, Style, Visuals};

// ── Palette ──────────────────────────────────────────────────────────────────
pub const ACCENT:        Color32 = Color32::from_rgb( 37,  99, 235);
pub const ACCENT_DIM:    Color32 = Color32::from_rgb( 29,  78, 186);
pub const ACCENT_HOVER:  Color32 = Color32::from_rgb( 96, 146, 255);

pub const DARK_BG_0:     Color32 = Color32::from_rgb( 12,  13,  18);
pub const DARK_BG_1:     Color32 = Color32::from_rgb( 19,  21,  28);
pub const DARK_BG_2:     Color32 = Color32::from_rgb( 27,  30,  40);
pub const DARK_BG_3:     Color32 = Color32::from_rgb( 37,  41,  54);

pub const DARK_TEXT:     Color32 = Color32::from_rgb(222, 226, 236);
pub const DARK_TEXT_DIM: Color32 = Color32::from_rgb(122, 128, 146);
pub const DARK_BORDER:   Color32 = Color32::from_rgb( 52,  57,  74);

pub const SUCCESS_GREEN: Color32 = Color32::from_rgb( 80, 190, 120);
pub const ERROR_RED:     Color32 = Color32::from_rgb(220,  85,  85);
pub const WARN_AMBER:    Color32 = Color32::from_rgb(230, 170,  60);

// Similarity badges
pub const GRADE_HIGH:     Color32 = SUCCESS_GREEN;
pub const GRADE_MODERATE: Color32 = WARN_AMBER;

// Upload progress bar
pub const TRACK_BG:      Color32 = Color32::from_rgb( 35,  35,  40);
pub const TRACK_FG:      Color32 = Color32::from_rgb( 90, 160, 255);

pub fn configure_style(ctx: &Context) {
    let mut style = Style::default();

    style.spacing.item_spacing     = egui::vec2(8.0, 6.0);
    style.spacing.window_margin    = egui::Margin::same(12);
    style.spacing.button_padding   = egui::vec2(12.0, 6.0);
    style.spacing.scroll.bar_width = 8.0;

    let cr = egui::CornerRadius::same(6);

    let mut v = Visuals::dark();
    v.panel_fill        = DARK_BG_1;
    v.window_fill       = DARK_BG_2;
    v.faint_bg_color    = DARK_BG_0;
    v.extreme_bg_color  = DARK_BG_0;
    v.window_stroke     = Stroke::new(1.0, DARK_BORDER);
    v.selection.bg_fill = ACCENT;
    v.hyperlink_color   = ACCENT_HOVER;

    v.widgets.noninteractive.bg_fill       = DARK_BG_2;
    v.widgets.noninteractive.bg_stroke     = Stroke::new(1.0, DARK_BORDER);
    v.widgets.noninteractive.fg_stroke     = Stroke::new(1.0, DARK_TEXT_DIM);
    v.widgets.noninteractive.corner_radius = cr;

    v.widgets.inactive.bg_fill       = DARK_BG_3;
    v.widgets.inactive.weak_bg_fill  = DARK_BG_3;
    v.widgets.inactive.fg_stroke     = Stroke::new(1.0, DARK_TEXT);
    v.widgets.inactive.corner_radius = cr;

    v.widgets.hovered.bg_fill        = ACCENT_DIM;
    v.widgets.hovered.weak_bg_fill   = ACCENT_DIM;
    v.widgets.hovered.bg_stroke      = Stroke::new(1.0, ACCENT_HOVER);
    v.widgets.hovered.corner_radius  = cr;

    v.widgets.active.bg_fill         = ACCENT;
    v.widgets.active.weak_bg_fill    = ACCENT;
    v.widgets.active.fg_stroke       = Stroke::new(2.0, Color32::WHITE);
    v.widgets.active.corner_radius   = cr;

    v.override_text_color = Some(DARK_TEXT);

    // set_style replaces the visuals too, so they travel inside the style.
    style.visuals = v;
    ctx.options_mut(|o| o.theme_preference = egui::ThemePreference::Dark);
    ctx.set_style_of(egui::Theme::Dark, style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_survives_style_install() {
        let ctx = Context::default();
        configure_style(&ctx);

        let style = ctx.style();
        assert_eq!(style.visuals.panel_fill, DARK_BG_1);
        assert_eq!(style.visuals.override_text_color, Some(DARK_TEXT));
        assert_eq!(style.visuals.selection.bg_fill, ACCENT);
        assert_eq!(style.spacing.button_padding, egui::vec2(12.0, 6.0));
    }
}
