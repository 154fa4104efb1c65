//! Tally theme
//!
//! Two palettes, dark (default) and light, plus the font sizes used by the
//! keypad, display and history panel. The app builds a [`ThemeConfig`] and
//! hands it to every widget that paints itself.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Colours for one theme variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub app_bg: Color32,
    pub display_bg: Color32,
    pub calc_bg: Color32,
    pub button_number: Color32,
    pub button_operator: Color32,
    pub button_function: Color32,
    pub equals: Color32,
    pub accent: Color32,
    pub history_bg: Color32,
    pub history_item: Color32,
    pub history_selected: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub text_expression: Color32,
    pub border: Color32,
}

impl Palette {
    pub const DARK: Palette = Palette {
        app_bg: Color32::from_rgb(18, 18, 24),
        display_bg: Color32::from_rgb(10, 10, 15),
        calc_bg: Color32::from_rgb(26, 26, 36),
        button_number: Color32::from_rgb(40, 40, 58),
        button_operator: Color32::from_rgb(60, 60, 88),
        button_function: Color32::from_rgb(34, 34, 50),
        equals: Color32::from_rgb(255, 107, 53),
        accent: Color32::from_rgb(100, 200, 255),
        history_bg: Color32::from_rgb(22, 22, 32),
        history_item: Color32::from_rgb(32, 32, 46),
        history_selected: Color32::from_rgb(50, 50, 75),
        text_primary: Color32::from_rgb(240, 240, 255),
        text_muted: Color32::from_rgb(130, 130, 165),
        text_expression: Color32::from_rgb(160, 160, 200),
        border: Color32::from_rgb(50, 50, 72),
    };

    pub const LIGHT: Palette = Palette {
        app_bg: Color32::from_rgb(240, 240, 245),
        display_bg: Color32::from_rgb(255, 255, 255),
        calc_bg: Color32::from_rgb(228, 228, 236),
        button_number: Color32::from_rgb(255, 255, 255),
        button_operator: Color32::from_rgb(210, 214, 230),
        button_function: Color32::from_rgb(236, 236, 242),
        equals: Color32::from_rgb(255, 107, 53),
        accent: Color32::from_rgb(0, 120, 200),
        history_bg: Color32::from_rgb(248, 248, 252),
        history_item: Color32::from_rgb(236, 236, 244),
        history_selected: Color32::from_rgb(210, 220, 240),
        text_primary: Color32::from_rgb(20, 20, 30),
        text_muted: Color32::from_rgb(110, 110, 130),
        text_expression: Color32::from_rgb(90, 90, 120),
        border: Color32::from_rgb(200, 200, 215),
    };
}

/// Font sizes in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    pub display: f32,
    pub expression: f32,
    pub button: f32,
    pub button_small: f32,
    pub heading: f32,
    pub history: f32,
    pub history_result: f32,
    pub body: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            display: 36.0,
            expression: 13.0,
            button: 17.0,
            button_small: 13.0,
            heading: 12.0,
            history: 12.0,
            history_result: 13.0,
            body: 13.0,
        }
    }
}

/// Everything the presentation layer needs to paint itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeConfig {
    pub dark: bool,
    pub palette: Palette,
    pub fonts: FontSizes,
    pub button_rounding: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::dark()
    }
}

impl ThemeConfig {
    pub fn dark() -> Self {
        Self {
            dark: true,
            palette: Palette::DARK,
            fonts: FontSizes::default(),
            button_rounding: 10.0,
            window_padding: 10.0,
            item_spacing: 6.0,
        }
    }

    pub fn light() -> Self {
        Self {
            dark: false,
            palette: Palette::LIGHT,
            ..Self::dark()
        }
    }

    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn display_font(&self) -> FontId {
        FontId::proportional(self.fonts.display)
    }

    pub fn expression_font(&self) -> FontId {
        FontId::proportional(self.fonts.expression)
    }

    pub fn history_font(&self) -> FontId {
        FontId::monospace(self.fonts.history)
    }

    pub fn history_result_font(&self) -> FontId {
        FontId::monospace(self.fonts.history_result)
    }

    /// Apply the theme to an egui context. Safe to call again after a
    /// dark/light switch.
    pub fn apply(&self, ctx: &egui::Context) {
        let p = &self.palette;
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.fonts.heading, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.fonts.body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.fonts.body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.fonts.button, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.fonts.history, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = if self.dark { Visuals::dark() } else { Visuals::light() };

        visuals.window_fill = p.app_bg;
        visuals.panel_fill = p.app_bg;
        visuals.faint_bg_color = p.history_item;
        visuals.extreme_bg_color = p.display_bg;
        visuals.override_text_color = Some(p.text_primary);

        visuals.window_rounding = Rounding::same(6.0);
        visuals.menu_rounding = Rounding::same(4.0);
        visuals.window_stroke = Stroke::new(1.0, p.border);

        let tint = |ws: &mut egui::style::WidgetVisuals, fill: Color32| {
            ws.bg_fill = fill;
            ws.weak_bg_fill = fill;
            ws.bg_stroke = Stroke::new(1.0, p.border);
            ws.fg_stroke = Stroke::new(1.0, p.text_primary);
            ws.rounding = Rounding::same(4.0);
        };
        tint(&mut visuals.widgets.noninteractive, p.app_bg);
        tint(&mut visuals.widgets.inactive, p.button_function);
        tint(&mut visuals.widgets.hovered, shade(p.button_function, self.dark, 0.12));
        tint(&mut visuals.widgets.active, shade(p.button_function, self.dark, 0.24));
        tint(&mut visuals.widgets.open, p.button_operator);

        visuals.selection.bg_fill = p.history_selected;
        visuals.selection.stroke = Stroke::new(1.0, p.accent);
        visuals.hyperlink_color = p.accent;

        style.visuals = visuals;
        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
        tracing::debug!(dark = self.dark, "theme applied");
    }
}

/// Shift a colour for hover/press feedback: lighter on dark themes, darker
/// on light ones. `amount` is in 0..=1.
pub fn shade(color: Color32, dark: bool, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let target = if dark { 255.0 } else { 0.0 };
    let mix = |c: u8| (c as f32 + (target - c as f32) * amount).round() as u8;
    Color32::from_rgb(mix(color.r()), mix(color.g()), mix(color.b()))
}

/// Menu bar frame in the theme's colours.
pub fn menu_bar<R>(
    ui: &mut egui::Ui,
    theme: &ThemeConfig,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    egui::Frame::none()
        .fill(theme.palette.app_bg)
        .stroke(Stroke::new(1.0, theme.palette.border))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| egui::menu::bar(ui, add_contents).inner)
}
