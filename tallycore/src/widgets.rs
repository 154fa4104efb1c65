//! Custom widgets: rounded keypad buttons and history rows

use crate::history::HistoryEntry;
use crate::theme::{shade, ThemeConfig};
use egui::{Color32, Response, Sense, Ui, Widget};

/// What a keypad button does, which decides its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Number,
    Operator,
    Function,
    Equals,
}

impl ButtonKind {
    pub fn fill(self, theme: &ThemeConfig) -> Color32 {
        let p = &theme.palette;
        match self {
            ButtonKind::Number => p.button_number,
            ButtonKind::Operator => p.button_operator,
            ButtonKind::Function => p.button_function,
            ButtonKind::Equals => p.equals,
        }
    }

    fn text_color(self, theme: &ThemeConfig) -> Color32 {
        match self {
            ButtonKind::Equals => Color32::WHITE,
            ButtonKind::Operator => theme.palette.accent,
            _ => theme.palette.text_primary,
        }
    }
}

/// A rounded keypad button. Brightens on hover, more on press.
pub struct CalcButton<'a> {
    text: &'a str,
    kind: ButtonKind,
    size: egui::Vec2,
    small: bool,
    highlighted: bool,
    theme: &'a ThemeConfig,
}

impl<'a> CalcButton<'a> {
    pub fn new(text: &'a str, kind: ButtonKind, theme: &'a ThemeConfig) -> Self {
        Self {
            text,
            kind,
            size: egui::vec2(56.0, 44.0),
            small: false,
            highlighted: false,
            theme,
        }
    }

    pub fn size(mut self, size: egui::Vec2) -> Self {
        self.size = size;
        self
    }

    /// Smaller label, for the memory row.
    pub fn small(mut self, small: bool) -> Self {
        self.small = small;
        self
    }

    /// Draw an accent outline, e.g. for the pending operator.
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }
}

impl<'a> Widget for CalcButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let theme = self.theme;
            let painter = ui.painter();
            let base = self.kind.fill(theme);
            let fill = if response.is_pointer_button_down_on() {
                shade(base, theme.dark, 0.22)
            } else if response.hovered() {
                shade(base, theme.dark, 0.10)
            } else {
                base
            };

            painter.rect_filled(rect, theme.button_rounding, fill);
            let stroke = if self.highlighted {
                egui::Stroke::new(2.0, theme.palette.accent)
            } else {
                egui::Stroke::new(1.0, theme.palette.border)
            };
            painter.rect_stroke(rect, theme.button_rounding, stroke);

            let font_size = if self.small {
                theme.fonts.button_small
            } else {
                theme.fonts.button
            };
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.text,
                egui::FontId::proportional(font_size),
                self.kind.text_color(theme),
            );
        }

        response.on_hover_cursor(egui::CursorIcon::PointingHand)
    }
}

/// One line in the history panel: expression above, result below.
pub struct HistoryRow<'a> {
    entry: &'a HistoryEntry,
    selected: bool,
    theme: &'a ThemeConfig,
}

impl<'a> HistoryRow<'a> {
    pub fn new(entry: &'a HistoryEntry, theme: &'a ThemeConfig) -> Self {
        Self {
            entry,
            selected: false,
            theme,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl<'a> Widget for HistoryRow<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let theme = self.theme;
        let p = &theme.palette;
        let height = theme.fonts.history + theme.fonts.history_result + 14.0;
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(ui.available_width(), height), Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let fill = if self.selected {
                p.history_selected
            } else if response.hovered() {
                shade(p.history_item, theme.dark, 0.08)
            } else {
                p.history_item
            };
            painter.rect_filled(rect, 4.0, fill);

            let left = rect.min.x + 8.0;
            painter.text(
                egui::pos2(left, rect.min.y + 4.0),
                egui::Align2::LEFT_TOP,
                self.entry.expression_text(),
                theme.history_font(),
                p.text_muted,
            );
            painter.text(
                egui::pos2(rect.max.x - 8.0, rect.max.y - 4.0),
                egui::Align2::RIGHT_BOTTOM,
                format!("= {}", self.entry.result_text()),
                theme.history_result_font(),
                p.text_primary,
            );
        }

        response.on_hover_text("click to reuse this result")
    }
}

/// Status strip under the display showing the memory register.
pub fn memory_indicator(ui: &mut Ui, theme: &ThemeConfig, memory: f64) {
    let text = if memory != 0.0 {
        format!("M  {}", crate::format::format_number(memory))
    } else {
        String::new()
    };
    ui.label(
        egui::RichText::new(text)
            .font(egui::FontId::proportional(theme.fonts.heading))
            .color(theme.palette.accent),
    );
}
