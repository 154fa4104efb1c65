//! Tally application window

use std::path::PathBuf;

use egui::{Context, Event};
use tallycore::engine::{BinaryOp, MemoryOp, Phase, Symbol};
use tallycore::keymap::{symbol_for_char, symbol_for_key, SHORTCUTS};
use tallycore::theme::menu_bar;
use tallycore::widgets::{memory_indicator, ButtonKind, CalcButton, HistoryRow};
use tallycore::{Calculator, HistoryLog, Preferences, ThemeConfig};

use crate::clipboard;

type PadKey = (&'static str, Symbol, ButtonKind);

const MEMORY_ROW: &[PadKey] = &[
    ("MC", Symbol::Memory(MemoryOp::Clear), ButtonKind::Function),
    ("MR", Symbol::Memory(MemoryOp::Recall), ButtonKind::Function),
    ("M+", Symbol::Memory(MemoryOp::Add), ButtonKind::Function),
    ("M-", Symbol::Memory(MemoryOp::Subtract), ButtonKind::Function),
];

const KEYPAD: &[&[PadKey]] = &[
    &[
        ("AC", Symbol::ClearAll, ButtonKind::Function),
        ("←", Symbol::Backspace, ButtonKind::Function),
        ("%", Symbol::Percent, ButtonKind::Function),
        ("√", Symbol::Sqrt, ButtonKind::Function),
    ],
    &[
        ("7", Symbol::Digit(7), ButtonKind::Number),
        ("8", Symbol::Digit(8), ButtonKind::Number),
        ("9", Symbol::Digit(9), ButtonKind::Number),
        ("÷", Symbol::Operator(BinaryOp::Divide), ButtonKind::Operator),
    ],
    &[
        ("4", Symbol::Digit(4), ButtonKind::Number),
        ("5", Symbol::Digit(5), ButtonKind::Number),
        ("6", Symbol::Digit(6), ButtonKind::Number),
        ("×", Symbol::Operator(BinaryOp::Multiply), ButtonKind::Operator),
    ],
    &[
        ("1", Symbol::Digit(1), ButtonKind::Number),
        ("2", Symbol::Digit(2), ButtonKind::Number),
        ("3", Symbol::Digit(3), ButtonKind::Number),
        ("-", Symbol::Operator(BinaryOp::Subtract), ButtonKind::Operator),
    ],
    &[
        ("±", Symbol::Negate, ButtonKind::Function),
        ("0", Symbol::Digit(0), ButtonKind::Number),
        (".", Symbol::Decimal, ButtonKind::Number),
        ("+", Symbol::Operator(BinaryOp::Add), ButtonKind::Operator),
    ],
    &[("=", Symbol::Equals, ButtonKind::Equals)],
];

pub struct TallyApp {
    calc: Calculator,
    theme: ThemeConfig,
    /// Preferences in effect, including command-line overrides
    prefs: Preferences,
    /// Preferences as they are on disk; menu changes are written here
    stored: Preferences,
    prefs_path: Option<PathBuf>,
    selected_history: Option<usize>,
    status: Option<String>,
    show_about: bool,
    show_shortcuts: bool,
}

impl TallyApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        prefs: Preferences,
        stored: Preferences,
        prefs_path: Option<PathBuf>,
    ) -> Self {
        let history = match prefs.history_cap {
            Some(cap) => HistoryLog::with_cap(cap),
            None => HistoryLog::new(),
        };
        Self {
            calc: Calculator::with_history(history),
            theme: ThemeConfig::for_mode(prefs.dark_mode),
            prefs,
            stored,
            prefs_path,
            selected_history: None,
            status: None,
            show_about: false,
            show_shortcuts: false,
        }
    }

    fn press(&mut self, symbol: Symbol) {
        let update = self.calc.press(symbol);
        self.selected_history = None;
        self.status = update.error.map(|e| e.to_string());
    }

    fn copy_result(&mut self) {
        let text = self.calc.copy_text();
        self.copy_text(&text, format!("copied {}", text));
    }

    fn copy_history(&mut self) {
        if self.calc.history().is_empty() {
            self.status = Some("history is empty".to_string());
            return;
        }
        let text = self.calc.history().to_text();
        let message = format!("copied {} entries", self.calc.history().len());
        self.copy_text(&text, message);
    }

    fn copy_text(&mut self, text: &str, message: String) {
        match clipboard::copy_to_clipboard(text) {
            Ok(()) => self.status = Some(message),
            Err(e) => {
                tracing::warn!(error = %e, "copy failed");
                self.status = Some("could not reach the clipboard".to_string());
            }
        }
    }

    fn paste_text(&mut self, text: &str) {
        if self.calc.enter_numeral(text) {
            self.selected_history = None;
            self.status = None;
        } else {
            self.status = Some("clipboard does not hold a number".to_string());
        }
    }

    fn paste_from_clipboard(&mut self) {
        match clipboard::paste_from_clipboard() {
            Ok(text) => self.paste_text(&text),
            Err(e) => {
                tracing::warn!(error = %e, "paste failed");
                self.status = Some("could not reach the clipboard".to_string());
            }
        }
    }

    fn recall(&mut self, index: usize, result: &str) {
        if self.calc.enter_numeral(result) {
            self.selected_history = Some(index);
        }
    }

    fn clear_history(&mut self) {
        self.calc.clear_history();
        self.selected_history = None;
        self.status = Some("history cleared".to_string());
    }

    fn set_dark_mode(&mut self, ctx: &Context, dark: bool) {
        self.prefs.dark_mode = dark;
        self.stored.dark_mode = dark;
        self.theme = ThemeConfig::for_mode(dark);
        self.theme.apply(ctx);
        self.save_prefs();
    }

    fn set_show_history(&mut self, show: bool) {
        self.prefs.show_history = show;
        self.stored.show_history = show;
        self.save_prefs();
    }

    fn save_prefs(&self) {
        if let Some(path) = &self.prefs_path {
            if let Err(e) = self.stored.save(path) {
                tracing::warn!(path = %path.display(), error = %e, "could not save preferences");
            }
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        // While a dialog is open, leave the keyboard to it.
        if self.show_about || self.show_shortcuts {
            return;
        }

        let events = ctx.input(|i| i.events.clone());
        for event in events {
            match event {
                Event::Text(text) => {
                    for symbol in text.chars().filter_map(symbol_for_char) {
                        self.press(symbol);
                    }
                }
                Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } if !modifiers.command => {
                    if let Some(symbol) = symbol_for_key(key) {
                        self.press(symbol);
                    }
                }
                Event::Copy => self.copy_result(),
                Event::Paste(text) => self.paste_text(&text),
                _ => {}
            }
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let theme = &self.theme;
        let p = &theme.palette;
        egui::Frame::none()
            .fill(p.display_bg)
            .stroke(egui::Stroke::new(1.0, p.border))
            .rounding(egui::Rounding::same(theme.button_rounding))
            .inner_margin(egui::Margin::symmetric(12.0, 8.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(self.calc.expression())
                                .font(theme.expression_font())
                                .color(p.text_expression),
                        )
                        .truncate(true),
                    );
                    let display_color = if self.calc.state().has_error() {
                        p.equals
                    } else {
                        p.text_primary
                    };
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(self.calc.display())
                                .font(theme.display_font())
                                .color(display_color)
                                .strong(),
                        )
                        .truncate(true),
                    );
                    memory_indicator(ui, theme, self.calc.memory());
                });
            });
    }

    fn render_row(&mut self, ui: &mut egui::Ui, row: &[PadKey], height: f32, small: bool) {
        let spacing = ui.spacing().item_spacing.x;
        let count = row.len().max(1) as f32;
        let width = ((ui.available_width() - spacing * (count - 1.0)) / count).max(24.0);
        let state = self.calc.state();
        let pending = if state.phase() == Phase::OperatorPending {
            state.operator()
        } else {
            None
        };

        let mut clicked = None;
        ui.horizontal(|ui| {
            for &(label, symbol, kind) in row {
                let highlighted = matches!(symbol, Symbol::Operator(op) if Some(op) == pending);
                let button = CalcButton::new(label, kind, &self.theme)
                    .size(egui::vec2(width, height))
                    .small(small)
                    .highlighted(highlighted);
                if ui.add(button).clicked() {
                    clicked = Some(symbol);
                }
            }
        });
        if let Some(symbol) = clicked {
            self.press(symbol);
        }
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let spacing = ui.spacing().item_spacing.y;
        let rows = (KEYPAD.len() + 1) as f32;
        let status_height = 18.0;
        let height = ((ui.available_height() - status_height - spacing * rows) / rows).clamp(28.0, 64.0);

        self.render_row(ui, MEMORY_ROW, (height * 0.7).max(24.0), true);
        for row in KEYPAD {
            self.render_row(ui, row, height, false);
        }

        if let Some(status) = &self.status {
            ui.label(
                egui::RichText::new(status)
                    .font(egui::FontId::proportional(self.theme.fonts.heading))
                    .color(self.theme.palette.text_muted),
            );
        }
    }

    fn render_history(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme;
        let p = theme.palette;

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("HISTORY  ({})", self.calc.history().len()))
                    .font(egui::FontId::proportional(theme.fonts.heading))
                    .color(p.text_muted)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let enabled = !self.calc.history().is_empty();
                if ui.add_enabled(enabled, egui::Button::new("clear")).clicked() {
                    self.clear_history();
                }
            });
        });
        ui.separator();

        if self.calc.history().is_empty() {
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("no calculations yet").color(p.text_muted));
            });
            return;
        }

        let mut recall: Option<(usize, String)> = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, entry) in self.calc.history().all().enumerate().rev() {
                    let row = HistoryRow::new(entry, &theme).selected(self.selected_history == Some(index));
                    if ui.add(row).clicked() {
                        recall = Some((index, entry.result_text().to_string()));
                    }
                }
            });
        if let Some((index, result)) = recall {
            self.recall(index, &result);
        }
    }

    fn render_menu(&mut self, ctx: &Context) {
        let theme = self.theme;
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, &theme, |ui| {
                ui.menu_button("edit", |ui| {
                    if ui.button("copy result    Ctrl+C").clicked() {
                        self.copy_result();
                        ui.close_menu();
                    }
                    if ui.button("paste          Ctrl+V").clicked() {
                        self.paste_from_clipboard();
                        ui.close_menu();
                    }
                    if ui.button("copy history").clicked() {
                        self.copy_history();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("clear history").clicked() {
                        self.clear_history();
                        ui.close_menu();
                    }
                });
                ui.menu_button("view", |ui| {
                    let mut dark = self.prefs.dark_mode;
                    if ui.checkbox(&mut dark, "dark mode").changed() {
                        self.set_dark_mode(ctx, dark);
                        ui.close_menu();
                    }
                    let mut show = self.prefs.show_history;
                    if ui.checkbox(&mut show, "history panel").changed() {
                        self.set_show_history(show);
                        ui.close_menu();
                    }
                });
                ui.menu_button("memory", |ui| {
                    for &(label, symbol, _) in MEMORY_ROW {
                        if ui.button(label).clicked() {
                            self.press(symbol);
                            ui.close_menu();
                        }
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("keyboard shortcuts").clicked() {
                        self.show_shortcuts = true;
                        ui.close_menu();
                    }
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if self.prefs.dark_mode { "☀ light" } else { "☾ dark" };
                    if ui.selectable_label(false, label).clicked() {
                        let dark = !self.prefs.dark_mode;
                        self.set_dark_mode(ctx, dark);
                    }
                });
            });
        });
    }

    fn render_dialogs(&mut self, ctx: &Context) {
        if self.show_about {
            egui::Window::new("about tally")
                .collapsible(false)
                .resizable(false)
                .default_width(240.0)
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("tally");
                        ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(4.0);
                        ui.label("a calculator with history");
                    });
                    ui.separator();
                    ui.label("one operator at a time, evaluated left to right");
                    ui.label("history is kept until you clear it or quit");
                    ui.vertical_centered(|ui| {
                        if ui.button("ok").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }

        if self.show_shortcuts {
            egui::Window::new("keyboard shortcuts")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    egui::Grid::new("shortcuts").num_columns(2).striped(true).show(ui, |ui| {
                        for (keys, action) in SHORTCUTS {
                            ui.monospace(*keys);
                            ui.label(*action);
                            ui.end_row();
                        }
                    });
                    ui.vertical_centered(|ui| {
                        if ui.button("ok").clicked() {
                            self.show_shortcuts = false;
                        }
                    });
                });
        }
    }
}

impl eframe::App for TallyApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        self.render_menu(ctx);

        if self.prefs.show_history {
            egui::SidePanel::right("history")
                .resizable(true)
                .default_width(240.0)
                .min_width(160.0)
                .frame(
                    egui::Frame::none()
                        .fill(self.theme.palette.history_bg)
                        .inner_margin(egui::Margin::same(8.0)),
                )
                .show(ctx, |ui| self.render_history(ui));
        }

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.palette.calc_bg)
                    .inner_margin(egui::Margin::same(self.theme.window_padding)),
            )
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(8.0);
                self.render_keypad(ui);
            });

        self.render_dialogs(ctx);
    }
}
