use crate::data::FileCheck;
use crate::types::View;
use crate::ui::state::AppState;
use crate::ui::theme;

pub struct LeftPanel;

impl LeftPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState, checks: &[FileCheck], settings: &str) {
        ui.heading("Crypto Dashboard");
        ui.separator();

        // 1. File Checks
        ui.label(egui::RichText::new("File Checks").strong());
        Self::show_file_checks(ui, checks);

        ui.separator();

        // 2. Navigation
        ui.label(egui::RichText::new("Navigation").strong());
        for view in View::all() {
            ui.radio_value(&mut state.view, view, view.label());
        }

        // 3. Coin and date range, only where a view consumes them
        if state.view.needs_selection() {
            ui.separator();
            Self::show_coin_selector(ui, state);
            ui.add_space(4.0);
            Self::show_date_range(ui, state);
        }

        ui.separator();

        ui.collapsing("Settings", |ui| {
            ui.label(egui::RichText::new(settings).monospace().small());
        });
    }

    fn show_file_checks(ui: &mut egui::Ui, checks: &[FileCheck]) {
        for check in checks {
            let (mark, color) = if check.exists {
                ("✅", theme::SUCCESS)
            } else {
                ("❌", theme::ERROR)
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(mark).color(color));
                ui.label(&check.file_name);
            });
        }
    }

    fn show_coin_selector(ui: &mut egui::Ui, state: &mut AppState) {
        ui.label("Select Coin:");
        let selected = state.coin.clone().unwrap_or_else(|| "-".to_string());
        egui::ComboBox::from_id_salt("coin_selector")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                for coin in &state.coins {
                    ui.selectable_value(&mut state.coin, Some(coin.clone()), coin);
                }
            });
    }

    fn show_date_range(ui: &mut egui::Ui, state: &mut AppState) {
        ui.label("Date range:");
        if let Some(bounds) = state.bounds {
            ui.label(
                egui::RichText::new(format!("Data covers {} to {}", bounds.start, bounds.end))
                    .small()
                    .color(theme::MUTED),
            );
        }

        let mut committed = false;
        ui.horizontal(|ui| {
            ui.label("From:");
            let response = ui.add(egui::TextEdit::singleline(&mut state.start_input).desired_width(90.0));
            committed |= response.lost_focus();
        });
        ui.horizontal(|ui| {
            ui.label("To:    ");
            let response = ui.add(egui::TextEdit::singleline(&mut state.end_input).desired_width(90.0));
            committed |= response.lost_focus();
        });

        ui.horizontal(|ui| {
            if ui.button("Apply").clicked() {
                committed = true;
            }
            if ui.button("Full range").clicked() {
                state.reset_range();
                committed = false;
            }
        });

        if committed {
            state.commit_inputs();
        }

        if let Some(error) = &state.date_error {
            ui.colored_label(theme::ERROR, error);
        }
    }
}
