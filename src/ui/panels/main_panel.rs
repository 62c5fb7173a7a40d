use crate::types::View;
use crate::ui::services::ChartExporter;
use crate::ui::state::AppState;
use crate::ui::theme;
use crate::ui::widgets::{ChartView, TableView};
use crate::views::{Block, ChartSpec, LegendItem, NoticeLevel, ViewOutput};
use std::path::PathBuf;

pub struct MainPanel;

impl MainPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState, output: &ViewOutput) {
        ui.heading(&output.title);
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, block) in output.blocks.iter().enumerate() {
                    Self::show_block(ui, state, index, block);
                    ui.add_space(6.0);
                }
            });
    }

    fn show_block(ui: &mut egui::Ui, state: &mut AppState, index: usize, block: &Block) {
        match block {
            Block::Notice { level, text } => Self::show_notice(ui, *level, text),
            Block::Text { text } => {
                ui.label(text);
            }
            Block::Section { heading, bullets } => {
                ui.label(egui::RichText::new(heading).strong().size(16.0));
                for bullet in bullets {
                    ui.label(format!("  • {}", bullet));
                }
            }
            Block::Subheading { text } => {
                ui.label(egui::RichText::new(text).strong().size(15.0));
            }
            Block::Chart { chart } => {
                ChartView::show(ui, chart);
                Self::show_export_button(ui, state, chart);
            }
            Block::Legend { items } => Self::show_legend(ui, items),
            Block::Table { table } => TableView::show(ui, ("view_table", index), table),
            Block::Images { paths } => Self::show_images(ui, paths),
        }
    }

    fn show_notice(ui: &mut egui::Ui, level: NoticeLevel, text: &str) {
        let (icon, color) = match level {
            NoticeLevel::Info => ("ℹ", theme::INFO),
            NoticeLevel::Warning => ("⚠", theme::WARNING),
            NoticeLevel::Error => ("⛔", theme::ERROR),
        };
        egui::Frame::group(ui.style())
            .stroke(egui::Stroke::new(1.0, color))
            .show(ui, |ui| {
                ui.colored_label(color, format!("{} {}", icon, text));
            });
    }

    fn show_legend(ui: &mut egui::Ui, items: &[LegendItem]) {
        ui.horizontal_wrapped(|ui| {
            for item in items {
                ui.colored_label(theme::color(&item.color), "■");
                ui.label(&item.label);
                ui.add_space(12.0);
            }
        });
    }

    fn show_images(ui: &mut egui::Ui, paths: &[PathBuf]) {
        for path in paths {
            ui.add(
                egui::Image::new(format!("file://{}", path.display()))
                    .max_width(ui.available_width())
                    .fit_to_original_size(1.0),
            );
            ui.add_space(8.0);
        }
    }

    fn show_export_button(ui: &mut egui::Ui, state: &mut AppState, chart: &ChartSpec) {
        if !ui.small_button("Export chart JSON").clicked() {
            return;
        }
        state.status_message = match ChartExporter::export_with_dialog(chart) {
            Ok(Some(path)) => format!("Exported {} to {}", chart.id, path.display()),
            Ok(None) => "Export cancelled".to_string(),
            Err(e) => {
                log::error!("Chart export failed: {}", e);
                format!("Export failed: {}", e)
            }
        };
    }

    pub fn show_footer(ui: &mut egui::Ui, state: &AppState) {
        ui.horizontal(|ui| {
            let views: Vec<&str> = View::all().iter().map(|v| v.label()).collect();
            ui.label(
                egui::RichText::new(format!("Views: {}", views.join(" · ")))
                    .small()
                    .color(theme::MUTED),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(&state.status_message).small());
            });
        });
    }
}
