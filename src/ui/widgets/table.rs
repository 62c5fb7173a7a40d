use crate::ui::theme;
use crate::views::TableSpec;

pub struct TableView;

impl TableView {
    pub fn show(ui: &mut egui::Ui, id: impl std::hash::Hash, table: &TableSpec) {
        if table.is_truncated() {
            ui.label(
                egui::RichText::new(format!("Showing {} of {} rows", table.rows.len(), table.total_rows))
                    .color(theme::MUTED),
            );
        }

        egui::ScrollArea::both()
            .id_salt(("table_scroll", &id))
            .max_height(360.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                egui::Grid::new(id).striped(true).min_col_width(60.0).show(ui, |ui| {
                    for column in &table.columns {
                        ui.label(egui::RichText::new(column).strong());
                    }
                    ui.end_row();

                    for row in &table.rows {
                        for cell in row {
                            ui.label(cell);
                        }
                        ui.end_row();
                    }
                });
            });
    }
}
