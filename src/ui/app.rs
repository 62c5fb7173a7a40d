use super::panels::{LeftPanel, MainPanel};
use super::services::Session;
use super::state::AppState;
use super::theme;
use crate::data::FileCheck;
use crate::error::Result;
use crate::views::{ViewMemo, ViewRenderer};

pub const APP_TITLE: &str = "Crypto Sentiment & Forecast Dashboard";

/// A running dashboard, or the single screen shown when startup failed.
enum Mode {
    Ready {
        session: Session,
        state: AppState,
        settings: String,
        checks: Vec<FileCheck>,
        memo: ViewMemo,
    },
    Fatal(String),
}

pub struct DashboardApp {
    mode: Mode,
    left_panel: LeftPanel,
    main_panel: MainPanel,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, startup: Result<Session>) -> Self {
        theme::apply(&cc.egui_ctx);
        egui_extras::install_image_loaders(&cc.egui_ctx);
        Self::from_startup(startup)
    }

    pub fn from_startup(startup: Result<Session>) -> Self {
        let mode = match startup.and_then(Self::ready) {
            Ok(mode) => mode,
            Err(e) => Mode::Fatal(e.to_string()),
        };
        Self {
            mode,
            left_panel: LeftPanel::new(),
            main_panel: MainPanel::new(),
        }
    }

    fn ready(session: Session) -> Result<Mode> {
        let datasets = session.datasets()?;
        let state = AppState::new(&datasets);
        let settings = match session.config().source() {
            Some(path) => format!("# {}\n{}", path.display(), session.config().to_toml()?),
            None => session.config().to_toml()?,
        };
        let checks = session.paths().file_checks();
        Ok(Mode::Ready {
            session,
            state,
            settings,
            checks,
            memo: ViewMemo::new(),
        })
    }

    pub fn fatal_message(&self) -> Option<&str> {
        match &self.mode {
            Mode::Fatal(message) => Some(message),
            Mode::Ready { .. } => None,
        }
    }

    fn show_fatal(ctx: &egui::Context, message: &str) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                ui.heading(egui::RichText::new("The dashboard cannot start").color(theme::ERROR));
                ui.add_space(12.0);
                ui.label(message);
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new("Check the data directory settings and restart.").color(theme::MUTED),
                );
            });
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(message) = self.fatal_message() {
            Self::show_fatal(ctx, message);
            return;
        }
        let Mode::Ready {
            session,
            state,
            settings,
            checks,
            memo,
        } = &mut self.mode
        else {
            return;
        };

        let datasets = match session.datasets() {
            Ok(datasets) => datasets,
            Err(e) => {
                log::error!("Datasets unavailable: {}", e);
                self.mode = Mode::Fatal(e.to_string());
                return;
            }
        };

        egui::SidePanel::left("left_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.left_panel.show(ui, state, checks, settings);
                });
            });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            MainPanel::show_footer(ui, state);
        });

        let config = session.config().get();
        let renderer = ViewRenderer::new(&datasets, &config.display, &config.data.slide_pattern);
        let selection = state.selection();
        let output = memo.get_or_render(&renderer, state.view, selection.as_ref());

        egui::CentralPanel::default().show(ctx, |ui| {
            self.main_panel.show(ui, state, output);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use std::path::PathBuf;

    #[test]
    fn test_startup_error_opens_fatal_screen() {
        let app = DashboardApp::from_startup(Err(DashboardError::NoDataDirectory {
            base: PathBuf::from("/data"),
            prefix: "News Data Crypto".to_string(),
        }));
        assert_eq!(app.fatal_message(), Some("Couldn't find a 'News Data Crypto' folder under /data"));
    }
}
