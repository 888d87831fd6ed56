use eframe::egui;
use flashgen::theme::{FileStore, MemoryStore, load_theme, save_theme};
use flashgen::{GeneratorOptions, KeyValueStore, Theme};
use flashgen_async_runtime::{FlashcardCommand, FlashcardUpdate};
use tokio::sync::mpsc;

use crate::logger::AppLogger;
use crate::ui_components::theme_toggle_button;
use crate::views::{FlashcardState, show_flashcards};

pub struct FlashgenApp {
    state: FlashcardState,
    options: GeneratorOptions,
    status: String,

    // Theme and where it is persisted
    theme: Theme,
    settings: Box<dyn KeyValueStore>,

    // Async infrastructure
    command_tx: mpsc::UnboundedSender<FlashcardCommand>,
    update_rx: mpsc::UnboundedReceiver<FlashcardUpdate>,

    logger: AppLogger,
    show_log: bool,

    _tokio_handle: tokio::runtime::Handle,
}

impl FlashgenApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        // Spawn worker task
        tokio_handle.spawn(crate::worker::worker_task(command_rx, update_tx));

        let settings: Box<dyn KeyValueStore> = match FileStore::default_path() {
            Some(path) => Box::new(FileStore::open(path)),
            None => {
                log::warn!("No config directory found, settings will not persist");
                Box::new(MemoryStore::new())
            }
        };
        let options = GeneratorOptions::default()
            .with_store(settings.as_ref())
            .with_env_overrides();
        let system_theme = cc.egui_ctx.system_theme().map(from_egui_theme);
        let theme = load_theme(settings.as_ref(), system_theme);
        cc.egui_ctx.set_theme(to_egui_theme(theme));

        Self {
            state: FlashcardState::default(),
            options,
            status: String::new(),
            theme,
            settings,
            command_tx,
            update_rx,
            logger,
            show_log: false,
            _tokio_handle: tokio_handle,
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggled();
        ctx.set_theme(to_egui_theme(self.theme));
        if let Err(e) = save_theme(self.settings.as_mut(), self.theme) {
            log::warn!("Failed to save theme: {e}");
        }
    }

    fn save_options(&mut self) {
        if let Err(e) = self.options.save_to_store(self.settings.as_mut()) {
            log::warn!("Failed to save generator settings: {e}");
        }
    }

    fn apply_update(&mut self, update: FlashcardUpdate) {
        if update.finishes_generation() {
            self.state.generating = false;
        }

        match update {
            FlashcardUpdate::Generated { cards } => {
                self.status = format!("Generated {} flashcards", cards.len());
                self.state.set_cards(cards);
            }
            FlashcardUpdate::GenerationFailed { message } => {
                self.status = "Generation failed".to_string();
                self.state.clear_cards(message);
            }
            FlashcardUpdate::TextImported { path, text } => {
                self.status = format!("Imported {}", path.display());
                self.state.topic = text;
            }
            FlashcardUpdate::ExportComplete { path, card_count } => {
                self.status = export_status(card_count, &path);
            }
            FlashcardUpdate::Error { message } => {
                self.status = format!("Error: {message}");
            }
        }
    }
}

fn export_status(card_count: usize, path: &std::path::Path) -> String {
    format!("Exported {} flashcards -> {}", card_count, path.display())
}

fn to_egui_theme(theme: Theme) -> egui::Theme {
    match theme {
        Theme::Dark => egui::Theme::Dark,
        Theme::Light => egui::Theme::Light,
    }
}

fn from_egui_theme(theme: egui::Theme) -> Theme {
    match theme {
        egui::Theme::Dark => Theme::Dark,
        egui::Theme::Light => Theme::Light,
    }
}

impl eframe::App for FlashgenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process all pending updates from worker
        while let Ok(update) = self.update_rx.try_recv() {
            self.apply_update(update);
        }

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🃏 Flashcards");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if theme_toggle_button(ui, self.theme) {
                        self.toggle_theme(ctx);
                    }
                    ui.toggle_value(&mut self.show_log, "📜 Log");
                });
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            let latest = self.logger.latest_message();
            let text = if self.status.is_empty() {
                latest.as_deref().unwrap_or("")
            } else {
                self.status.as_str()
            };
            ui.label(text);
        });

        if self.show_log {
            egui::TopBottomPanel::bottom("log")
                .resizable(true)
                .default_height(160.0)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.strong("Log");
                        if ui.small_button("Clear").clicked() {
                            self.logger.clear();
                        }
                    });
                    egui::ScrollArea::vertical()
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            for entry in self.logger.entries() {
                                ui.monospace(entry.display_line());
                            }
                        });
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if show_flashcards(ui, &mut self.state, &mut self.options, &self.command_tx) {
                self.save_options();
            }
        });

        // Worker updates do not wake the UI on their own
        let poll = if self.state.generating { 100 } else { 250 };
        ctx.request_repaint_after(std::time::Duration::from_millis(poll));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_status_is_plain_ascii() {
        let status = export_status(3, std::path::Path::new("cards.csv"));
        assert_eq!(status, "Exported 3 flashcards -> cards.csv");
    }

    #[test]
    fn test_theme_conversion_round_trips() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(from_egui_theme(to_egui_theme(theme)), theme);
        }
    }
}
