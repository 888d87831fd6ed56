use eframe::egui;
use flashgen::{FlashcardError, FlashcardSet, GeneratorOptions};
use flashgen_async_runtime::FlashcardCommand;
use tokio::sync::mpsc;

use crate::ui_components::{FlipCard, labeled_text_field};

mod flashcard_layout;
use flashcard_layout::{DeckView, grid_columns};

const CARD_SIZE: egui::Vec2 = egui::vec2(220.0, 140.0);
const CARD_SPACING: f32 = 12.0;

#[derive(Default)]
pub struct FlashcardState {
    pub topic: String,

    // Current set, replaced wholesale by each generation
    pub cards: Option<FlashcardSet>,
    pub deck: DeckView,

    // Trigger stays disabled while a request is in flight
    pub generating: bool,

    // Inline message shown in place of the cards
    pub message: Option<String>,
}

impl FlashcardState {
    pub fn set_cards(&mut self, cards: FlashcardSet) {
        self.deck = DeckView::new(cards.len());
        self.cards = Some(cards);
        self.message = None;
    }

    pub fn clear_cards(&mut self, message: String) {
        self.cards = None;
        self.deck = DeckView::default();
        self.message = Some(message);
    }
}

/// Draws the flashcard screen. Returns true when the user edited the
/// generator settings this frame.
pub fn show_flashcards(
    ui: &mut egui::Ui,
    state: &mut FlashcardState,
    options: &mut GeneratorOptions,
    command_tx: &mpsc::UnboundedSender<FlashcardCommand>,
) -> bool {
    let mut settings_changed = false;
    egui::SidePanel::left("flashcard_controls")
        .min_width(300.0)
        .show_inside(ui, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Flashcard Generator");
                ui.separator();

                show_input_section(ui, state, command_tx);
                ui.add_space(10.0);
                ui.separator();

                show_generate_section(ui, state, options, command_tx);
                ui.add_space(10.0);
                ui.separator();

                settings_changed = show_settings_section(ui, options);
                ui.add_space(10.0);
                ui.separator();

                show_export_section(ui, state, command_tx);
            });
        });

    show_cards_area(ui, state);
    settings_changed
}

fn show_input_section(
    ui: &mut egui::Ui,
    state: &mut FlashcardState,
    command_tx: &mpsc::UnboundedSender<FlashcardCommand>,
) {
    ui.label("Topic, text, or URL:");
    ui.add(
        egui::TextEdit::multiline(&mut state.topic)
            .desired_rows(6)
            .desired_width(f32::INFINITY)
            .hint_text("e.g. Roman history, or https://…"),
    );

    if ui.button("📂 Import text...").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Text", &["txt", "md"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            log::info!("Importing text: {}", path.display());
            let _ = command_tx.send(FlashcardCommand::ImportText { path });
        }
    }
}

fn show_generate_section(
    ui: &mut egui::Ui,
    state: &mut FlashcardState,
    options: &GeneratorOptions,
    command_tx: &mpsc::UnboundedSender<FlashcardCommand>,
) {
    ui.horizontal(|ui| {
        let button = egui::Button::new("✨ Generate Flashcards");
        if ui.add_enabled(!state.generating, button).clicked() {
            request_generation(state, options, command_tx);
        }
        if state.generating {
            ui.spinner();
            ui.label("Generating...");
        }
    });

    if let Some(message) = &state.message {
        ui.colored_label(ui.visuals().warn_fg_color, message.as_str());
    }
}

fn request_generation(
    state: &mut FlashcardState,
    options: &GeneratorOptions,
    command_tx: &mpsc::UnboundedSender<FlashcardCommand>,
) {
    let topic = state.topic.trim();
    if topic.is_empty() {
        state.message = Some(FlashcardError::EmptyInput.to_string());
        return;
    }
    if let Err(e) = options.validate() {
        state.message = Some(e.to_string());
        return;
    }

    log::info!("Generating flashcards for {:?}", flashgen::classify(topic));
    let sent = command_tx.send(FlashcardCommand::Generate {
        topic: topic.to_string(),
        options: options.clone(),
    });
    if sent.is_ok() {
        state.generating = true;
        state.message = None;
    } else {
        state.message = Some("Background worker is not running".to_string());
    }
}

fn show_settings_section(ui: &mut egui::Ui, options: &mut GeneratorOptions) -> bool {
    egui::CollapsingHeader::new("Generator settings")
        .default_open(options.api_key.is_empty())
        .show(ui, |ui| {
            let model = labeled_text_field(ui, "Model:", &mut options.model, false);
            let key = labeled_text_field(ui, "API key:", &mut options.api_key, true);
            model || key
        })
        .body_returned
        .unwrap_or(false)
}

fn show_export_section(
    ui: &mut egui::Ui,
    state: &FlashcardState,
    command_tx: &mpsc::UnboundedSender<FlashcardCommand>,
) {
    let Some(cards) = state.cards.as_ref().filter(|c| !c.is_empty()) else {
        return;
    };

    ui.label(format!("{} flashcards", cards.len()));
    if ui.button("💾 Export CSV...").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name("flashcards.csv")
            .save_file()
        {
            log::info!("Exporting flashcards to: {}", path.display());
            let _ = command_tx.send(FlashcardCommand::ExportCsv {
                cards: cards.clone(),
                output_path: path,
            });
        }
    }
}

fn handle_keyboard(ui: &egui::Ui, deck: &mut DeckView) {
    if deck.is_empty() || ui.ctx().wants_keyboard_input() {
        return;
    }
    ui.input(|i| {
        if i.key_pressed(egui::Key::ArrowRight) {
            deck.select_next();
        }
        if i.key_pressed(egui::Key::ArrowLeft) {
            deck.select_previous();
        }
        if i.key_pressed(egui::Key::Space) || i.key_pressed(egui::Key::Enter) {
            deck.flip_selected();
        }
    });
}

fn show_cards_area(ui: &mut egui::Ui, state: &mut FlashcardState) {
    egui::CentralPanel::default().show_inside(ui, |ui| {
        let Some(cards) = state.cards.as_ref().filter(|c| !c.is_empty()) else {
            ui.centered_and_justified(|ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("No flashcards");
                    ui.label("Enter a topic and click 'Generate Flashcards'");
                });
            });
            return;
        };

        handle_keyboard(ui, &mut state.deck);

        ui.horizontal(|ui| {
            if ui.button("🔄 Flip all").clicked() {
                state.deck.flip_all();
            }
            if ui.button("↩ Reset").clicked() {
                state.deck.reset();
            }
            ui.label("Click a card or press Space to flip; Left/Right to move");
        });
        ui.separator();

        let columns = grid_columns(ui.available_width(), CARD_SIZE.x, CARD_SPACING);

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("flashcard_grid")
                .spacing([CARD_SPACING, CARD_SPACING])
                .show(ui, |ui| {
                    for (i, card) in cards.iter().enumerate() {
                        let response = FlipCard::new(&card.term, &card.definition)
                            .flipped(state.deck.is_flipped(i))
                            .selected(state.deck.selected() == i)
                            .size(CARD_SIZE)
                            .show(ui);
                        if response.clicked() {
                            state.deck.flip(i);
                        }
                        if (i + 1) % columns == 0 {
                            ui.end_row();
                        }
                    }
                });
        });
    });
}
