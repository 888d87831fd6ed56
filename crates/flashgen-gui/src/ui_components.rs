use eframe::egui;

/// Two-sided card that shows the term, or the definition once flipped
pub struct FlipCard<'a> {
    term: &'a str,
    definition: &'a str,
    flipped: bool,
    selected: bool,
    size: egui::Vec2,
}

impl<'a> FlipCard<'a> {
    pub fn new(term: &'a str, definition: &'a str) -> Self {
        Self {
            term,
            definition,
            flipped: false,
            selected: false,
            size: egui::vec2(220.0, 140.0),
        }
    }

    pub fn flipped(mut self, flipped: bool) -> Self {
        self.flipped = flipped;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn size(mut self, size: egui::Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(self.size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let visuals = ui.style().interact_selectable(&response, self.flipped);
            let stroke = if self.selected {
                ui.visuals().selection.stroke
            } else {
                visuals.bg_stroke
            };
            let painter = ui.painter();
            painter.rect(rect, 8.0, visuals.bg_fill, stroke, egui::StrokeKind::Inside);

            let (caption, text) = if self.flipped {
                ("Definition", self.definition)
            } else {
                ("Term", self.term)
            };
            let text_color = visuals.text_color();

            painter.text(
                rect.left_top() + egui::vec2(10.0, 8.0),
                egui::Align2::LEFT_TOP,
                caption,
                egui::FontId::proportional(11.0),
                ui.visuals().weak_text_color(),
            );

            let font = if self.flipped {
                egui::FontId::proportional(14.0)
            } else {
                egui::FontId::proportional(18.0)
            };
            let galley = painter.layout(text.to_owned(), font, text_color, rect.width() - 24.0);
            let pos = rect.center() - galley.size() / 2.0;
            painter.galley(pos, galley, text_color);
        }

        response.on_hover_cursor(egui::CursorIcon::PointingHand)
    }
}

/// Button labelled with the theme a click switches to
pub fn theme_toggle_button(ui: &mut egui::Ui, theme: flashgen::Theme) -> bool {
    let label = match theme {
        flashgen::Theme::Dark => "☀ Light mode",
        flashgen::Theme::Light => "🌙 Dark mode",
    };
    ui.button(label).clicked()
}

/// Single-line text field with a label in front
pub fn labeled_text_field(ui: &mut egui::Ui, label: &str, value: &mut String, password: bool) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::TextEdit::singleline(value).password(password))
            .changed()
    })
    .inner
}
