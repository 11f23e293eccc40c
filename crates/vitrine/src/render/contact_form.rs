use eframe::egui;

use crate::contact::ContactForm;
use crate::render::chrome;
use crate::theme::Theme;

/// Draw the contact section: intro text plus the form widgets.
///
/// Returns true when the submit control was clicked this frame.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &mut egui::Ui,
    form: &mut ContactForm,
    intro: &str,
    package_names: &[String],
    theme: &Theme,
    rect: egui::Rect,
    interactive: bool,
    scale: f32,
) -> bool {
    let mut content_top = chrome::section_title(ui, "Contact", theme, rect, scale);

    if !intro.is_empty() {
        let color = Theme::with_opacity(theme.foreground, 0.75);
        let galley = ui.painter().layout(
            intro.to_string(),
            egui::FontId::proportional(theme.body_size * 0.9 * scale),
            color,
            (rect.width() * 0.6).min(640.0 * scale),
        );
        let height = galley.rect.height();
        ui.painter().galley(
            egui::pos2(rect.center().x - galley.rect.width() / 2.0, content_top),
            galley,
            color,
        );
        content_top += height + 24.0 * scale;
    }

    let form_width = (rect.width() * 0.5).clamp(320.0 * scale, 560.0 * scale);
    let form_rect = egui::Rect::from_min_size(
        egui::pos2(rect.center().x - form_width / 2.0, content_top),
        egui::vec2(form_width, rect.bottom() - content_top),
    );

    let mut submit = false;
    let mut form_ui = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(form_rect)
            .id_salt("contact_form"),
    );
    if !interactive {
        form_ui.disable();
    }
    form_ui.spacing_mut().item_spacing.y = 14.0 * scale;
    let row = egui::vec2(form_width, 40.0 * scale);

    form_ui.add_sized(
        row,
        egui::TextEdit::singleline(&mut form.name)
            .hint_text("Your Name")
            .id(egui::Id::new("contact_name")),
    );
    form_ui.add_sized(
        row,
        egui::TextEdit::singleline(&mut form.email)
            .hint_text("Your Email")
            .id(egui::Id::new("contact_email")),
    );
    form_ui.add_sized(
        row,
        egui::TextEdit::singleline(&mut form.phone)
            .hint_text("Your Phone")
            .id(egui::Id::new("contact_phone")),
    );

    egui::ComboBox::from_id_salt("contact_package")
        .width(form_width)
        .selected_text(form.package.as_deref().unwrap_or("Select Package"))
        .show_ui(&mut form_ui, |ui| {
            for name in package_names {
                let selected = form.package.as_deref() == Some(name.as_str());
                if ui.selectable_label(selected, name).clicked() {
                    form.package = Some(name.clone());
                }
            }
        });

    form_ui.add_sized(
        egui::vec2(form_width, 120.0 * scale),
        egui::TextEdit::multiline(&mut form.message)
            .hint_text("Your Message")
            .id(egui::Id::new("contact_message")),
    );

    let label = if form.is_sending() {
        "Sending..."
    } else {
        "Send via WhatsApp"
    };
    form_ui.add_enabled_ui(!form.is_sending(), |ui| {
        let button = egui::Button::new(
            egui::RichText::new(label)
                .color(egui::Color32::WHITE)
                .size(theme.body_size * 0.9 * scale),
        )
        .fill(theme.send_button);
        if ui.add_sized(egui::vec2(form_width, 48.0 * scale), button).clicked() {
            submit = true;
        }
    });

    submit
}
