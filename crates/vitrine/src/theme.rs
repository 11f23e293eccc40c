use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub foreground: Color32,
    pub heading_color: Color32,
    pub accent: Color32,
    pub header_background: Color32,
    pub card_background: Color32,
    pub scrim: Color32,
    pub send_button: Color32,
    pub hero_title_size: f32,
    pub section_title_size: f32,
    pub body_size: f32,
    pub small_size: f32,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::WHITE,
            foreground: Color32::from_rgb(0x2B, 0x2B, 0x2B),
            heading_color: Color32::from_rgb(0x16, 0x21, 0x3E),
            accent: Color32::from_rgb(0x0E, 0x7C, 0x86),
            header_background: Color32::from_rgb(0xFA, 0xFA, 0xFA),
            card_background: Color32::from_rgb(0xF4, 0xF6, 0xF7),
            scrim: Color32::from_rgba_unmultiplied(0, 0, 0, 140),
            send_button: Color32::from_rgb(0x25, 0xD3, 0x66),
            hero_title_size: 72.0,
            section_title_size: 44.0,
            body_size: 20.0,
            small_size: 15.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x14, 0x17, 0x1A),
            foreground: Color32::from_rgb(0xC8, 0xC8, 0xC8),
            heading_color: Color32::WHITE,
            accent: Color32::from_rgb(0x3F, 0xB6, 0xC1),
            header_background: Color32::from_rgb(0x1B, 0x1F, 0x24),
            card_background: Color32::from_rgb(0x20, 0x26, 0x2B),
            scrim: Color32::from_rgba_unmultiplied(0, 0, 0, 180),
            send_button: Color32::from_rgb(0x25, 0xD3, 0x66),
            hero_title_size: 72.0,
            section_title_size: 44.0,
            body_size: 20.0,
            small_size: 15.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (opacity * 255.0) as u8)
    }
}
