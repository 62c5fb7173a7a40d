use crate::views::palette;
use egui::Color32;

/// Page background of the dashboard.
pub const BACKGROUND: Color32 = Color32::from_rgb(0x0E, 0x11, 0x17);
pub const SIDEBAR: Color32 = Color32::from_rgb(0x16, 0x1A, 0x22);
pub const TITLE: Color32 = Color32::from_rgb(0xE6, 0xE6, 0xE6);
pub const LABEL: Color32 = Color32::from_rgb(0xDD, 0xDD, 0xDD);
pub const GRID: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
pub const MUTED: Color32 = Color32::from_rgb(0x9A, 0xA0, 0xA6);

pub const INFO: Color32 = Color32::from_rgb(0x29, 0xB6, 0xF6);
pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xAB, 0x00);
pub const ERROR: Color32 = Color32::from_rgb(0xEF, 0x53, 0x50);
pub const SUCCESS: Color32 = Color32::from_rgb(0x66, 0xBB, 0x6A);

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = SIDEBAR;
    visuals.extreme_bg_color = SIDEBAR;
    visuals.override_text_color = Some(LABEL);
    visuals.widgets.noninteractive.bg_stroke.color = GRID;
    ctx.set_visuals(visuals);
}

/// `#RRGGBB` to a colour. Malformed values paint grey.
pub fn color(hex: &str) -> Color32 {
    palette::parse_hex(hex)
        .map(|[r, g, b]| Color32::from_rgb(r, g, b))
        .unwrap_or(Color32::GRAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parses_hex() {
        assert_eq!(color("#FFAB00"), Color32::from_rgb(255, 171, 0));
        assert_eq!(color("orange"), Color32::GRAY);
    }
}
