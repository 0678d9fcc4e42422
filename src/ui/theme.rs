use ratatui::style::Color;

pub const GOLD: Color = Color::Rgb(0xc1, 0x9b, 0x76);
pub const BACKGROUND: Color = Color::Rgb(0x0b, 0x0b, 0x0b);
pub const HEADING: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const BODY_TEXT: Color = Color::Rgb(0xaa, 0xaa, 0xaa);
pub const MUTED: Color = Color::Rgb(0x66, 0x66, 0x66);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x22, 0x22, 0x22);
pub const FOCUS_BORDER: Color = GOLD;
pub const INACTIVE_DOT: Color = Color::Rgb(0x33, 0x33, 0x33);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
