//! Color palette. Named colors so the UI follows the terminal's scheme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::DarkGray;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Green;

// --- Accent ---
pub const ACCENT: Color = Color::Green;
pub const ACCENT_SOFT: Color = Color::LightGreen;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Readings ---
pub const READING_YIELD: Color = Color::LightGreen;
pub const READING_TEMPERATURE: Color = Color::LightRed;
pub const READING_HUMIDITY: Color = Color::LightCyan;
pub const READING_RAINFALL: Color = Color::LightBlue;

// --- Catalogue sections ---
pub const SECTION_CROPS: Color = Color::Green;
pub const SECTION_FRUITS: Color = Color::LightRed;
pub const SECTION_VEGETABLES: Color = Color::Yellow;
