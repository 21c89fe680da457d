//! Color palette for dialogs drawn in the terminal

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Dimmed backdrop behind a modal
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43); // Dialog surface
pub const FIELD_BG: Color = Color::Rgb(45, 51, 59); // Text input well

// --- Borders ---
pub const BORDER: Color = Color::Rgb(88, 166, 255);

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Effects ---
pub const SHADOW: Color = Color::Black;
