//! Color Constants for the Librovia Theme
//!
//! Green-on-light palette carried over from the Librovia brand: green
//! accents, off-white surfaces, gray text ramp.

use eframe::egui::Color32;

/// Primary brand green, buttons and highlights
pub const ACCENT: Color32 = Color32::from_rgb(0x22, 0xC5, 0x5E);

/// Darker brand green, top bar and link text
pub const ACCENT_DARK: Color32 = Color32::from_rgb(0x16, 0xA3, 0x4A);

/// App background - off-white
pub const BG: Color32 = Color32::from_rgb(0xF6, 0xF6, 0xF6);

/// Card and modal surface
pub const CARD_BG: Color32 = Color32::WHITE;

/// Card border
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xE5, 0xE7, 0xEB);

/// Input field background
pub const INPUT_BG: Color32 = Color32::from_rgb(0xF9, 0xFA, 0xFB);

/// Input field border
pub const INPUT_BORDER: Color32 = Color32::from_rgb(0xD1, 0xD5, 0xDB);

/// Primary text - near-black
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);

/// Secondary text - gray
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x6B, 0x72, 0x80);

/// Muted text - light gray
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x9C, 0xA3, 0xAF);

/// Text on green surfaces
pub const TEXT_ON_ACCENT: Color32 = Color32::WHITE;

/// Error text and destructive buttons
pub const ERROR: Color32 = Color32::from_rgb(0xEF, 0x44, 0x44);

/// Availability count - green
pub const AVAILABLE: Color32 = Color32::from_rgb(0x16, 0xA3, 0x4A);

/// Neutral/cancel button background
pub const BUTTON_NEUTRAL: Color32 = Color32::from_rgb(0x9C, 0xA3, 0xAF);
