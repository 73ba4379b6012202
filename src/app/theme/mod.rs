//! Theme: color constants and global styling

pub mod colors;
pub mod styles;
