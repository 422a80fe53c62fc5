//! Color constants for the storefront palette.

#![allow(dead_code)]

// === CANVAS (Backgrounds) ===
pub const CANVAS_WHITE: &str = "#fdfbf9";
pub const CANVAS_SHADE: &str = "#f5f0ec";
pub const CANVAS_BORDER: &str = "#e8e0da";

// === ROSE (Brand, Actions) ===
pub const ROSE: &str = "#ff3f6c";
pub const ROSE_DEEP: &str = "#d62955";
pub const ROSE_GLOW: &str = "rgba(255, 63, 108, 0.18)";

// === TEAL (Links, Accents) ===
pub const TEAL: &str = "#03a685";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#282c3f";
pub const TEXT_SECONDARY: &str = "rgba(40, 44, 63, 0.72)";
pub const TEXT_MUTED: &str = "rgba(40, 44, 63, 0.5)";

// === SEMANTIC ===
pub const DANGER: &str = "#e11900";
pub const WARNING: &str = "#f09a37";
