//! Well-known token names emitted as CSS custom properties.
//!
//! Stored token names may omit the `--` marker; emission normalizes it on.

/// Navbar background.
pub const NAV_BG: &str = "adminboard-nav-bg";
/// Navbar foreground.
pub const NAV_FG: &str = "adminboard-nav-fg";
/// Primary status background.
pub const PRIMARY_BG: &str = "adminboard-primary-bg";
/// Secondary status background.
pub const SECONDARY_BG: &str = "adminboard-secondary-bg";
/// Success status background.
pub const SUCCESS_BG: &str = "adminboard-success-bg";
/// Informational badge background.
pub const BADGE_INFO_BG: &str = "adminboard-badge-info-bg";
/// Warning status background.
pub const WARNING_BG: &str = "adminboard-warning-bg";
/// Danger status background.
pub const DANGER_BG: &str = "adminboard-danger-bg";
/// Base font stack.
pub const BASE_FONT: &str = "adminboard-base-font";
/// Heading font stack.
pub const HEADING_FONT: &str = "adminboard-heading-font";
/// Code font stack.
pub const CODE_FONT: &str = "adminboard-code-font";
/// Corner radius.
pub const BORDER_RADIUS: &str = "adminboard-border-radius";
/// Small spacing step.
pub const SPACING_SM: &str = "adminboard-spacing-sm";
/// Medium spacing step.
pub const SPACING_MD: &str = "adminboard-spacing-md";
/// Large spacing step.
pub const SPACING_LG: &str = "adminboard-spacing-lg";
