//! Conversion from foreign flat brand descriptions into library tokens.
//!
//! Hosts hand over a flat mapping (background, foreground, status colors,
//! font and spacing keys). Only keys in the fixed table below are translated;
//! everything else is dropped without comment so callers can feed a superset.

use adminboard_assets::DEFAULT_BOOTSWATCH_VERSION;
use serde_json::Value;

use crate::error::ThemeError;
use crate::theme::{StylesheetRef, Theme};
use crate::tokens;

/// Preset name that means "host default", not a stylesheet family.
pub const DEFAULT_PRESET: &str = "default";

/// Fixed translation table from brand keys to library token names.
const BRAND_TOKEN_MAP: &[(&str, &str)] = &[
    ("bg", tokens::NAV_BG),
    ("fg", tokens::NAV_FG),
    ("primary", tokens::PRIMARY_BG),
    ("secondary", tokens::SECONDARY_BG),
    ("success", tokens::SUCCESS_BG),
    ("info", tokens::BADGE_INFO_BG),
    ("warning", tokens::WARNING_BG),
    ("danger", tokens::DANGER_BG),
    ("base_font", tokens::BASE_FONT),
    ("heading_font", tokens::HEADING_FONT),
    ("code_font", tokens::CODE_FONT),
    ("border_radius", tokens::BORDER_RADIUS),
    ("spacing_sm", tokens::SPACING_SM),
    ("spacing_md", tokens::SPACING_MD),
    ("spacing_lg", tokens::SPACING_LG),
];

impl Theme {
    /// Translate a flat brand description into a theme.
    ///
    /// Recognized keys map through a fixed table; unrecognized keys are
    /// ignored. A `bootswatch` (or legacy `preset`) key attaches a stylesheet
    /// reference unless it names the host default.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::NotAMapping`] when the description is not a
    /// JSON object.
    pub fn from_brand(description: &Value) -> Result<Self, ThemeError> {
        let Value::Object(map) = description else {
            return Err(ThemeError::NotAMapping {
                found: json_type_name(description),
            });
        };

        let mut theme = Self::new();
        for (key, token) in BRAND_TOKEN_MAP {
            if let Some(css) = map.get(*key).and_then(css_value) {
                theme.set(*token, css);
            }
        }

        let preset = map.get("bootswatch").or_else(|| map.get("preset"));
        if let Some(Value::String(name)) = preset {
            if !name.is_empty() && !name.eq_ignore_ascii_case(DEFAULT_PRESET) {
                theme = theme.with_stylesheet(StylesheetRef {
                    name: name.clone(),
                    version: DEFAULT_BOOTSWATCH_VERSION.to_string(),
                });
            }
        }

        Ok(theme)
    }
}

/// CSS rendering of a brand value: strings verbatim, other scalars in their
/// JSON form, nulls skipped.
fn css_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
