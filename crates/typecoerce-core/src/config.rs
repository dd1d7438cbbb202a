//! Coercer configuration.

use serde::{Deserialize, Serialize};
use typecoerce_types::env_utils::{env_bool_or, env_string_or};
use typecoerce_types::TextStyle;

/// Environment variable toggling [`CoerceConfig::unwrap_boxed`].
pub const ENV_UNWRAP_BOXED: &str = "TYPECOERCE_UNWRAP_BOXED";
/// Environment variable selecting [`CoerceConfig::text_style`].
pub const ENV_TEXT_STYLE: &str = "TYPECOERCE_TEXT_STYLE";

/// Knobs for a [`Coercer`](crate::Coercer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoerceConfig {
    /// Unwrap one [`Value::Boxed`](typecoerce_types::Value::Boxed) layer
    /// before each lenient conversion step.
    pub unwrap_boxed: bool,
    /// Separator style for values serialized to text.
    pub text_style: TextStyle,
}

impl Default for CoerceConfig {
    fn default() -> Self {
        Self {
            unwrap_boxed: true,
            text_style: TextStyle::Spaced,
        }
    }
}

impl CoerceConfig {
    /// Defaults overridden by `TYPECOERCE_UNWRAP_BOXED` and
    /// `TYPECOERCE_TEXT_STYLE`. An unrecognized text style keeps the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let style = env_string_or(ENV_TEXT_STYLE, "");
        Self {
            unwrap_boxed: env_bool_or(ENV_UNWRAP_BOXED, defaults.unwrap_boxed),
            text_style: TextStyle::parse(&style).unwrap_or(defaults.text_style),
        }
    }

    pub fn with_unwrap_boxed(mut self, unwrap_boxed: bool) -> Self {
        self.unwrap_boxed = unwrap_boxed;
        self
    }

    pub fn with_text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }
}
