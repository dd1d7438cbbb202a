//! Environment variable parsing utilities.
//!
//! Configuration knobs in this workspace can be overridden from the
//! environment. These helpers keep the lookup-parse-default dance in one
//! place.
//!
//! # Example
//!
//! ```
//! use typecoerce_types::env_utils::{env_bool_or, env_string_or};
//!
//! let unwrap = env_bool_or("TYPECOERCE_UNWRAP_BOXED", true);
//! let style = env_string_or("TYPECOERCE_TEXT_STYLE", "spaced");
//! ```

fn is_truthy_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Read a boolean flag, falling back to `default` when the variable is unset.
///
/// `1`, `true`, `yes` and `on` (case-insensitive) are true; any other set
/// value is false.
pub fn env_bool_or(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|v| is_truthy_flag(&v))
        .unwrap_or(default)
}

/// Get an environment variable as a string with a default value.
pub fn env_string_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_bool_or() {
        std::env::set_var("TYPECOERCE_TEST_FLAG_ON", "Yes");
        std::env::set_var("TYPECOERCE_TEST_FLAG_OFF", "off");

        assert!(env_bool_or("TYPECOERCE_TEST_FLAG_ON", false));
        assert!(!env_bool_or("TYPECOERCE_TEST_FLAG_OFF", true));
        assert!(env_bool_or("TYPECOERCE_TEST_MISSING_2", true));
        assert!(!env_bool_or("TYPECOERCE_TEST_MISSING_3", false));

        std::env::remove_var("TYPECOERCE_TEST_FLAG_ON");
        std::env::remove_var("TYPECOERCE_TEST_FLAG_OFF");
    }

    #[test]
    fn test_env_string_or() {
        std::env::set_var("TYPECOERCE_TEST_STYLE", "compact");
        assert_eq!(env_string_or("TYPECOERCE_TEST_STYLE", "spaced"), "compact");
        assert_eq!(env_string_or("TYPECOERCE_TEST_MISSING_4", "spaced"), "spaced");
        std::env::remove_var("TYPECOERCE_TEST_STYLE");
    }
}
