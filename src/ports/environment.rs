// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment lookup trait definition.
//!
//! The store never touches the process environment directly. It asks an
//! `EnvironmentSource` instead, so resolution can be exercised against a fixed
//! set of variables.

/// A trait for reading environment variables by name.
///
/// Implementations must be `Send + Sync` so a store can be shared across
/// threads.
///
/// # Examples
///
/// ```rust
/// use treecfg::ports::EnvironmentSource;
///
/// struct Fixed;
///
/// impl EnvironmentSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn var(&self, name: &str) -> Option<String> {
///         (name == "APP_PORT").then(|| "8080".to_string())
///     }
/// }
///
/// assert_eq!(Fixed.var_non_empty("APP_PORT"), Some("8080".to_string()));
/// assert_eq!(Fixed.var_non_empty("APP_HOST"), None);
/// ```
pub trait EnvironmentSource: Send + Sync {
    /// Returns the name of this source, used in log messages.
    fn name(&self) -> &str;

    /// Returns the value of the variable, or `None` if it is unset.
    fn var(&self, name: &str) -> Option<String>;

    /// Returns the value of the variable, treating an empty value as unset.
    fn var_non_empty(&self, name: &str) -> Option<String> {
        self.var(name).filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyValued;

    impl EnvironmentSource for EmptyValued {
        fn name(&self) -> &str {
            "empty"
        }

        fn var(&self, _name: &str) -> Option<String> {
            Some(String::new())
        }
    }

    #[test]
    fn test_empty_value_is_unset() {
        assert_eq!(EmptyValued.var("ANY"), Some(String::new()));
        assert_eq!(EmptyValued.var_non_empty("ANY"), None);
    }
}
