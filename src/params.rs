//! Deployment parameters resolved from `PLUGIN_*` environment variables.
use std::fmt;

/// Index URL used when `PLUGIN_REPOSITORY` is absent or empty.
pub const DEFAULT_REPOSITORY: &str = "https://pypi.python.org/pypi";
/// Username used when `PLUGIN_USERNAME` is absent or empty.
pub const DEFAULT_USERNAME: &str = "guido";
/// Password used when `PLUGIN_PASSWORD` is absent or empty.
pub const DEFAULT_PASSWORD: &str = "secret";

/// Environment variable names read by [`Params::resolve`].
pub mod vars {
    /// Package index URL.
    pub const REPOSITORY: &str = "PLUGIN_REPOSITORY";
    /// Index username.
    pub const USERNAME: &str = "PLUGIN_USERNAME";
    /// Index password.
    pub const PASSWORD: &str = "PLUGIN_PASSWORD";
    /// Package subdirectory relative to `PWD`.
    pub const UPLOAD_PATH: &str = "PLUGIN_UPLOAD_PATH";
    /// Comma-separated distribution format names.
    pub const DISTRIBUTIONS: &str = "PLUGIN_DISTRIBUTIONS";
}

/// How to upload a Python package to a package index.
///
/// Built once at startup and never mutated afterwards. Repository, username
/// and password already carry their defaults; `distributions` may be empty,
/// in which case the upload command falls back to `sdist`.
///
/// # Examples
///
/// ```
/// use drone_pypi::params::Params;
///
/// let params = Params::resolve(|key| match key {
///     "PLUGIN_USERNAME" => Some("alice".to_string()),
///     "PLUGIN_DISTRIBUTIONS" => Some("sdist,bdist_wheel".to_string()),
///     _ => None,
/// });
/// assert_eq!(params.username, "alice");
/// assert_eq!(params.password, "secret");
/// assert_eq!(params.distributions, ["sdist", "bdist_wheel"]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Params {
    /// Package index URL.
    pub repository: String,
    /// Index username.
    pub username: String,
    /// Index password.
    pub password: String,
    /// Distribution formats to build, in order. Empty means "use the default".
    pub distributions: Vec<String>,
    /// Package subdirectory relative to the base working directory.
    pub upload_path: String,
}

impl Params {
    /// Resolve parameters through `lookup`, which maps a variable name to its
    /// value (or `None` when unset).
    ///
    /// Credentials that are absent or empty take their defaults here, once.
    /// `PLUGIN_DISTRIBUTIONS` is split on `,` verbatim with no trimming; when
    /// it is unset the list is left empty.
    #[must_use]
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            repository: or_default(vars::REPOSITORY, DEFAULT_REPOSITORY),
            username: or_default(vars::USERNAME, DEFAULT_USERNAME),
            password: or_default(vars::PASSWORD, DEFAULT_PASSWORD),
            distributions: lookup(vars::DISTRIBUTIONS)
                .map(|v| v.split(',').map(String::from).collect())
                .unwrap_or_default(),
            upload_path: lookup(vars::UPLOAD_PATH).unwrap_or_default(),
        }
    }

    /// Resolve parameters from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok())
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Params")
            .field("repository", &self.repository)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("distributions", &self.distributions)
            .field("upload_path", &self.upload_path)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve_from(pairs: &[(&str, &str)]) -> Params {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Params::resolve(|key| env.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let params = resolve_from(&[]);
        assert_eq!(params.repository, DEFAULT_REPOSITORY);
        assert_eq!(params.username, DEFAULT_USERNAME);
        assert_eq!(params.password, DEFAULT_PASSWORD);
        assert!(params.distributions.is_empty());
        assert_eq!(params.upload_path, "");
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let params = resolve_from(&[
            ("PLUGIN_REPOSITORY", ""),
            ("PLUGIN_USERNAME", ""),
            ("PLUGIN_PASSWORD", ""),
        ]);
        assert_eq!(params.repository, DEFAULT_REPOSITORY);
        assert_eq!(params.username, DEFAULT_USERNAME);
        assert_eq!(params.password, DEFAULT_PASSWORD);
    }

    #[test]
    fn explicit_values_are_kept_verbatim() {
        let params = resolve_from(&[
            ("PLUGIN_REPOSITORY", "https://test.pypi.org/legacy/"),
            ("PLUGIN_USERNAME", "alice"),
            ("PLUGIN_PASSWORD", "hunter2"),
            ("PLUGIN_UPLOAD_PATH", "pkg/sub"),
        ]);
        assert_eq!(params.repository, "https://test.pypi.org/legacy/");
        assert_eq!(params.username, "alice");
        assert_eq!(params.password, "hunter2");
        assert_eq!(params.upload_path, "pkg/sub");
    }

    #[test]
    fn distributions_split_on_commas() {
        let params = resolve_from(&[("PLUGIN_DISTRIBUTIONS", "a,b,c")]);
        assert_eq!(params.distributions, ["a", "b", "c"]);
    }

    #[test]
    fn distributions_are_not_trimmed() {
        let params = resolve_from(&[("PLUGIN_DISTRIBUTIONS", "sdist, bdist_wheel ")]);
        assert_eq!(params.distributions, ["sdist", " bdist_wheel "]);
    }

    #[test]
    fn empty_distributions_variable_yields_one_empty_entry() {
        let params = resolve_from(&[("PLUGIN_DISTRIBUTIONS", "")]);
        assert_eq!(params.distributions, [""]);
    }

    #[test]
    fn debug_output_redacts_password() {
        let params = resolve_from(&[("PLUGIN_PASSWORD", "hunter2")]);
        let debug = format!("{params:?}");
        assert!(!debug.contains("hunter2"), "password leaked: {debug}");
        assert!(debug.contains("<redacted>"));
    }
}
