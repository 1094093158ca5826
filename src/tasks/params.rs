//! Validated `deploy` parameters.

use crate::error::ParamError;

/// The `APP` and `HOSTNAME` arguments of `deploy`.
///
/// Values are checked before any command runs: `APP` becomes part of a local
/// path and a remote path, `HOSTNAME` is handed to rsync as `host:path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployParams {
    app: String,
    hostname: String,
}

impl DeployParams {
    /// Validates and wraps the two parameters.
    ///
    /// # Errors
    ///
    /// Returns the first rejected parameter.
    pub fn new(app: impl Into<String>, hostname: impl Into<String>) -> Result<Self, ParamError> {
        let app = app.into();
        let hostname = hostname.into();
        validate_app(&app)?;
        validate_hostname(&hostname)?;
        Ok(Self { app, hostname })
    }

    /// Application identifier, also the binary name.
    #[must_use]
    pub fn app(&self) -> &str {
        &self.app
    }

    /// Remote address, possibly `user@host`.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

fn validate_app(value: &str) -> Result<(), ParamError> {
    const NAME: &str = "APP";
    check_start(NAME, value, &['-', '.'])?;
    check_chars(NAME, value, value, is_name_char)
}

fn validate_hostname(value: &str) -> Result<(), ParamError> {
    const NAME: &str = "HOSTNAME";
    check_start(NAME, value, &['-'])?;
    let host = match value.split_once('@') {
        Some((user, host)) => {
            if user.is_empty() {
                return Err(ParamError::InvalidChar {
                    name: NAME,
                    value: value.into(),
                    found: '@',
                });
            }
            check_chars(NAME, value, user, is_name_char)?;
            host
        }
        None => value,
    };
    if host.is_empty() {
        return Err(ParamError::Empty { name: NAME });
    }
    if let Some(literal) = host.strip_prefix('[') {
        // Bracketed IPv6 literal.
        let Some(inner) = literal.strip_suffix(']') else {
            return Err(ParamError::InvalidChar {
                name: NAME,
                value: value.into(),
                found: '[',
            });
        };
        return check_chars(NAME, value, inner, |c| {
            c.is_ascii_hexdigit() || matches!(c, ':' | '.')
        });
    }
    check_start(NAME, host, &['-']).map_err(|_| ParamError::InvalidStart {
        name: NAME,
        value: value.into(),
        found: '-',
    })?;
    check_chars(NAME, value, host, |c| {
        c.is_ascii_alphanumeric() || matches!(c, '-' | '.')
    })
}

fn check_start(name: &'static str, value: &str, forbidden: &[char]) -> Result<(), ParamError> {
    match value.chars().next() {
        None => Err(ParamError::Empty { name }),
        Some(first) if forbidden.contains(&first) => {
            Err(ParamError::InvalidStart {
                name,
                value: value.into(),
                found: first,
            })
        }
        Some(_) => Ok(()),
    }
}

fn check_chars(
    name: &'static str,
    value: &str,
    part: &str,
    allowed: impl Fn(char) -> bool,
) -> Result<(), ParamError> {
    match part.chars().find(|c| !allowed(*c)) {
        Some(found) => Err(ParamError::InvalidChar {
            name,
            value: value.into(),
            found,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        let params = DeployParams::new("server", "prod1").unwrap();
        assert_eq!(params.app(), "server");
        assert_eq!(params.hostname(), "prod1");
        assert!(DeployParams::new("client-tui", "example.com").is_ok());
        assert!(DeployParams::new("chat_app.v2", "deploy@10.0.0.7").is_ok());
        assert!(DeployParams::new("web", "[2001:db8::1]").is_ok());
        assert!(DeployParams::new("web", "ops@[fe80::1]").is_ok());
    }

    #[test]
    fn rejects_empty_values() {
        assert_eq!(DeployParams::new("", "prod1"), Err(ParamError::Empty { name: "APP" }));
        assert_eq!(DeployParams::new("web", ""), Err(ParamError::Empty { name: "HOSTNAME" }));
        assert_eq!(DeployParams::new("web", "ops@"), Err(ParamError::Empty { name: "HOSTNAME" }));
    }

    #[test]
    fn rejects_shell_metacharacters_in_app() {
        for bad in ["web;rm -rf ~", "$(id)", "a b", "../etc", "x/y", "web`"] {
            assert!(DeployParams::new(bad, "prod1").is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn rejects_option_like_values() {
        assert!(matches!(
            DeployParams::new("-e", "prod1"),
            Err(ParamError::InvalidStart { name: "APP", found: '-', .. })
        ));
        assert!(matches!(
            DeployParams::new("web", "-oProxyCommand=sh"),
            Err(ParamError::InvalidStart { name: "HOSTNAME", .. })
        ));
        assert!(matches!(
            DeployParams::new("web", "ops@-evil"),
            Err(ParamError::InvalidStart { name: "HOSTNAME", .. })
        ));
    }

    #[test]
    fn rejects_paths_and_extra_separators_in_hostname() {
        assert!(matches!(
            DeployParams::new("web", "prod1:/etc"),
            Err(ParamError::InvalidChar { found: ':', .. })
        ));
        assert!(DeployParams::new("web", "a@b@c").is_err());
        assert!(DeployParams::new("web", "[::1").is_err());
        assert!(DeployParams::new("web", "prod 1").is_err());
    }
}
