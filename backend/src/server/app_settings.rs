//! Application settings loaded via OrthoConfig.

use std::net::SocketAddr;

use hms_backend::domain::{BootstrapAdmin, EmailAddress};
use ortho_config::OrthoConfig;
use serde::Deserialize;

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

/// Configuration values controlling process startup.
///
/// Values resolve in CLI, environment, file, then default order under the
/// `HMS_` prefix. The database URL and bootstrap admin credentials carry no
/// defaults; startup fails without them.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HMS")]
pub struct AppSettings {
    /// Socket address the HTTP listener binds.
    pub bind_addr: Option<SocketAddr>,
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Seconds to wait for a pooled connection before giving up.
    pub pool_timeout_secs: Option<u64>,
    /// Email address of the bootstrap admin account.
    pub bootstrap_admin_email: Option<String>,
    /// Password of the bootstrap admin account.
    pub bootstrap_admin_password: Option<String>,
}

impl AppSettings {
    /// Return the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or_else(default_bind_addr)
    }

    /// Return the database URL.
    ///
    /// # Errors
    /// Fails when the URL is absent or blank; every persistence adapter
    /// requires it.
    pub fn database_url(&self) -> std::io::Result<&str> {
        match self.database_url.as_deref() {
            Some(url) if !url.trim().is_empty() => Ok(url),
            Some(_) => Err(invalid_input("HMS_DATABASE_URL must not be empty")),
            None => Err(invalid_input(
                "database URL missing: set HMS_DATABASE_URL or --database-url",
            )),
        }
    }

    /// Assemble the bootstrap admin credentials.
    ///
    /// # Errors
    /// Fails when either credential is absent or the email does not parse.
    pub fn bootstrap_admin(&self) -> std::io::Result<BootstrapAdmin> {
        let email = self.bootstrap_admin_email.as_deref().ok_or_else(|| {
            invalid_input("bootstrap admin missing: set HMS_BOOTSTRAP_ADMIN_EMAIL")
        })?;
        let password = self.bootstrap_admin_password.as_deref().ok_or_else(|| {
            invalid_input("bootstrap admin missing: set HMS_BOOTSTRAP_ADMIN_PASSWORD")
        })?;
        if password.is_empty() {
            return Err(invalid_input(
                "HMS_BOOTSTRAP_ADMIN_PASSWORD must not be empty",
            ));
        }
        let email = EmailAddress::new(email)
            .map_err(|error| invalid_input(format!("invalid bootstrap admin email: {error}")))?;
        Ok(BootstrapAdmin::new(email, password))
    }
}

fn invalid_input(message: impl Into<String>) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, message.into())
}

#[cfg(test)]
mod tests {
    //! Unit tests for application settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("hms-backend")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_environment_is_missing() {
        let _guard = lock_env([
            ("HMS_BIND_ADDR", None::<String>),
            ("HMS_DATABASE_URL", None::<String>),
            ("HMS_POOL_MAX_SIZE", None::<String>),
            ("HMS_POOL_TIMEOUT_SECS", None::<String>),
            ("HMS_BOOTSTRAP_ADMIN_EMAIL", None::<String>),
            ("HMS_BOOTSTRAP_ADMIN_PASSWORD", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), default_bind_addr());
        assert!(settings.pool_max_size.is_none());
        assert!(settings.pool_timeout_secs.is_none());
        assert!(settings.database_url().is_err());
        assert!(settings.bootstrap_admin().is_err());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("HMS_BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
            (
                "HMS_DATABASE_URL",
                Some("postgres://localhost/hms".to_owned()),
            ),
            ("HMS_POOL_MAX_SIZE", Some("4".to_owned())),
            ("HMS_POOL_TIMEOUT_SECS", Some("5".to_owned())),
            (
                "HMS_BOOTSTRAP_ADMIN_EMAIL",
                Some("admin@example.com".to_owned()),
            ),
            ("HMS_BOOTSTRAP_ADMIN_PASSWORD", Some("letmein".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr(),
            "127.0.0.1:9090".parse().expect("socket address")
        );
        assert_eq!(
            settings.database_url().expect("database url"),
            "postgres://localhost/hms"
        );
        assert_eq!(settings.pool_max_size, Some(4));
        assert_eq!(settings.pool_timeout_secs, Some(5));
        settings.bootstrap_admin().expect("bootstrap admin");
    }

    #[rstest]
    fn blank_database_url_is_rejected() {
        let _guard = lock_env([("HMS_DATABASE_URL", Some("   ".to_owned()))]);

        let settings = load_from_empty_args();
        let error = settings.database_url().expect_err("blank url should fail");
        assert_eq!(error.kind(), std::io::ErrorKind::InvalidInput);
    }

    #[rstest]
    fn malformed_bootstrap_email_is_rejected() {
        let _guard = lock_env([
            ("HMS_BOOTSTRAP_ADMIN_EMAIL", Some("not-an-email".to_owned())),
            ("HMS_BOOTSTRAP_ADMIN_PASSWORD", Some("letmein".to_owned())),
        ]);

        let settings = load_from_empty_args();
        let error = settings
            .bootstrap_admin()
            .expect_err("malformed email should fail");
        assert_eq!(error.kind(), std::io::ErrorKind::InvalidInput);
    }

    #[rstest]
    fn empty_bootstrap_password_is_rejected() {
        let _guard = lock_env([
            (
                "HMS_BOOTSTRAP_ADMIN_EMAIL",
                Some("admin@example.com".to_owned()),
            ),
            ("HMS_BOOTSTRAP_ADMIN_PASSWORD", Some(String::new())),
        ]);

        let settings = load_from_empty_args();
        let error = settings
            .bootstrap_admin()
            .expect_err("empty password should fail");
        assert_eq!(error.kind(), std::io::ErrorKind::InvalidInput);
    }
}
