use crate::{
    config::date_locale::{DEFAULT_LOCALE, DEFAULT_TIMEZONE, DateLocaleConfig},
    error::{BadEnvVarSnafu, RosterResult},
};
use dotenvy::var;
use snafu::ResultExt;
use std::{env::VarError, sync::Arc};

pub mod date_locale;

pub const DEFAULT_SERVER_IP: &str = "127.0.0.1:8080";

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    server_ip: String,
    date_locale_config: Arc<DateLocaleConfig>,
}

impl RuntimeConfiguration {
    pub fn new() -> RosterResult<Self> {
        let server_ip =
            optional_env_var("ROSTER_SERVER_IP")?.unwrap_or_else(|| DEFAULT_SERVER_IP.to_string());
        let timezone =
            optional_env_var("ROSTER_TIMEZONE")?.unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
        let locale =
            optional_env_var("ROSTER_LOCALE")?.unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        Ok(Self {
            server_ip,
            date_locale_config: Arc::new(DateLocaleConfig::new(&timezone, &locale)?),
        })
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }

    pub fn date_locale_config(&self) -> Arc<DateLocaleConfig> {
        self.date_locale_config.clone()
    }
}

fn optional_env_var(name: &'static str) -> RosterResult<Option<String>> {
    match var(name) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
        Err(source) => Err(source).context(BadEnvVarSnafu { name }),
    }
}

#[cfg(test)]
impl RuntimeConfiguration {
    pub fn for_tests() -> Self {
        Self {
            server_ip: DEFAULT_SERVER_IP.to_string(),
            date_locale_config: Arc::new(
                DateLocaleConfig::new(DEFAULT_TIMEZONE, DEFAULT_LOCALE)
                    .expect("default locale config"),
            ),
        }
    }
}
