//! Configuration loaded from environment variables.
//!
//! One value is required: the notification topic ARN. It is read once
//! at process start and the process refuses to start without it.

use {
    anyhow::{ensure, Context, Result},
    std::env,
};

/// Environment variable holding the notification topic ARN.
pub const TOPIC_ARN_VAR: &str = "SNS_TOPIC_ARN";

/// Process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// ARN of the SNS topic notifications are published to.
    pub topic_arn: String,
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// # Errors
    ///
    /// Fails if `SNS_TOPIC_ARN` is unset or blank. Configuration errors
    /// are fatal: the caller must not serve events without a target.
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(TOPIC_ARN_VAR)
    }

    /// Loads configuration, reading the topic ARN from `env_var`.
    fn from_env_var(env_var: &str) -> Result<Self> {
        let topic_arn = env::var(env_var)
            .with_context(|| format!("{env_var} is required"))?
            .trim()
            .to_string();
        ensure!(!topic_arn.is_empty(), "{env_var} must not be blank");
        Ok(Self { topic_arn })
    }
}
