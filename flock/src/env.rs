use std::str::FromStr;

use envconfig::Envconfig;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref ENV_VARS: EnvVars = EnvVars::from_env().unwrap();
}

#[derive(Clone, Debug)]
pub struct EnvVars {
    inner: Inner,
}

impl EnvVars {
    pub fn from_env() -> Result<Self, envconfig::Error> {
        let inner = Inner::init_from_env()?;

        Ok(Self { inner })
    }

    /// Log the elapsed time and result size of every resolver operation.
    pub fn log_query_timing(&self) -> bool {
        self.inner.log_query_timing.0
    }

    /// Bypass the request-scoped document cache; every lookup goes to the
    /// store. Observable semantics are unchanged.
    pub fn query_cache_disabled(&self) -> bool {
        self.inner.query_cache_disable.0
    }
}

#[derive(Clone, Debug, Envconfig)]
struct Inner {
    #[envconfig(from = "FLOCK_LOG_QUERY_TIMING", default = "false")]
    log_query_timing: EnvVarBoolean,
    #[envconfig(from = "FLOCK_QUERY_CACHE_DISABLE", default = "false")]
    query_cache_disable: EnvVarBoolean,
}

/// When reading a boolean environment variable, `true` or `1`
/// means true, while `false` or `0` means false.
#[derive(Copy, Clone, Debug)]
struct EnvVarBoolean(pub bool);

impl FromStr for EnvVarBoolean {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" | "1" => Ok(Self(true)),
            "false" | "0" => Ok(Self(false)),
            _ => Err("Invalid env. var. flag, expected true / false / 1 / 0".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_flags_parse_the_four_accepted_spellings() {
        for (input, expected) in [("true", true), ("1", true), ("false", false), ("0", false)] {
            assert_eq!(expected, EnvVarBoolean::from_str(input).unwrap().0);
        }

        assert!(EnvVarBoolean::from_str("yes").is_err());
        assert!(EnvVarBoolean::from_str("").is_err());
    }

    #[test]
    fn every_variable_has_a_default() {
        assert!(EnvVars::from_env().is_ok());
    }
}
