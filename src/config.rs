use std::env::VarError;
use std::fmt::{Debug, Display};
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub http_host: String,
    pub http_port: u16,

    pub github_token: String,
    pub github_owner: String,
    pub github_repo: String,
    pub github_api: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let cfg = Config {
            http_host: Self::var_or("HOST", "127.0.0.1")?,
            http_port: Self::var_or("PORT", 8080u16)?,

            github_token: Self::var("GITHUB_TOKEN")?,
            github_owner: Self::var("GITHUB_OWNER")?,
            github_repo: Self::var("GITHUB_REPO")?,
            github_api: Self::var_or("GITHUB_API", "https://api.github.com")?,
        };

        if !cfg.github_token.starts_with("ghp_") {
            return Err(Error::ValueInvalid(
                "FEEDBOARD_GITHUB_TOKEN".to_owned(),
                "expected a personal access token (ghp_ prefix)".to_owned(),
            ));
        }

        Ok(cfg)
    }

    fn var<K, V>(key: K) -> Result<V, Error>
    where
        K: Display,
        V: FromStr,
        V::Err: Display,
    {
        let key = format!("FEEDBOARD_{}", key);
        match std::env::var(&key) {
            Ok(val) => val
                .parse()
                .map_err(|err| Error::ValueConversion(key, format!("{}", err))),
            Err(VarError::NotPresent) => Err(Error::Missing(key)),
            Err(VarError::NotUnicode(_)) => Err(Error::ValueNotUnicode(key)),
        }
    }

    fn var_or<K, V, D>(key: K, default: D) -> Result<V, Error>
    where
        K: Display,
        V: Debug + FromStr,
        V::Err: Display,
        D: Into<V>,
    {
        match Self::var(key) {
            Err(Error::Missing(key)) => {
                let val: V = default.into();
                log::debug!("{} is not defined, using default: {:?}", key, val);
                Ok(val)
            }
            res => res,
        }
    }
}


pub enum Error {
    Missing(String),
    ValueNotUnicode(String),
    ValueConversion(String, String),
    ValueInvalid(String, String),
}

impl Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match self {
            Self::Missing(key) => write!(fmt, "Missing value for {}", key),
            Self::ValueNotUnicode(key) => {
                write!(fmt, "Could not parse {}'s value as a UTF-8 string", key)
            }
            Self::ValueConversion(key, err_msg) => {
                write!(fmt, "Could not parse {}'s value: {}", key, err_msg)
            }
            Self::ValueInvalid(key, reason) => {
                write!(fmt, "Invalid value for {}: {}", key, reason)
            }
        }
    }
}
