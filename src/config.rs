//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::IpAddr;

use crate::error::ServerError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build the config from the process environment.
    ///
    /// Optional:
    /// - `HALA_HOST`: listen address, default `0.0.0.0`
    /// - `PORT`: listen port, default `3000`
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_vars(std::env::var("HALA_HOST").ok().as_deref(), std::env::var("PORT").ok().as_deref())
    }

    /// Parse raw values; `None` or blank falls back to the default.
    pub fn from_vars(host: Option<&str>, port: Option<&str>) -> Result<Self, ServerError> {
        let host = parse_var("HALA_HOST", host, DEFAULT_HOST)?;
        let port = match non_blank(port) {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse().map_err(|_| invalid("PORT", raw))?,
        };
        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> String {
        std::net::SocketAddr::new(self.host, self.port).to_string()
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_var(var: &'static str, raw: Option<&str>, default: &str) -> Result<IpAddr, ServerError> {
    let value = non_blank(raw).unwrap_or(default);
    value.parse().map_err(|_| invalid(var, value))
}

fn invalid(var: &'static str, value: &str) -> ServerError {
    ServerError::Config { var, value: value.to_owned() }
}
