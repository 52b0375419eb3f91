//! Remote session handle passed through expression lowering.
//!
//! Transmission to the remote engine is not handled here. A session only
//! carries its connection settings and turns expressions into framed wire
//! messages ready to be sent.

use std::collections::BTreeMap;
use std::fmt;

use bytes::BytesMut;
use log::debug;
use thiserror::Error;

use crate::expression::{ExpressionError, ToPlan};
use crate::proto::{self, CodecError};

/// Scheme of remote connection strings
pub const CONNECTION_SCHEME: &str = "sc://";

/// Default port of the remote engine
pub const DEFAULT_PORT: u16 = 15002;

pub const DEFAULT_HOST: &str = "localhost";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid connection string: {0}")]
    InvalidConnectionString(String),

    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Expression error: {0}")]
    Expression(#[from] ExpressionError),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// Connection settings of a remote session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub host: String,
    pub port: u16,
    pub user_id: Option<String>,
    pub session_id: Option<String>,
    pub user_agent: Option<String>,
    /// Parameters not interpreted by the client, forwarded as is
    pub params: BTreeMap<String, String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            user_id: None,
            session_id: None,
            user_agent: None,
            params: BTreeMap::new(),
        }
    }
}

impl SessionConfig {
    /// Parse `sc://host[:port][/;key=value;...]`
    pub fn from_connection_string(url: &str) -> Result<Self> {
        let rest = url.strip_prefix(CONNECTION_SCHEME).ok_or_else(|| {
            SessionError::InvalidConnectionString(format!(
                "'{}' does not start with {}",
                url, CONNECTION_SCHEME
            ))
        })?;

        let (authority, path) = match rest.split_once('/') {
            Some((authority, path)) => (authority, path),
            None => (rest, ""),
        };
        if authority.is_empty() {
            return Err(SessionError::InvalidConnectionString(format!(
                "'{}' has no host",
                url
            )));
        }

        let mut config = SessionConfig::default();
        match authority.rsplit_once(':') {
            Some((host, port)) => {
                if host.is_empty() {
                    return Err(SessionError::InvalidConnectionString(format!(
                        "'{}' has no host",
                        url
                    )));
                }
                config.host = host.to_string();
                config.port = port
                    .parse()
                    .map_err(|_| SessionError::InvalidPort(port.to_string()))?;
            }
            None => config.host = authority.to_string(),
        }

        if !path.is_empty() && !path.starts_with(';') {
            return Err(SessionError::InvalidConnectionString(format!(
                "unexpected path '{}' in '{}'",
                path, url
            )));
        }

        for param in path.split(';').filter(|p| !p.is_empty()) {
            let (key, value) = param.split_once('=').ok_or_else(|| {
                SessionError::InvalidConnectionString(format!(
                    "parameter '{}' is not a key=value pair",
                    param
                ))
            })?;
            match key {
                "user_id" => config.user_id = Some(value.to_string()),
                "session_id" => config.session_id = Some(value.to_string()),
                "user_agent" => config.user_agent = Some(value.to_string()),
                _ => {
                    config.params.insert(key.to_string(), value.to_string());
                }
            }
        }

        Ok(config)
    }
}

impl fmt::Display for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}:{}", CONNECTION_SCHEME, self.host, self.port)
    }
}

/// Handle to a remote session
#[derive(Debug, Clone, Default)]
pub struct RemoteSession {
    config: SessionConfig,
}

impl RemoteSession {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn connect(url: &str) -> Result<Self> {
        Ok(Self::new(SessionConfig::from_connection_string(url)?))
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Lower `expr` with this session as context
    pub fn lower(&self, expr: &impl ToPlan) -> Result<proto::Expression> {
        let plan = expr.to_plan(Some(self))?;
        debug!("lowered expression for {}", self.config);
        Ok(plan)
    }

    /// Lower `expr` and append it to `buf` as one wire frame
    pub fn encode(&self, expr: &impl ToPlan, buf: &mut BytesMut) -> Result<()> {
        let plan = self.lower(expr)?;
        proto::encode_expression(&plan, buf)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::col;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 15002);
        assert_eq!(config.to_string(), "sc://localhost:15002");
    }

    #[test]
    fn test_parse_host_only() {
        let config = SessionConfig::from_connection_string("sc://engine.local").unwrap();
        assert_eq!(config.host, "engine.local");
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.user_id.is_none());
    }

    #[test]
    fn test_parse_full() {
        let config = SessionConfig::from_connection_string(
            "sc://host:1234/;user_id=alice;session_id=s1;user_agent=cli;token=abc",
        )
        .unwrap();
        assert_eq!(config.host, "host");
        assert_eq!(config.port, 1234);
        assert_eq!(config.user_id.as_deref(), Some("alice"));
        assert_eq!(config.session_id.as_deref(), Some("s1"));
        assert_eq!(config.user_agent.as_deref(), Some("cli"));
        assert_eq!(config.params.get("token").map(String::as_str), Some("abc"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            SessionConfig::from_connection_string("http://host"),
            Err(SessionError::InvalidConnectionString(_))
        ));
        assert!(matches!(
            SessionConfig::from_connection_string("sc://"),
            Err(SessionError::InvalidConnectionString(_))
        ));
        assert!(matches!(
            SessionConfig::from_connection_string("sc://:80"),
            Err(SessionError::InvalidConnectionString(_))
        ));
        assert!(matches!(
            SessionConfig::from_connection_string("sc://:80/;user_id=u"),
            Err(SessionError::InvalidConnectionString(_))
        ));
        assert!(matches!(
            SessionConfig::from_connection_string("sc://host:port"),
            Err(SessionError::InvalidPort(_))
        ));
        assert!(matches!(
            SessionConfig::from_connection_string("sc://host:99999"),
            Err(SessionError::InvalidPort(_))
        ));
        assert!(matches!(
            SessionConfig::from_connection_string("sc://host/path"),
            Err(SessionError::InvalidConnectionString(_))
        ));
        assert!(matches!(
            SessionConfig::from_connection_string("sc://host/;user_id"),
            Err(SessionError::InvalidConnectionString(_))
        ));
    }

    #[test]
    fn test_encode_frame() {
        let session = RemoteSession::connect("sc://host:1/;user_id=u").unwrap();
        let expr = col("x").gt(1);

        let mut buf = BytesMut::new();
        session.encode(&expr, &mut buf).unwrap();

        let decoded = proto::decode_expression(&mut buf).unwrap();
        assert_eq!(decoded, Some(session.lower(&expr).unwrap()));
    }
}
