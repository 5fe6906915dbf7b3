use std::fmt;

use serde::Serialize;

/// A single mail server endpoint from an autoconfig document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ServerConfig {
	/// `imap`, `pop3` or `smtp`, always lowercase.
	pub protocol: String,
	pub hostname: String,
	pub port: u16,
	/// `plain`, `ssl` or `starttls`, always lowercase.
	pub socket_type: String,
	/// Preferred authentication method, e.g. `password-cleartext` or `OAuth2`.
	pub authentication: String,
	/// Literal username or a template such as `%EMAILADDRESS%`.
	pub username: String
}

impl ServerConfig {
	/// Whether this entry is for the given protocol, ignoring case.
	pub fn is_protocol(&self, protocol: &str) -> bool {
		self.protocol.eq_ignore_ascii_case(protocol)
	}
}

impl fmt::Display for ServerConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.hostname, self.port)
	}
}
