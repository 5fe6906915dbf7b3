//! Looks up mail server settings for a domain in the Thunderbird autoconfig
//! database (ISPDB).
//!
//! ```no_run
//! let smtp = autoconfig::lookup("example.com", "smtp")?;
//! if let Some(server) = smtp {
//! 	println!("{} via {}", server, server.socket_type);
//! }
//! # Ok::<(), autoconfig::Error>(())
//! ```

pub mod clientconfig;
pub mod config;
pub mod error;
pub mod resolver;
pub mod server;

pub use error::{Error, ParseError};
pub use resolver::{normalize, ClientConfig, ConfigResolver};
pub use server::ServerConfig;

/// Resolves `domain` against the public database.
pub fn resolve(domain: &str) -> Result<ClientConfig, Error> {
	ConfigResolver::from_defaults()?.resolve(domain)
}

/// The first `protocol` server for `domain` from the public database.
pub fn lookup(domain: &str, protocol: &str) -> Result<Option<ServerConfig>, Error> {
	ConfigResolver::from_defaults()?.lookup(domain, protocol)
}

/// Every server for `domain` from the public database.
pub fn lookup_all(domain: &str) -> Result<Vec<ServerConfig>, Error> {
	ConfigResolver::from_defaults()?.lookup_all(domain)
}
