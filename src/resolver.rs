//! Fetching and resolving autoconfig documents.

use std::borrow::Cow;
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::Url;
use serde::Serialize;

use crate::clientconfig;
use crate::config::{self, DatabaseConfig, HttpConfig};
use crate::error::Error;
use crate::server::ServerConfig;

/// Reduces user input to the network location used as the database key.
///
/// Bare domains get an `http://` scheme before parsing, so `example.com`,
/// `http://example.com/path` and `https://example.com?q` all yield
/// `example.com`. Userinfo and a non-default port are kept.
///
/// The host goes through URL host parsing: it is lowercased
/// (`EXAMPLE.com` → `example.com`), internationalized names are IDNA
/// encoded, and a port equal to the scheme default is dropped
/// (`example.com:80` → `example.com`).
pub fn normalize(domain: &str) -> Result<String, Error> {
	let invalid = || Error::InvalidDomain { domain: domain.to_owned() };

	let with_scheme = if domain.starts_with("http://") || domain.starts_with("https://") {
		Cow::Borrowed(domain)
	} else {
		Cow::Owned(format!("http://{}", domain))
	};

	let url = Url::parse(&with_scheme).map_err(|_| invalid())?;
	let host = match url.host_str() {
		Some(host) if !host.is_empty() => host,
		_ => return Err(invalid()),
	};

	let mut netloc = String::new();
	if !url.username().is_empty() {
		netloc.push_str(url.username());
		if let Some(password) = url.password() {
			netloc.push(':');
			netloc.push_str(password);
		}
		netloc.push('@');
	}
	netloc.push_str(host);
	if let Some(port) = url.port() {
		netloc.push(':');
		netloc.push_str(&port.to_string());
	}

	Ok(netloc)
}

/// The resolved configuration of one domain.
#[derive(Debug, Clone, Serialize)]
pub struct ClientConfig {
	domain: String,
	#[serde(skip)]
	xml: String,
	email_provider: String,
	configs: Vec<ServerConfig>
}

impl ClientConfig {
	fn from_document(domain: String, xml: String) -> Result<Self, Error> {
		let (email_provider, configs) = clientconfig::parse_document(&xml)?;

		Ok(Self{
			domain,
			xml,
			email_provider,
			configs
		})
	}

	/// The normalized domain this configuration was fetched for.
	pub fn domain(&self) -> &str {
		&self.domain
	}

	/// The document as returned by the database.
	pub fn xml(&self) -> &str {
		&self.xml
	}

	/// The provider identifier from `<emailProvider id="...">`.
	pub fn email_provider(&self) -> &str {
		&self.email_provider
	}

	/// All servers, incoming before outgoing.
	pub fn configs(&self) -> &[ServerConfig] {
		&self.configs
	}

	/// The first server in document order speaking `protocol`, ignoring case.
	pub fn get_protocol(&self, protocol: &str) -> Option<&ServerConfig> {
		self.configs.iter().find(|config| config.is_protocol(protocol))
	}

	pub fn into_configs(self) -> Vec<ServerConfig> {
		self.configs
	}
}

/// Looks domains up in an autoconfig database.
///
/// Holds no state between lookups apart from the HTTP client, so one resolver
/// can be shared across threads.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
	database_url: String,
	client: Client
}

impl ConfigResolver {
	pub fn new(database: &DatabaseConfig, http: &HttpConfig) -> Result<Self, Error> {
		let client = Client::builder()
			.timeout(Duration::from_secs(database.timeout_secs))
			.user_agent(http.user_agent)
			.build()
			.map_err(Error::Http)?;

		Ok(Self{
			database_url: database.url.trim_end_matches('/').to_owned(),
			client
		})
	}

	/// A resolver for the public Thunderbird database.
	pub fn from_defaults() -> Result<Self, Error> {
		Self::new(&config::DEFAULT.database, &config::DEFAULT.http)
	}

	/// A resolver for another database root, with default HTTP settings.
	pub fn with_database_url(url: &str) -> Result<Self, Error> {
		let database = DatabaseConfig{
			url,
			..config::DEFAULT.database
		};
		Self::new(&database, &config::DEFAULT.http)
	}

	pub fn database_url(&self) -> &str {
		&self.database_url
	}

	/// Fetches the raw document for an already normalized domain.
	///
	/// Returns `None` when the database answers with a non-success status.
	pub fn fetch(&self, netloc: &str) -> Result<Option<String>, Error> {
		let url = format!("{}/{}", self.database_url, netloc);
		debug!("Requesting {}", url);

		let response = self.client.get(&url).send().map_err(Error::Http)?;
		let status = response.status();
		debug!("{} answered {}", url, status);

		if !status.is_success() {
			return Ok(None);
		}

		response.text().map(Some).map_err(Error::Http)
	}

	/// Fetches and parses the configuration for `domain`.
	pub fn resolve(&self, domain: &str) -> Result<ClientConfig, Error> {
		let netloc = normalize(domain)?;
		let xml = match self.fetch(&netloc)? {
			Some(xml) => xml,
			None => return Err(Error::NotFound { domain: domain.to_owned() }),
		};

		let config = ClientConfig::from_document(netloc, xml)?;
		debug!(
			"{} is served by {} with {} servers",
			config.domain(),
			config.email_provider(),
			config.configs().len()
		);
		Ok(config)
	}

	/// The first server for `protocol`, or `None` if the domain has none.
	pub fn lookup(&self, domain: &str, protocol: &str) -> Result<Option<ServerConfig>, Error> {
		let config = self.resolve(domain)?;
		Ok(config.get_protocol(protocol).cloned())
	}

	/// Every server configured for `domain`.
	pub fn lookup_all(&self, domain: &str) -> Result<Vec<ServerConfig>, Error> {
		Ok(self.resolve(domain)?.into_configs())
	}
}
