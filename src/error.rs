//! Error types.

/// Autoconfig resolution error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The input could not be reduced to a host.
	#[error("invalid domain \"{domain}\"")]
	InvalidDomain {
		/// The input as given by the caller.
		domain: String,
	},

	/// The database has no configuration for the domain.
	#[error("no configuration file found for \"{domain}\"")]
	NotFound {
		/// The input as given by the caller.
		domain: String,
	},

	/// The database answered with a document we could not read.
	#[error("parse: {0}")]
	Parse(#[source] ParseError),

	/// The request itself failed.
	#[error("http: {0}")]
	Http(#[source] reqwest::Error),
}

/// Errors returned while reading a `clientConfig` document.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
	/// Not well-formed, or a required element or attribute is missing.
	#[error("xml: {0}")]
	Xml(#[source] serde_xml_rs::Error),

	/// A server element lists no `<authentication>`.
	#[error("server \"{hostname}\" has no authentication method")]
	MissingAuthentication {
		/// Host of the offending server.
		hostname: String,
	},

	/// A server element has port 0.
	#[error("server \"{hostname}\" has an invalid port")]
	InvalidPort {
		/// Host of the offending server.
		hostname: String,
	},
}

impl From<ParseError> for Error {
	fn from(err: ParseError) -> Self {
		Error::Parse(err)
	}
}
