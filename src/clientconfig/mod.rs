//! Reading Thunderbird `clientConfig` documents.

pub mod types;

use log::trace;

use crate::error::ParseError;
use crate::server::ServerConfig;

/// Parses an autoconfig document into its provider id and server list.
///
/// Incoming servers come first, then outgoing ones, each in document order
/// wherever they appear among the provider's children. Protocol and socket
/// type are lowercased. Any missing element fails the whole document.
pub fn parse_document(text: &str) -> Result<(String, Vec<ServerConfig>), ParseError> {
	let document: types::ClientConfigDocument = serde_xml_rs::from_str(text).map_err(ParseError::Xml)?;
	let provider = document.email_provider;

	let mut incoming = Vec::new();
	let mut outgoing = Vec::new();
	for child in provider.children {
		match child {
			types::ProviderChild::IncomingServer(server) => incoming.push(server),
			types::ProviderChild::OutgoingServer(server) => outgoing.push(server),
			types::ProviderChild::Other => {},
		}
	}

	let mut servers = Vec::with_capacity(incoming.len() + outgoing.len());
	for server in incoming.into_iter().chain(outgoing) {
		let server = server_config(server)?;
		trace!("{} server {} for {}", server.protocol, server, provider.id);
		servers.push(server);
	}

	Ok((provider.id, servers))
}

fn server_config(server: types::Server) -> Result<ServerConfig, ParseError> {
	if server.port == 0 {
		return Err(ParseError::InvalidPort { hostname: server.hostname });
	}

	let authentication = match server.authentication.into_iter().next() {
		Some(authentication) => authentication,
		None => return Err(ParseError::MissingAuthentication { hostname: server.hostname }),
	};

	Ok(ServerConfig{
		protocol: server.protocol.to_lowercase(),
		hostname: server.hostname,
		port: server.port,
		socket_type: server.socket_type.to_lowercase(),
		authentication,
		username: server.username
	})
}
