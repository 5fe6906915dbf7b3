use std::fmt;

use serde::de::{EnumAccess, IgnoredAny, VariantAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// The `<clientConfig>` root. Elements we don't model are skipped.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfigDocument {
	pub email_provider: EmailProvider
}

#[derive(Debug, Deserialize)]
pub struct EmailProvider {
	/// The `id` attribute.
	pub id: String,
	/// Every child element, in document order.
	#[serde(rename = "$value", default)]
	pub children: Vec<ProviderChild>
}

/// A child of `<emailProvider>`. Server elements may be interleaved with
/// each other and with `<domain>`, `<displayName>` and friends.
#[derive(Debug)]
pub enum ProviderChild {
	IncomingServer(Server),
	OutgoingServer(Server),
	Other
}

impl<'de> Deserialize<'de> for ProviderChild {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_enum("ProviderChild", &["incomingServer", "outgoingServer"], ProviderChildVisitor)
	}
}

struct ProviderChildVisitor;

impl<'de> Visitor<'de> for ProviderChildVisitor {
	type Value = ProviderChild;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("an emailProvider child element")
	}

	fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<Self::Value, A::Error> {
		let (name, variant): (String, _) = data.variant()?;
		match name.as_str() {
			"incomingServer" => variant.newtype_variant().map(ProviderChild::IncomingServer),
			"outgoingServer" => variant.newtype_variant().map(ProviderChild::OutgoingServer),
			// skip the whole element, attributes and children included
			_ => variant.newtype_variant::<IgnoredAny>().map(|_| ProviderChild::Other),
		}
	}
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
	/// The `type` attribute.
	#[serde(rename = "type")]
	pub protocol: String,
	pub hostname: String,
	pub port: u16,
	pub socket_type: String,
	// providers list several methods in order of preference
	#[serde(default)]
	pub authentication: Vec<String>,
	pub username: String
}
