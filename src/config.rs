use serde::{Deserialize, Serialize};

/// Where the binary looks for its config when no path is given.
pub const DEFAULT_PATH: &str = "autoconfig.toml";

#[derive(Debug, Deserialize, Serialize)]
pub struct Config<'a> {
	#[serde(borrow, default)]
	pub database: DatabaseConfig<'a>,

	#[serde(borrow, default)]
	pub http: HttpConfig<'a>
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig<'a> {
	/// Versioned root of the autoconfig database, without a trailing domain.
	pub url: &'a str,
	pub timeout_secs: u64
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig<'a> {
	pub user_agent: &'a str
}

pub const DEFAULT: Config = Config{
	database: DatabaseConfig{
		url: "https://autoconfig.thunderbird.net/v1.1",
		timeout_secs: 30
	},
	http: HttpConfig{
		user_agent: concat!("autoconfig/", env!("CARGO_PKG_VERSION"))
	}
};

impl Default for DatabaseConfig<'_> {
	fn default() -> Self {
		DEFAULT.database
	}
}

impl Default for HttpConfig<'_> {
	fn default() -> Self {
		DEFAULT.http
	}
}
