use std::error::Error;
use std::fs;
use std::path::Path;
use std::process;

use autoconfig::config::{self, Config};
use autoconfig::{ConfigResolver, ServerConfig};
use clap::Parser;
use log::debug;
use simple_error::bail;

mod args;

use args::AutoconfigArgs;

fn main() {
	if let Err(err) = run() {
		log::error!("Error: {}", err);
		process::exit(1);
	}
}

fn run() -> Result<(), Box<dyn Error>> {
	pretty_env_logger::init();

	let args = AutoconfigArgs::parse();
	debug!("Args: {:?}", args);

	/*
	 * config parsing
	 */
	let config_text = read_config(args.config.as_deref())?;
	let config: Config = match config_text.as_deref() {
		Some(text) => toml::from_str(text)?,
		None => config::DEFAULT,
	};
	debug!("Config: {:?}", config);

	let resolver = ConfigResolver::new(&config.database, &config.http)?;

	/*
	 * lookup
	 */
	match &args.protocol {
		Some(protocol) => {
			let server = match resolver.lookup(&args.domain, protocol)? {
				Some(server) => server,
				None => {
					bail!("no {} server configured for {}", protocol, args.domain);
				},
			};

			if args.json {
				println!("{}", serde_json::to_string_pretty(&server)?);
			} else {
				println!("{}", server_line(&server));
			}
		},
		None => {
			let client_config = resolver.resolve(&args.domain)?;

			if args.json {
				println!("{}", serde_json::to_string_pretty(&client_config)?);
			} else {
				println!("{} ({})", client_config.domain(), client_config.email_provider());
				for server in client_config.configs() {
					println!("{}", server_line(server));
				}
			}
		},
	}

	Ok(())
}

/// Reads the config file, if any. A path given on the command line must exist.
fn read_config(path: Option<&Path>) -> Result<Option<String>, Box<dyn Error>> {
	let path = match path {
		Some(path) => {
			if !path.exists() {
				bail!("could not find config file {}", path.display());
			}
			path
		},
		None => {
			let path = Path::new(config::DEFAULT_PATH);
			if !path.exists() {
				debug!("No {} found, using defaults", config::DEFAULT_PATH);
				return Ok(None);
			}
			path
		},
	};

	Ok(Some(fs::read_to_string(path)?))
}

fn server_line(server: &ServerConfig) -> String {
	format!(
		"{:<5} {:<30} {:<9} {:<20} {}",
		server.protocol,
		server.to_string(),
		server.socket_type,
		server.authentication,
		server.username
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn explicit_config_path_must_exist() {
		let dir = tempfile::tempdir().unwrap();
		let missing = dir.path().join("nope.toml");

		let err = read_config(Some(missing.as_path())).unwrap_err();
		assert!(err.to_string().contains("could not find config file"));
	}

	#[test]
	fn explicit_config_path_is_read() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("autoconfig.toml");
		fs::write(&path, "[database]\nurl = \"http://localhost/v1.1\"\ntimeout_secs = 3\n").unwrap();

		let text = read_config(Some(path.as_path())).unwrap().unwrap();
		let config: Config = toml::from_str(&text).unwrap();
		assert_eq!(config.database.timeout_secs, 3);
	}

	#[test]
	fn missing_default_config_uses_defaults() {
		// tests run from the package root, which ships no autoconfig.toml
		assert!(!Path::new(config::DEFAULT_PATH).exists());
		assert!(read_config(None).unwrap().is_none());
	}
}
