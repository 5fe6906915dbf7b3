use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[clap(version, about)]
pub struct AutoconfigArgs {
	/// Domain or URL to look up
	pub domain: String,
	/// Only show the first server for this protocol (imap, pop3, smtp)
	#[arg(short, long)]
	pub protocol: Option<String>,
	/// Print JSON instead of a table
	#[arg(long)]
	pub json: bool,
	/// Config file, defaults to ./autoconfig.toml when present
	#[arg(short, long)]
	pub config: Option<PathBuf>,
}
