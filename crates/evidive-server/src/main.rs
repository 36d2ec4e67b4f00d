// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Evidive i18n server binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use evidive_server::{create_app_state, create_router, AppState};
use evidive_server_config::ServerConfig;
use tower_http::{
	cors::{Any, CorsLayer},
	trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod version;

/// Evidive i18n server - HTTP server for localized message catalogs.
#[derive(Parser, Debug)]
#[command(
	name = "evidive-server",
	about = "Evidive localized message catalog server",
	version
)]
struct Args {
	/// Path to a TOML config file (defaults to /etc/evidive/server.toml)
	#[arg(long, env = "EVIDIVE_SERVER_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version and build information
	Version,
	/// Load configuration and catalogs, report coverage, then exit
	Check,
}

fn init_tracing(config: &ServerConfig) {
	let json = config.logging.json;
	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.logging.level.clone().into()),
		)
		.with(json.then(|| tracing_subscriber::fmt::layer().json()))
		.with((!json).then(tracing_subscriber::fmt::layer))
		.init();
}

fn print_coverage(state: &AppState) {
	let store = &state.store;
	let base = store.base_locale();
	let total = store.merged(base).leaf_paths().len();
	println!("base locale {base}: {total} messages");
	for locale in store.locales().iter().filter(|l| **l != base) {
		let missing = store.missing_keys(*locale).len();
		println!(
			"{:<4} {:>5} missing  {}",
			locale.code(),
			missing,
			locale.info().native_name
		);
	}
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	if let Some(Command::Version) = args.command {
		println!("{}", version::format_version_info());
		return Ok(());
	}

	dotenvy::dotenv().ok();

	let config = match &args.config {
		Some(path) => evidive_server_config::load_config_with_file(path)?,
		None => evidive_server_config::load_config()?,
	};

	init_tracing(&config);

	// Missing or malformed catalogs abort startup.
	let state = create_app_state(&config)?;

	if let Some(Command::Check) = args.command {
		print_coverage(&state);
		return Ok(());
	}

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		base_locale = %state.store.base_locale(),
		locales = state.store.locales().len(),
		"starting evidive-server"
	);

	let app = create_router(state)
		.layer(TraceLayer::new_for_http())
		.layer(
			CorsLayer::new()
				.allow_origin(Any)
				.allow_methods(Any)
				.allow_headers(Any),
		);

	let addr = config.socket_addr();
	tracing::info!("listening on {}", addr);

	let listener = tokio::net::TcpListener::bind(&addr).await?;

	tokio::select! {
		result = axum::serve(listener, app) => {
			if let Err(e) = result {
				tracing::error!(error = %e, "Server error");
			}
		}
		_ = tokio::signal::ctrl_c() => {
			tracing::info!("Received shutdown signal");
		}
	}

	tracing::info!("Server shutdown complete");
	Ok(())
}
