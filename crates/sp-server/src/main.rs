// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Collaborative page server binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sp_server::{api::apply_http_layers, create_app_state, create_router, version};
use sp_server_config::LogFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// sp-server - HTTP server for collaborative pages.
#[derive(Parser, Debug)]
#[command(name = "sp-server", about = "Collaborative page server", version)]
struct Args {
	/// Path to a TOML config file (defaults to /etc/sp/server.toml)
	#[arg(long, env = "SP_SERVER_CONFIG")]
	config: Option<PathBuf>,

	/// Subcommands for sp-server (e.g., `version`)
	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version and build information
	Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	if let Some(Command::Version) = args.command {
		println!("{}", version::format_version_info());
		return Ok(());
	}

	// Load .env file if present
	dotenvy::dotenv().ok();

	let config = match &args.config {
		Some(path) => sp_server_config::load_config_with_file(path)?,
		None => sp_server_config::load_config()?,
	};

	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| config.logging.level.clone().into());
	let (text, json) = match config.logging.format {
		LogFormat::Text => (Some(tracing_subscriber::fmt::layer()), None),
		LogFormat::Json => (None, Some(tracing_subscriber::fmt::layer().json())),
	};
	tracing_subscriber::registry()
		.with(filter)
		.with(text)
		.with(json)
		.init();

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		database = %config.database.url,
		datacenter = %config.auth.datacenter,
		"starting sp-server"
	);

	let pool = sp_server::db::create_pool(&config.database.url).await?;
	sp_server::db::run_migrations(&pool).await?;

	let state = create_app_state(pool, &config);
	let app = apply_http_layers(create_router(state, &config), &config);

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
