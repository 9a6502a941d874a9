mod config;
mod routes;
mod services;
mod state;

use clap::{Parser, Subcommand};

use crate::config::ServerConfig;
use crate::services::password::PasswordHash;
use crate::services::users::{self, Role, UserDirectory, UserRecord};

#[derive(Parser, Debug)]
#[command(name = "dataentry-server", about = "DataEntry demo API server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,
    /// Print a directory file entry with a freshly salted credential.
    Hash {
        #[arg(long)]
        id: String,
        #[arg(long)]
        username: String,
        #[arg(long, default_value = "user")]
        role: Role,
        password: String,
    },
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match Cli::parse().command.unwrap_or(Command::Serve) {
        Command::Serve => serve().await,
        Command::Hash { id, username, role, password } => {
            let record = UserRecord { id, username, role, credential: PasswordHash::new(&password) };
            let yaml = users::directory_entry_yaml(&record).expect("directory entry serialization failed");
            print!("{yaml}");
        }
    }
}

async fn serve() {
    let config = ServerConfig::from_env().expect("invalid server configuration");

    let directory = match &config.users_file {
        Some(path) => UserDirectory::from_yaml_file(path).expect("user directory load failed"),
        None => {
            tracing::warn!("DATAENTRY_USERS_FILE not set, using built-in demo users");
            UserDirectory::builtin()
        }
    };
    tracing::info!(users = directory.len(), "user directory loaded");

    let state = state::AppState::new(directory);
    let app = routes::app(state, &config);
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("failed to bind");

    tracing::info!(addr = %config.bind_addr(), "dataentry listening");
    axum::serve(listener, app).await.expect("server failed");
}
