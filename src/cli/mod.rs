use clap::Parser;

use crate::config::{AppConfig, StoreBackend};

/// Command-line overrides applied on top of the environment config.
#[derive(Debug, Parser)]
#[command(name = "asana-replica-api")]
#[command(about = "REST backend mimicking a subset of the Asana API")]
#[command(version)]
pub struct Cli {
    #[arg(long, help = "Address to bind (overrides ASANA_API_HOST)")]
    pub host: Option<String>,

    #[arg(long, short, help = "Port to listen on (overrides ASANA_API_PORT / PORT)")]
    pub port: Option<u16>,

    #[arg(long, value_enum, help = "Document store backend")]
    pub store: Option<StoreBackend>,

    #[arg(long, help = "Postgres connection string for the postgres store")]
    pub database_url: Option<String>,
}

impl Cli {
    pub fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(url) = self.database_url {
            config.store.database_url = Some(url);
            // A URL on the command line implies the postgres store unless told otherwise
            if self.store.is_none() {
                config.store.backend = StoreBackend::Postgres;
            }
        }
        if let Some(store) = self.store {
            config.store.backend = store;
        }
        config
    }
}
