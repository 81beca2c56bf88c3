use clap::Parser;
use std::net::{IpAddr, SocketAddr};

/// Runtime configuration for the `users-api` server.
///
/// Every option can also be set through its environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "users-api")]
#[command(about = "REST resource for User records", long_about = None)]
pub struct Config {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "USERS_API_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to bind the HTTP listener to
    #[arg(short, long, env = "USERS_API_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Capacity of the user actor's request channel
    #[arg(long, env = "USERS_API_CHANNEL_BUFFER", default_value_t = 32,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub channel_buffer: u64,

    /// Log filter used when RUST_LOG is not set (e.g. "info", "users_api=debug")
    #[arg(long, env = "USERS_API_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn buffer_size(&self) -> usize {
        usize::try_from(self.channel_buffer).unwrap_or(usize::MAX)
    }
}
