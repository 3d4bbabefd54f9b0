use std::path::PathBuf;

use clap::Parser;
use link_server::ServerConfig;

#[derive(Parser, Debug)]
#[command(
    name = "link",
    about = "Identbase — identity service",
    version,
)]
pub struct Cli {
    /// IP to serve application traffic on
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to serve traffic on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// TOML configuration file; flags and environment take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the server configuration: file (or defaults), then flags.
    pub fn server_config(&self) -> link_server::ServerResult<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        config.debug |= self.verbose;
        Ok(config)
    }
}
