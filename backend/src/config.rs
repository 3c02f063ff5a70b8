//! Service configuration loaded via OrthoConfig.
//!
//! Values come from `--port` / `--data-path` flags, `REVIEWS_*` environment
//! variables, or their defaults, in that order of precedence. The port also
//! honours the platform `PORT` variable when nothing else sets it.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::warn;

/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 8000;
/// Unprefixed variable set by hosting platforms for the listen port.
pub const PLATFORM_PORT_VAR: &str = "PORT";
/// Review file used when none is configured, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/reviews.csv";

/// Listener and storage settings for the review service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REVIEWS")]
pub struct ReviewServiceSettings {
    /// TCP port to listen on, on all interfaces.
    pub port: Option<u16>,
    /// Path of the CSV review file.
    pub data_path: Option<PathBuf>,
}

impl ReviewServiceSettings {
    /// Return the configured port.
    ///
    /// Falls back to `PORT`, then to [`DEFAULT_PORT`]. An unparseable `PORT`
    /// is logged and ignored.
    pub fn port(&self) -> u16 {
        self.port
            .or_else(|| platform_port(std::env::var(PLATFORM_PORT_VAR).ok()?))
            .unwrap_or(DEFAULT_PORT)
    }

    /// Return the configured review file, falling back to the default.
    pub fn data_path(&self) -> PathBuf {
        self.data_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
    }

    /// Socket address the server binds: `0.0.0.0:<port>`.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port()))
    }
}

fn platform_port(raw: String) -> Option<u16> {
    match raw.trim().parse() {
        Ok(port) => Some(port),
        Err(e) => {
            warn!(variable = PLATFORM_PORT_VAR, value = %raw, error = %e, "ignoring invalid port");
            None
        }
    }
}
