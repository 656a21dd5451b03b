//! Connectivity monitor
//!
//! Status is a shared flag that starts out optimistic. In live mode a
//! background probe (a TCP connect to the API host) refreshes it. Nothing
//! probes in mock mode; the simulated responder still refuses to answer
//! when the flag is cleared, so offline handling can be exercised there.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkStatus {
    Online,
    Offline,
}

/// Shared connectivity flag
#[derive(Debug, Clone)]
pub struct Reachability {
    connected: Arc<AtomicBool>,
}

impl Default for Reachability {
    fn default() -> Self {
        Self::new()
    }
}

impl Reachability {
    pub fn new() -> Self {
        Self {
            connected: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }

    pub fn status(&self) -> NetworkStatus {
        if self.is_connected() {
            NetworkStatus::Online
        } else {
            NetworkStatus::Offline
        }
    }

    pub fn set_connected(&self, connected: bool) {
        let previous = self.connected.swap(connected, Ordering::Relaxed);
        if previous != connected {
            tracing::info!(
                "[NET] Internet: {}",
                if connected { "available" } else { "unavailable" }
            );
        }
    }

    /// Try a TCP connect to `addr` (`host:port`) and record the outcome
    pub async fn probe(&self, addr: &str, timeout: Duration) -> NetworkStatus {
        let connected = matches!(
            tokio::time::timeout(timeout, TcpStream::connect(addr)).await,
            Ok(Ok(_))
        );
        self.set_connected(connected);
        self.status()
    }

    /// Probe `addr` every `interval` until the returned handle is aborted
    pub fn spawn_monitor(&self, addr: String, interval: Duration) -> JoinHandle<()> {
        let reachability = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                reachability.probe(&addr, interval.min(Duration::from_secs(5))).await;
            }
        })
    }
}

/// `host:port` for a base URL, defaulting the port from the scheme
pub fn probe_address(base_url: &str) -> Option<String> {
    let url = reqwest::Url::parse(base_url).ok()?;
    let host = url.host_str()?;
    let port = url.port_or_known_default()?;
    Some(format!("{}:{}", host, port))
}
