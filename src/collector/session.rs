// file: src/collector/session.rs
// version: 1.0.0
// guid: f4a5b6c7-d8e9-0123-4567-890123fabcde

//! SSH session wrapper for remote command execution

use crate::Result;
use ssh2::Session;
use std::io::Read;
use std::net::{TcpStream, ToSocketAddrs};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// One authenticated SSH session to a single host.
///
/// The remote host identity is accepted without verification on first
/// contact; key-file authentication is the only supported method. The
/// session is disconnected when the value is dropped, and disconnect
/// failures are discarded.
pub struct SshSession {
    session: Session,
    host: String,
}

impl SshSession {
    /// Connect and authenticate against a remote host.
    ///
    /// `timeout` bounds the TCP connect, the handshake, and every
    /// subsequent channel operation on this session.
    pub async fn connect(
        host: &str,
        username: &str,
        key_path: &str,
        timeout: Duration,
    ) -> Result<Self> {
        info!("Connecting to {} as {}", host, username);

        let addr = endpoint(host);
        let sock_addr = addr
            .to_socket_addrs()
            .map_err(|e| {
                crate::error::AgentError::Ssh(format!("Failed to resolve {}: {}", host, e))
            })?
            .next()
            .ok_or_else(|| {
                crate::error::AgentError::Ssh(format!("No address found for {}", host))
            })?;

        let tcp = TcpStream::connect_timeout(&sock_addr, timeout).map_err(|e| {
            crate::error::AgentError::Ssh(format!("Failed to connect to {}: {}", host, e))
        })?;

        let mut session = Session::new().map_err(|e| {
            crate::error::AgentError::Ssh(format!("Failed to create SSH session: {}", e))
        })?;

        session.set_tcp_stream(tcp);
        session.set_timeout(timeout_millis(timeout));
        session.handshake().map_err(|e| {
            crate::error::AgentError::Ssh(format!("SSH handshake failed for {}: {}", host, e))
        })?;

        let expanded_key = shellexpand::tilde(key_path);
        session
            .userauth_pubkey_file(username, None, Path::new(expanded_key.as_ref()), None)
            .map_err(|e| {
                crate::error::AgentError::Ssh(format!(
                    "Key authentication failed for {}@{}: {}",
                    username, host, e
                ))
            })?;

        if !session.authenticated() {
            return Err(crate::error::AgentError::Ssh(format!(
                "SSH authentication failed for {}@{}",
                username, host
            )));
        }

        info!("SSH connection established to {}", host);
        Ok(Self {
            session,
            host: host.to_string(),
        })
    }

    /// Execute a command and return the full stdout and stderr streams.
    ///
    /// `use_pty` requests a pseudo-terminal before execution, which some
    /// diagnostic commands need to produce output.
    pub async fn exec(&self, command: &str, use_pty: bool) -> Result<(String, String)> {
        debug!("Executing on {}: {}", self.host, command);

        let mut channel = self.session.channel_session().map_err(|e| {
            crate::error::AgentError::Ssh(format!("Failed to create SSH channel: {}", e))
        })?;

        if use_pty {
            channel.request_pty("xterm", None, None).map_err(|e| {
                crate::error::AgentError::Ssh(format!("Failed to request PTY: {}", e))
            })?;
        }

        channel.exec(command).map_err(|e| {
            crate::error::AgentError::Ssh(format!("Failed to execute command: {}", e))
        })?;

        let mut stdout = String::new();
        let mut stderr = String::new();

        channel.read_to_string(&mut stdout).map_err(|e| {
            crate::error::AgentError::Ssh(format!("Failed to read stdout: {}", e))
        })?;
        channel.stderr().read_to_string(&mut stderr).map_err(|e| {
            crate::error::AgentError::Ssh(format!("Failed to read stderr: {}", e))
        })?;

        channel.wait_close().map_err(|e| {
            crate::error::AgentError::Ssh(format!("Failed to close SSH channel: {}", e))
        })?;

        Ok((stdout, stderr))
    }
}

/// Render a configured host string as a connectable `host:port` endpoint.
///
/// Bare names and IPv4 addresses get the default SSH port, an explicit
/// `host:port` is kept as-is, and bare IPv6 literals are bracketed so the
/// colons are not mistaken for a port separator. An IPv6 address with a
/// non-default port must already be written in `[addr]:port` form.
fn endpoint(host: &str) -> String {
    match host.rsplit_once(':') {
        None => format!("{}:22", host),
        Some((head, port))
            if !head.is_empty() && !head.contains(':') && port.parse::<u16>().is_ok() =>
        {
            host.to_string()
        }
        Some(_) if host.starts_with('[') => host.to_string(),
        Some(_) => format!("[{}]:22", host),
    }
}

/// Session timeout in milliseconds, saturating instead of truncating
fn timeout_millis(timeout: Duration) -> u32 {
    u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX)
}

impl Drop for SshSession {
    fn drop(&mut self) {
        // Release faults are intentionally discarded; the record for this
        // host is already complete by the time the session is dropped.
        let _ = self
            .session
            .disconnect(None, "status collection finished", None);
    }
}
