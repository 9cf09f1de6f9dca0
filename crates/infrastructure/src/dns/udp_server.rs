use super::query_parser::MAX_UDP_PAYLOAD;
use super::server::DnsServerHandler;
use adfilter_dns_application::services::StatsCollector;
use adfilter_dns_application::use_cases::HandleDnsQueryUseCase;
use adfilter_dns_domain::config::ServerConfig;
use adfilter_dns_domain::{DomainError, ServerLifecycleState, ServerSnapshot};
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, info_span, warn, Instrument};

/// Datagrams being handled at once; the listener stops reading when full.
pub const MAX_IN_FLIGHT: usize = 1024;

const RECV_BACKOFF_BASE: Duration = Duration::from_millis(10);
const RECV_BACKOFF_MAX: Duration = Duration::from_secs(1);

struct Lifecycle {
    state: ServerLifecycleState,
    local_addr: Option<SocketAddr>,
    listener: Option<JoinHandle<()>>,
}

/// UDP DNS listener with a one-way `NotStarted -> Running -> Stopped`
/// lifecycle. A stopped server cannot be started again.
pub struct UdpDnsServer {
    config: ServerConfig,
    handler: DnsServerHandler,
    stats: Arc<StatsCollector>,
    shutdown: CancellationToken,
    lifecycle: Mutex<Lifecycle>,
}

impl UdpDnsServer {
    pub fn new(config: ServerConfig, use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        let stats = use_case.stats().clone();
        Self {
            config,
            handler: DnsServerHandler::new(use_case),
            stats,
            shutdown: CancellationToken::new(),
            lifecycle: Mutex::new(Lifecycle {
                state: ServerLifecycleState::NotStarted,
                local_addr: None,
                listener: None,
            }),
        }
    }

    /// Binds the socket and spawns the listener task.
    ///
    /// Must be called from within a tokio runtime. Bind failures are returned
    /// here and leave the server `Stopped`. Returns the bound address, which
    /// differs from the configured one when port 0 was requested.
    pub async fn start(&self) -> Result<SocketAddr, DomainError> {
        let mut lifecycle = self.lock_lifecycle();
        match lifecycle.state {
            ServerLifecycleState::NotStarted => {}
            ServerLifecycleState::Running => return Err(DomainError::AlreadyStarted),
            ServerLifecycleState::Stopped => return Err(DomainError::ServerStopped),
        }

        let (socket, local_addr) = match self.bind() {
            Ok(bound) => bound,
            Err(e) => {
                lifecycle.state = ServerLifecycleState::Stopped;
                error!(error = %e, "DNS server failed to start");
                return Err(e);
            }
        };

        let span = info_span!("dns_server", addr = %local_addr);
        let listener = tokio::spawn(
            run_listener(Arc::new(socket), self.handler.clone(), self.shutdown.clone())
                .instrument(span),
        );

        lifecycle.state = ServerLifecycleState::Running;
        lifecycle.local_addr = Some(local_addr);
        lifecycle.listener = Some(listener);

        info!(bind_address = %local_addr, "DNS Validation Server started");
        Ok(local_addr)
    }

    /// Signals the listener to exit and waits for it, bounded by
    /// `shutdown_timeout_ms`. Idempotent.
    pub async fn stop(&self) {
        let listener = {
            let mut lifecycle = self.lock_lifecycle();
            if lifecycle.state == ServerLifecycleState::Stopped {
                return;
            }
            lifecycle.state = ServerLifecycleState::Stopped;
            lifecycle.listener.take()
        };

        self.shutdown.cancel();

        if let Some(listener) = listener {
            match tokio::time::timeout(self.config.shutdown_timeout(), listener).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => error!(error = %e, "DNS listener task failed"),
                Err(_) => warn!(
                    timeout_ms = self.config.shutdown_timeout_ms,
                    "DNS listener did not exit in time"
                ),
            }
        }

        info!("DNS Validation Server stopped");
    }

    pub fn state(&self) -> ServerLifecycleState {
        self.lock_lifecycle().state
    }

    pub fn is_running(&self) -> bool {
        self.state().is_running()
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.lock_lifecycle().local_addr
    }

    pub fn snapshot(&self) -> ServerSnapshot {
        let (server_running, server_address) = {
            let lifecycle = self.lock_lifecycle();
            let address = lifecycle
                .local_addr
                .map(|a| a.to_string())
                .unwrap_or_else(|| self.config.socket_addr_string());
            (lifecycle.state.is_running(), address)
        };

        ServerSnapshot {
            stats: self.stats.snapshot(),
            server_running,
            server_address,
        }
    }

    fn lock_lifecycle(&self) -> std::sync::MutexGuard<'_, Lifecycle> {
        self.lifecycle.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn bind(&self) -> Result<(UdpSocket, SocketAddr), DomainError> {
        let addr_str = self.config.socket_addr_string();
        let socket_addr: SocketAddr = addr_str
            .parse()
            .map_err(|_| DomainError::InvalidAddress(addr_str.clone()))?;

        let bind_error = |e: io::Error| DomainError::Bind {
            addr: addr_str.clone(),
            reason: e.to_string(),
        };
        let socket = create_udp_socket(socket_addr).map_err(bind_error)?;
        let local_addr = socket.local_addr().map_err(bind_error)?;
        Ok((socket, local_addr))
    }
}

impl Drop for UdpDnsServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn run_listener(
    socket: Arc<UdpSocket>,
    handler: DnsServerHandler,
    shutdown: CancellationToken,
) {
    let mut recv_buf = [0u8; MAX_UDP_PAYLOAD];
    let in_flight = Arc::new(Semaphore::new(MAX_IN_FLIGHT));
    let mut consecutive_errors: u32 = 0;

    loop {
        let permit = tokio::select! {
            _ = shutdown.cancelled() => break,
            permit = in_flight.clone().acquire_owned() => match permit {
                Ok(permit) => permit,
                Err(_) => break,
            },
        };

        tokio::select! {
            _ = shutdown.cancelled() => break,
            result = socket.recv_from(&mut recv_buf) => {
                match result {
                    Ok((n, from)) => {
                        consecutive_errors = 0;
                        let packet = recv_buf[..n].to_vec();
                        let socket = socket.clone();
                        let handler = handler.clone();
                        tokio::spawn(async move {
                            let _permit = permit;
                            handle_datagram(&socket, &handler, &packet, from).await;
                        });
                    }
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => {
                        consecutive_errors = consecutive_errors.saturating_add(1);
                        let delay = recv_error_backoff(consecutive_errors);
                        error!(
                            error = %e,
                            consecutive_errors,
                            backoff_ms = delay.as_millis() as u64,
                            "UDP recv error"
                        );
                        tokio::select! {
                            _ = shutdown.cancelled() => break,
                            _ = tokio::time::sleep(delay) => {}
                        }
                    }
                }
            }
        }
    }

    debug!("DNS listener shutting down");
}

/// Doubles from 10ms per consecutive receive error, capped at one second.
pub fn recv_error_backoff(consecutive_errors: u32) -> Duration {
    let shift = consecutive_errors.saturating_sub(1).min(16);
    RECV_BACKOFF_BASE
        .saturating_mul(1u32 << shift)
        .min(RECV_BACKOFF_MAX)
}

async fn handle_datagram(
    socket: &UdpSocket,
    handler: &DnsServerHandler,
    packet: &[u8],
    from: SocketAddr,
) {
    let response = match handler.handle_raw_udp(packet, from) {
        Ok(response) => response,
        Err(e) => {
            debug!(client = %from, len = packet.len(), error = %e, "Dropping malformed DNS packet");
            return;
        }
    };

    if let Err(e) = socket.send_to(&response, from).await {
        warn!(client = %from, error = %e, "Failed to send DNS response");
    }
}

fn create_udp_socket(socket_addr: SocketAddr) -> io::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}
