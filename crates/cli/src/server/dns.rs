use custom_dns_infrastructure::dns::DnsServerHandler;
use hickory_server::ServerFuture;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tracing::info;

const TCP_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn start_dns_server(bind_addr: SocketAddr, handler: DnsServerHandler) -> anyhow::Result<()> {
    let mut server = ServerFuture::new(handler);

    let udp_socket = UdpSocket::bind(bind_addr).await?;
    server.register_socket(udp_socket);

    let tcp_listener = TcpListener::bind(bind_addr).await?;
    server.register_listener(tcp_listener, TCP_TIMEOUT);

    info!(bind_address = %bind_addr, "DNS server listening on UDP and TCP");

    server.block_until_done().await?;
    Ok(())
}
