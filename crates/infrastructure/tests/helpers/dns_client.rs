#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;

pub struct TestDnsClient {
    socket: UdpSocket,
    server: SocketAddr,
}

impl TestDnsClient {
    pub async fn connect(server: SocketAddr) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        Self { socket, server }
    }

    pub async fn send(&self, packet: &[u8]) {
        self.socket.send_to(packet, self.server).await.unwrap();
    }

    /// `None` when nothing arrives within `wait`.
    pub async fn recv(&self, wait: Duration) -> Option<Vec<u8>> {
        let mut buf = vec![0u8; 512];
        match tokio::time::timeout(wait, self.socket.recv_from(&mut buf)).await {
            Ok(Ok((n, _))) => {
                buf.truncate(n);
                Some(buf)
            }
            _ => None,
        }
    }

    pub async fn query(&self, packet: &[u8]) -> Option<Vec<u8>> {
        self.send(packet).await;
        self.recv(Duration::from_secs(2)).await
    }
}

pub fn rcode(response: &[u8]) -> u8 {
    response[3] & 0x0F
}

pub fn answer_count(response: &[u8]) -> u16 {
    u16::from_be_bytes([response[6], response[7]])
}
