//! Test doubles shared by repository and service tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use crate::domain::{DomainError, DomainResult, Employee, Restaurant};
use super::{MemoryStore, RecordStore};

/// Store whose every operation fails
pub struct FailingStore;

#[async_trait]
impl RecordStore for FailingStore {
    async fn load(&self, _partition: Restaurant) -> DomainResult<Vec<Employee>> {
        Err(DomainError::Store("offline".into()))
    }

    async fn save(&self, _partition: Restaurant, _employees: &[Employee]) -> DomainResult<()> {
        Err(DomainError::Store("offline".into()))
    }

    async fn create(&self, _partition: Restaurant, _name: &str) -> DomainResult<Employee> {
        Err(DomainError::Store("offline".into()))
    }

    async fn delete(&self, _partition: Restaurant, _id: u32) -> DomainResult<()> {
        Err(DomainError::Store("offline".into()))
    }

    async fn update(&self, _partition: Restaurant, _employee: &Employee) -> DomainResult<()> {
        Err(DomainError::Store("offline".into()))
    }
}

/// Memory store with switchable write failures and optional write latency
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_writes: AtomicBool,
    pub fail_reads: AtomicBool,
    pub loads: AtomicUsize,
    /// When set, `update` waits for a notification before writing
    pub gate: Option<Arc<Notify>>,
}

impl FlakyStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            fail_writes: AtomicBool::new(false),
            fail_reads: AtomicBool::new(false),
            loads: AtomicUsize::new(0),
            gate: None,
        }
    }

    pub fn gated(inner: MemoryStore, gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(inner)
        }
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_write(&self) -> DomainResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(DomainError::Store("write rejected".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RecordStore for FlakyStore {
    async fn load(&self, partition: Restaurant) -> DomainResult<Vec<Employee>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::Store("read rejected".into()));
        }
        self.inner.load(partition).await
    }

    async fn save(&self, partition: Restaurant, employees: &[Employee]) -> DomainResult<()> {
        self.check_write()?;
        self.inner.save(partition, employees).await
    }

    async fn create(&self, partition: Restaurant, name: &str) -> DomainResult<Employee> {
        self.check_write()?;
        self.inner.create(partition, name).await
    }

    async fn delete(&self, partition: Restaurant, id: u32) -> DomainResult<()> {
        self.check_write()?;
        self.inner.delete(partition, id).await
    }

    async fn update(&self, partition: Restaurant, employee: &Employee) -> DomainResult<()> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.check_write()?;
        self.inner.update(partition, employee).await
    }
}

/// Minimal HTTP responder: serves `responses` in order, one per connection,
/// and returns the raw requests it received.
pub async fn fake_http(responses: Vec<(u16, String)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let mut requests = Vec::new();
        for (status, body) in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            requests.push(read_request(&mut socket).await);

            let response = format!(
                "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        }
        requests
    });

    (url, handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut data = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = tokio::time::timeout(Duration::from_secs(5), socket.read(&mut chunk))
            .await
            .unwrap()
            .unwrap();
        if n == 0 {
            break;
        }
        data.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&data).to_string();
        if let Some(end) = text.find("\r\n\r\n") {
            let content_length = text[..end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    if name.eq_ignore_ascii_case("content-length") {
                        value.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);
            if data.len() >= end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&data).to_string()
}

/// URL of a port nothing listens on
pub async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}
