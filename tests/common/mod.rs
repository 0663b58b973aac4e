#![allow(dead_code)]

use epoch_exporter::infrastructure::Database;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;

/// In-memory ops database holding `shares_epoch_counts`.
pub async fn ops_database(rows: &[(&str, i64, i64)]) -> Database {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::query(
        r#"
        CREATE TABLE shares_epoch_counts (
            chain TEXT NOT NULL,
            epoch INTEGER NOT NULL,
            share_count INTEGER NOT NULL
        )
        "#,
    )
    .execute(&db.pool)
    .await
    .expect("Failed to create shares_epoch_counts");

    insert_rows(&db, rows).await;
    db
}

pub async fn insert_rows(db: &Database, rows: &[(&str, i64, i64)]) {
    for (chain, epoch, share_count) in rows {
        sqlx::query("INSERT INTO shares_epoch_counts (chain, epoch, share_count) VALUES ($1, $2, $3)")
            .bind(*chain)
            .bind(*epoch)
            .bind(*share_count)
            .execute(&db.pool)
            .await
            .expect("Failed to insert row");
    }
}

/// Fresh directory under the system temp dir.
pub fn scratch_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("{}-{}", prefix, uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}

/// Sorted file names in `dir`.
pub fn file_names(dir: &PathBuf) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to list dir")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[derive(Debug, Clone)]
pub struct RecordedPush {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

/// Minimal Pushgateway stand-in.
///
/// Accepts one request per connection, records it and answers `202`, or
/// `400` for pushes to a job listed in `reject_jobs`.
pub struct FakeGateway {
    pub url: String,
    pub pushes: Arc<Mutex<Vec<RecordedPush>>>,
}

impl FakeGateway {
    pub async fn start(reject_jobs: &[&str]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake gateway");
        let url = format!("http://{}", listener.local_addr().unwrap());
        let pushes = Arc::new(Mutex::new(Vec::new()));
        let reject: Vec<String> = reject_jobs
            .iter()
            .map(|job| format!("/metrics/job/{}", job))
            .collect();

        let recorded = pushes.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let recorded = recorded.clone();
                let reject = reject.clone();
                tokio::spawn(async move {
                    let Some((mut stream, push)) = read_request(stream).await else {
                        return;
                    };
                    let rejected = reject.contains(&push.path);
                    // Recorded before the response is written.
                    recorded.lock().await.push(push);

                    let response: &[u8] = if rejected {
                        b"HTTP/1.1 400 Bad Request\r\nContent-Length: 11\r\nConnection: close\r\n\r\nbad payload"
                    } else {
                        b"HTTP/1.1 202 Accepted\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                    };
                    let _ = stream.write_all(response).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        Self { url, pushes }
    }

    pub async fn pushes(&self) -> Vec<RecordedPush> {
        self.pushes.lock().await.clone()
    }
}

async fn read_request(mut stream: TcpStream) -> Option<(TcpStream, RecordedPush)> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buffer.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buffer[..header_end]).into_owned();
    let mut lines = head.lines();
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let mut content_length = 0usize;
    let mut content_type = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            match name.trim().to_ascii_lowercase().as_str() {
                "content-length" => content_length = value.trim().parse().unwrap_or(0),
                "content-type" => content_type = Some(value.trim().to_string()),
                _ => {}
            }
        }
    }

    while buffer.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..n]);
    }
    let body_end = buffer.len().min(header_end + content_length);
    let body = String::from_utf8_lossy(&buffer[header_end..body_end]).into_owned();

    Some((
        stream,
        RecordedPush {
            method,
            path,
            content_type,
            body,
        },
    ))
}
