//! Queue lifecycle against the SQLite store
//!
//! Enqueue, read and pop through `QueueService` with a real database file.

use std::path::PathBuf;
use std::sync::Arc;

use mediaq_core::application::QueueService;
use mediaq_core::domain::{DomainError, QueueId, READ_WINDOW};
use mediaq_core::port::UuidProvider;
use mediaq_infra_sqlite::{create_pool, run_migrations, SqliteQueueStore};

fn db_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("mediaq_{}_{}.db", name, std::process::id()));
    let _ = std::fs::remove_file(&path);
    path
}

async fn open(path: &PathBuf) -> QueueService {
    let pool = create_pool(&format!("sqlite:{}", path.display()))
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();
    QueueService::new(
        Arc::new(SqliteQueueStore::new(pool)),
        Arc::new(UuidProvider),
    )
}

/// Queues survive a restart of the store
#[tokio::test]
async fn test_persistence_after_restart() {
    let path = db_path("persistence");
    let q = QueueId::new("Ada Grace Hopper-Lovelace");

    let first = {
        let service = open(&path).await;
        let first = service.enqueue(&q, Some("https://v.example/1")).await.unwrap();
        service.enqueue(&q, Some("https://v.example/2")).await.unwrap();
        first
    };

    let service = open(&path).await;
    let list = service.list(&q).await.unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id, first);
    assert_eq!(list[1].url, "https://v.example/2");

    let _ = std::fs::remove_file(&path);
}

/// Full consume loop: read head, pop it, repeat
#[tokio::test]
async fn test_consume_in_order() {
    let path = db_path("consume");
    let service = open(&path).await;
    let q = QueueId::new("q");

    for i in 0..5 {
        service
            .enqueue(&q, Some(&format!("https://v.example/{i}")))
            .await
            .unwrap();
    }

    let mut played = Vec::new();
    while let Some(head) = service.current(&q).await.unwrap() {
        let popped = service.pop(&q, &head.id.to_string()).await.unwrap();
        assert_eq!(popped, head);
        played.push(popped.url);
    }

    let expected: Vec<String> = (0..5).map(|i| format!("https://v.example/{i}")).collect();
    assert_eq!(played, expected);

    let err = service.pop(&q, "anything").await.unwrap_err();
    assert!(matches!(err.as_domain(), Some(DomainError::HeadEmpty(_))));

    let _ = std::fs::remove_file(&path);
}

/// Reads are capped; the rest stays queued
#[tokio::test]
async fn test_read_window() {
    let path = db_path("window");
    let service = open(&path).await;
    let q = QueueId::new("q");

    for i in 0..15 {
        service
            .enqueue(&q, Some(&format!("https://v.example/{i}")))
            .await
            .unwrap();
    }

    assert_eq!(service.list(&q).await.unwrap().len(), READ_WINDOW);
    assert_eq!(
        service.next(&q).await.unwrap().unwrap().url,
        "https://v.example/1"
    );

    let _ = std::fs::remove_file(&path);
}

/// Several players popping the same head at once remove exactly one entry
#[tokio::test]
async fn test_concurrent_pop_no_duplicates() {
    let path = db_path("concurrent_pop");
    let service = Arc::new(open(&path).await);
    let q = QueueId::new("q");

    let head = service.enqueue(&q, Some("https://v.example/a")).await.unwrap();
    service.enqueue(&q, Some("https://v.example/b")).await.unwrap();
    service.enqueue(&q, Some("https://v.example/c")).await.unwrap();

    let mut handles = vec![];
    for _ in 0..10 {
        let service = Arc::clone(&service);
        let q = q.clone();
        let id = head.to_string();
        handles.push(tokio::spawn(async move { service.pop(&q, &id).await }));
    }

    let mut succeeded = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(entry) => {
                assert_eq!(entry.id, head);
                succeeded += 1;
            }
            Err(e) => assert!(
                matches!(e.as_domain(), Some(DomainError::EntryNotFound { .. })),
                "unexpected error: {e}"
            ),
        }
    }

    assert_eq!(succeeded, 1);
    let remaining: Vec<String> = service
        .list(&q)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.url)
        .collect();
    assert_eq!(remaining, ["https://v.example/b", "https://v.example/c"]);

    let _ = std::fs::remove_file(&path);
}

/// Debug bootstrap wipes every queue
#[tokio::test]
async fn test_reset_store() {
    let path = db_path("reset");
    let service = open(&path).await;

    service
        .enqueue(&QueueId::new("a"), Some("https://v.example/1"))
        .await
        .unwrap();
    service
        .enqueue(&QueueId::new("b"), Some("https://v.example/2"))
        .await
        .unwrap();

    service.reset_store().await.unwrap();
    assert!(service.list(&QueueId::new("a")).await.unwrap().is_empty());
    assert!(service.list(&QueueId::new("b")).await.unwrap().is_empty());

    let _ = std::fs::remove_file(&path);
}
