use super::*;
use std::thread;
use std::time::Duration;
use tokio::time::timeout;

#[tokio::test]
async fn test_fifo_order() {
    let (tx, mut rx) = channel("test", 0);
    for i in 0..5 {
        tx.enqueue(i).unwrap();
    }
    assert_eq!(rx.len(), 5);
    for i in 0..5 {
        assert_eq!(rx.dequeue().await, Some(i));
    }
    assert!(rx.is_empty());
}

#[tokio::test]
async fn test_dequeue_waits_for_item() {
    let (tx, mut rx) = channel::<&str>("test", 0);

    let consumer = tokio::spawn(async move { rx.dequeue().await });

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(!consumer.is_finished());

    tx.enqueue("late").unwrap();
    let item = timeout(Duration::from_secs(1), consumer).await.unwrap().unwrap();
    assert_eq!(item, Some("late"));
}

#[tokio::test]
async fn test_returns_none_after_last_sender_dropped() {
    let (tx, mut rx) = channel("test", 0);
    let tx2 = tx.clone();
    tx.enqueue(1).unwrap();
    drop(tx);
    tx2.enqueue(2).unwrap();
    drop(tx2);

    // Remaining items drain before the close is observed
    assert_eq!(rx.dequeue().await, Some(1));
    assert_eq!(rx.dequeue().await, Some(2));
    assert_eq!(rx.dequeue().await, None);
}

#[tokio::test]
async fn test_waiting_consumer_wakes_on_close() {
    let (tx, mut rx) = channel::<u8>("test", 0);
    let consumer = tokio::spawn(async move { rx.dequeue().await });
    tokio::time::sleep(Duration::from_millis(10)).await;
    drop(tx);
    let item = timeout(Duration::from_secs(1), consumer).await.unwrap().unwrap();
    assert_eq!(item, None);
}

#[tokio::test]
async fn test_drop_oldest_when_bounded() {
    let (tx, mut rx) = channel("test", 2);
    tx.enqueue("a").unwrap();
    tx.enqueue("b").unwrap();
    tx.enqueue("c").unwrap();

    assert_eq!(rx.dequeue().await, Some("b"));
    assert_eq!(rx.take_displaced(), 1);
    assert_eq!(rx.dequeue().await, Some("c"));
    // Counter resets once taken
    assert_eq!(rx.take_displaced(), 0);
}

#[tokio::test]
async fn test_bounded_queue_drains_then_closes() {
    let (tx, mut rx) = channel("test", 4);
    for i in 0..10u32 {
        tx.enqueue(i).unwrap();
    }
    drop(tx);

    let mut received = Vec::new();
    while let Some(i) = rx.dequeue().await {
        received.push(i);
    }
    assert_eq!(received, vec![6, 7, 8, 9]);
    assert_eq!(rx.take_displaced(), 6);
}

#[test]
fn test_bounded_enqueue_after_receiver_dropped() {
    let (tx, rx) = channel("test", 8);
    drop(rx);
    assert!(tx.is_closed());
    assert_eq!(tx.enqueue(3u8).unwrap_err().0, 3);
}

#[test]
fn test_enqueue_after_receiver_dropped() {
    let (tx, rx) = channel("test", 0);
    drop(rx);
    assert!(tx.is_closed());
    let err = tx.enqueue(String::from("orphan")).unwrap_err();
    assert_eq!(err.0, "orphan");
}

#[tokio::test]
async fn test_producers_on_os_threads() {
    let (tx, mut rx) = channel("test", 0);

    let handles: Vec<_> = (0..4usize)
        .map(|worker| {
            let tx = tx.clone();
            thread::spawn(move || {
                for i in 0..100i32 {
                    tx.enqueue((worker, i)).unwrap();
                }
            })
        })
        .collect();
    drop(tx);
    for handle in handles {
        handle.join().unwrap();
    }

    let mut last_seen = [None::<i32>; 4];
    let mut total = 0;
    while let Some((worker, i)) = rx.dequeue().await {
        // Per-producer order is preserved
        if let Some(prev) = last_seen[worker] {
            assert!(i > prev);
        }
        last_seen[worker] = Some(i);
        total += 1;
    }
    assert_eq!(total, 400);
}

#[tokio::test]
async fn test_try_dequeue() {
    let (tx, mut rx) = channel("test", 0);
    assert_eq!(rx.try_dequeue(), None);
    tx.enqueue(9).unwrap();
    assert_eq!(rx.try_dequeue(), Some(9));
}
