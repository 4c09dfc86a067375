use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use userload::Error;
use userload::task;

#[tokio::test]
async fn spawn_and_join_returns_the_value() -> anyhow::Result<()> {
    let t = task::spawn(async { Ok::<_, Error>(21) });
    assert_eq!(t.join().await?, 21);
    Ok(())
}

#[tokio::test]
async fn map_transforms_the_eventual_value() -> anyhow::Result<()> {
    let t = task::spawn(async { Ok::<_, Error>(vec![1, 2, 3]) })
        .map(|v| v.into_iter().filter(|n| n % 2 == 1).collect::<Vec<_>>())
        .map(|v| v.len());
    assert_eq!(t.join().await?, 2);
    Ok(())
}

#[tokio::test]
async fn consume_runs_the_side_effect_before_completion() -> anyhow::Result<()> {
    let seen = Arc::new(AtomicUsize::new(0));
    let seen2 = Arc::clone(&seen);
    let t = task::spawn(async { Ok::<_, Error>(7usize) })
        .consume(move |v| seen2.store(v, Ordering::SeqCst));
    t.join().await?;
    assert_eq!(seen.load(Ordering::SeqCst), 7);
    Ok(())
}

#[tokio::test]
async fn join_all_waits_for_every_task() -> anyhow::Result<()> {
    let counter = Arc::new(AtomicUsize::new(0));
    let tasks = (0..3)
        .map(|_| {
            let counter = Arc::clone(&counter);
            task::spawn(async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, Error>(())
            })
        })
        .collect::<Vec<_>>();
    task::join_all(tasks).await?;
    assert_eq!(counter.load(Ordering::SeqCst), 3);
    Ok(())
}

#[tokio::test]
async fn worker_panic_surfaces_as_an_error() {
    let t = task::spawn::<i32, _>(async { panic!("boom") });
    match t.join().await {
        Err(Error::Worker(_)) => {}
        other => panic!("expected a worker error, got {other:?}"),
    }
}

#[tokio::test]
async fn detach_lets_the_chain_finish_on_its_own() -> anyhow::Result<()> {
    let (tx, rx) = tokio::sync::oneshot::channel();
    task::spawn(async { Ok::<_, Error>(5) })
        .map(|v| v * 2)
        .consume(move |v| {
            let _ = tx.send(v);
        })
        .detach();
    assert_eq!(rx.await?, 10);
    Ok(())
}

#[tokio::test]
async fn spawn_detached_runs_without_a_handle() -> anyhow::Result<()> {
    let (tx, rx) = tokio::sync::oneshot::channel();
    task::spawn_detached(async move {
        let _ = tx.send(42);
        Ok(())
    });
    assert_eq!(rx.await?, 42);
    Ok(())
}

#[tokio::test]
async fn dropping_the_handle_does_not_cancel_the_work() -> anyhow::Result<()> {
    let (tx, rx) = tokio::sync::oneshot::channel();
    let t = task::spawn(async move {
        let _ = tx.send(());
        Ok::<_, Error>(())
    });
    drop(t);
    rx.await?;
    Ok(())
}
