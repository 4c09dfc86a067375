use userload::UserStore;
use userload::model::NewUser;

#[tokio::test]
async fn insert_batch_generates_ids_in_input_order() -> anyhow::Result<()> {
    let store = UserStore::connect("sqlite::memory:").await?;
    let stored = store
        .insert_batch(&[
            NewUser::new("Alice", "alice@example.com", "Female"),
            NewUser::new("Bob", "bob@example.com", "Male"),
        ])
        .await?;

    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].id, 1);
    assert_eq!(stored[0].name, "Alice");
    assert_eq!(stored[1].id, 2);
    assert_eq!(stored[1].name, "Bob");
    Ok(())
}

#[tokio::test]
async fn find_all_returns_every_batch_in_id_order() -> anyhow::Result<()> {
    let store = UserStore::connect("sqlite::memory:").await?;
    store
        .insert_batch(&[NewUser::new("Alice", "alice@example.com", "Female")])
        .await?;
    store
        .insert_batch(&[
            NewUser::new("Bob", "bob@example.com", "Male"),
            NewUser::new("Carol", "carol@example.com", "Female"),
        ])
        .await?;

    let all = store.find_all().await?;
    let names = all.iter().map(|u| u.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, ["Alice", "Bob", "Carol"]);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    Ok(())
}

#[tokio::test]
async fn empty_store_finds_nothing() -> anyhow::Result<()> {
    let store = UserStore::connect("sqlite::memory:").await?;
    assert!(store.find_all().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn empty_batch_is_a_no_op() -> anyhow::Result<()> {
    let store = UserStore::connect("sqlite::memory:").await?;
    assert!(store.insert_batch(&[]).await?.is_empty());
    assert!(store.find_all().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn file_backed_store_survives_a_reconnect() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let url = format!("sqlite://{}", dir.path().join("users.db").display());

    let store = UserStore::connect(&url).await?;
    store
        .insert_batch(&[NewUser::new("Alice", "alice@example.com", "Female")])
        .await?;
    drop(store);

    let store = UserStore::connect(&url).await?;
    let all = store.find_all().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Alice");
    Ok(())
}
