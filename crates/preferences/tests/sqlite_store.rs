use pantry_preferences::{PreferenceStore, Preferences, Session, SqliteStore};
use pantry_shared::IngredientList;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn empty_database_loads_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_pool(&dir.child("db.sqlite3")).await?;

    let preferences = SqliteStore::new(pool).load().await?;

    assert_eq!(preferences, Preferences::default());

    Ok(())
}

#[tokio::test]
async fn preferences_survive_reopen() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");

    let saved = Preferences {
        favorites: vec!["5".to_owned(), "1".to_owned(), "12".to_owned()],
        ingredients: IngredientList::from_saved(&["tomatoes", "burrata", "basil"]),
    };

    let pool = helpers::setup_pool(&path).await?;
    SqliteStore::new(pool.clone()).save(&saved).await?;
    pool.close().await;

    let pool = helpers::setup_pool(&path).await?;
    let loaded = SqliteStore::new(pool).load().await?;

    assert_eq!(loaded, saved);

    Ok(())
}

#[tokio::test]
async fn save_replaces_previous_state() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = SqliteStore::new(helpers::setup_pool(&dir.child("db.sqlite3")).await?);

    store
        .save(&Preferences {
            favorites: vec!["1".to_owned(), "2".to_owned()],
            ingredients: IngredientList::from_saved(&["rice"]),
        })
        .await?;
    store
        .save(&Preferences {
            favorites: vec!["2".to_owned()],
            ingredients: IngredientList::new(),
        })
        .await?;

    let loaded = store.load().await?;
    assert_eq!(loaded.favorites, vec!["2".to_owned()]);
    assert!(loaded.ingredients.is_empty());

    Ok(())
}

#[tokio::test]
async fn session_writes_through_to_sqlite() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");

    let pool = helpers::setup_pool(&path).await?;
    let mut session = Session::load(SqliteStore::new(pool.clone())).await?;
    session.add_ingredient("chicken").await?;
    session.add_ingredient("garlic").await?;
    session.toggle_favorite("1").await?;
    session.remove_ingredient("chicken").await?;
    drop(session);
    pool.close().await;

    let pool = helpers::setup_pool(&path).await?;
    let session = Session::load(SqliteStore::new(pool)).await?;

    assert_eq!(session.ingredients().as_slice(), ["garlic"]);
    assert!(session.is_favorite("1"));

    Ok(())
}
