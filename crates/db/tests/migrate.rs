use std::str::FromStr;

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use temp_dir::TempDir;

async fn table_names(pool: &SqlitePool) -> anyhow::Result<Vec<String>> {
    let names = sqlx::query_scalar::<_, String>(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE '\\_%' ESCAPE '\\' ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    Ok(names)
}

#[tokio::test]
async fn migrations_create_preference_tables() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;

    let mut conn = pool.acquire().await?;
    pantry_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    // a second run is a no-op
    pantry_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;
    drop(conn);

    let names = table_names(&pool).await?;
    assert!(names.contains(&"favorite_recipe".to_owned()), "{names:?}");
    assert!(names.contains(&"recent_ingredient".to_owned()), "{names:?}");

    sqlx::query("INSERT INTO favorite_recipe (recipe_id, position) VALUES ('1', 0)")
        .execute(&pool)
        .await?;
    let duplicate = sqlx::query("INSERT INTO favorite_recipe (recipe_id, position) VALUES ('1', 1)")
        .execute(&pool)
        .await;
    assert!(duplicate.is_err());

    Ok(())
}
