use pantry_db::table::{FavoriteRecipe, RecentIngredient};
use pantry_shared::IngredientList;
use sea_query::{Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;

use crate::{PreferenceStore, Preferences};

/// Preferences in the `favorite_recipe` and `recent_ingredient` tables.
/// The schema comes from `pantry_db::migrator`.
#[derive(Debug, Clone)]
pub struct SqliteStore(pub SqlitePool);

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self(pool)
    }

    async fn favorites(&self) -> pantry_shared::Result<Vec<String>> {
        let statement = Query::select()
            .column(FavoriteRecipe::RecipeId)
            .from(FavoriteRecipe::Table)
            .order_by(FavoriteRecipe::Position, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    async fn ingredients(&self) -> pantry_shared::Result<Vec<String>> {
        let statement = Query::select()
            .column(RecentIngredient::Name)
            .from(RecentIngredient::Table)
            .order_by(RecentIngredient::Position, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}

#[async_trait::async_trait]
impl PreferenceStore for SqliteStore {
    async fn load(&self) -> pantry_shared::Result<Preferences> {
        let favorites = self.favorites().await?;
        let ingredients = self.ingredients().await?;

        Ok(Preferences {
            favorites,
            ingredients: IngredientList::from_saved(&ingredients),
        })
    }

    #[tracing::instrument(skip_all, fields(favorites = preferences.favorites.len(), ingredients = preferences.ingredients.len()))]
    async fn save(&self, preferences: &Preferences) -> pantry_shared::Result<()> {
        let mut tx = self.0.begin().await?;

        let statement = Query::delete()
            .from_table(FavoriteRecipe::Table)
            .to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        let statement = Query::delete()
            .from_table(RecentIngredient::Table)
            .to_owned();
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if !preferences.favorites.is_empty() {
            let mut statement = Query::insert()
                .into_table(FavoriteRecipe::Table)
                .columns([FavoriteRecipe::RecipeId, FavoriteRecipe::Position])
                .to_owned();
            for (position, id) in preferences.favorites.iter().enumerate() {
                statement.values_panic([id.to_owned().into(), (position as i64).into()]);
            }

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        if !preferences.ingredients.is_empty() {
            let mut statement = Query::insert()
                .into_table(RecentIngredient::Table)
                .columns([RecentIngredient::Name, RecentIngredient::Position])
                .to_owned();
            for (position, name) in preferences.ingredients.iter().enumerate() {
                statement.values_panic([name.to_owned().into(), (position as i64).into()]);
            }

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        tx.commit().await?;

        Ok(())
    }
}
