mod favorite_recipe;
mod recent_ingredient;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "pantry",
    "m0_1",
    vec_box![],
    vec_box![favorite_recipe::CreateTable, recent_ingredient::CreateTable]
);
