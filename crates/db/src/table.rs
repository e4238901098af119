use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum FavoriteRecipe {
    Table,
    RecipeId,
    Position,
}

#[derive(Iden, Clone)]
pub enum RecentIngredient {
    Table,
    Name,
    Position,
}
