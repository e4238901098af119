use pantry_shared::{FilterState, Recipe};

/// Recipes passing every active filter, in catalog order.
pub fn filter<'a>(
    catalog: &'a [Recipe],
    filters: &'a FilterState,
) -> impl Iterator<Item = &'a Recipe> + 'a {
    catalog.iter().filter(move |recipe| filters.matches(recipe))
}
