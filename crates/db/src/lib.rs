use sqlx_migrator::{Info, Migrator};

mod m0_1;
pub mod table;

/// Every schema migration of the preferences database, in apply order.
pub fn migrator() -> Result<Migrator<sqlx::Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::<sqlx::Sqlite>::default();
    migrator.add_migrations(vec![Box::new(m0_1::Migration)])?;

    Ok(migrator)
}
