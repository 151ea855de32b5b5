use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::sea_query::{Alias, ColumnDef, OnConflict, Table};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr,
};
use tracing::{debug, info};

use crate::db::models;
use crate::db::traits::{InsertOutcome, NewPosition, PositionStore};
use crate::error::{Error, Result};

#[derive(Clone)]
pub struct Db {
    connection: DatabaseConnection,
}

impl Db {
    pub async fn new(database_url: &str) -> Result<Self> {
        let mut options = ConnectOptions::new(database_url.to_string());
        options.sqlx_logging(false);

        // Every pooled connection to an in-memory SQLite database sees its own
        // empty database, so keep exactly one.
        if database_url.contains(":memory:") {
            options.max_connections(1).min_connections(1);
        }

        let connection = Database::connect(options)
            .await
            .map_err(|e| Error::Database(format!("Failed to connect to database: {}", e)))?;

        info!("✅ Connected to database");
        Ok(Self { connection })
    }

    pub async fn create_fii_positions_table(&self) -> Result<()> {
        debug!("Ensuring fii_positions table exists...");

        let stmt = Table::create()
            .table(Alias::new("fii_positions"))
            .if_not_exists()
            .col(
                ColumnDef::new(Alias::new("id"))
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(
                ColumnDef::new(Alias::new("date"))
                    .date()
                    .not_null()
                    .unique_key(),
            )
            .col(
                ColumnDef::new(Alias::new("long_contracts"))
                    .big_integer()
                    .not_null(),
            )
            .col(
                ColumnDef::new(Alias::new("short_contracts"))
                    .big_integer()
                    .not_null(),
            )
            .col(
                ColumnDef::new(Alias::new("net_contracts"))
                    .big_integer()
                    .not_null(),
            )
            .col(
                ColumnDef::new(Alias::new("long_ratio"))
                    .double()
                    .not_null(),
            )
            .to_owned();

        let backend = self.connection.get_database_backend();

        self.connection.execute(backend.build(&stmt))
            .await
            .map_err(|e| Error::Database(format!("Failed to create table: {}", e)))?;

        Ok(())
    }

    pub async fn insert_position(&self, position: &NewPosition) -> Result<InsertOutcome> {
        let active_model = Self::create_position_active_model(position);

        let result = <models::Entity as EntityTrait>::insert(active_model)
            .on_conflict(
                OnConflict::column(models::Column::Date)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.connection)
            .await;

        match result {
            Ok(0) => Ok(InsertOutcome::AlreadyExists),
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(InsertOutcome::AlreadyExists)
            }
            Err(e) => Err(Error::Database(format!("Failed to insert position: {}", e))),
        }
    }

    fn create_position_active_model(position: &NewPosition) -> models::ActiveModel {
        models::ActiveModel {
            id: ActiveValue::NotSet,
            date: ActiveValue::Set(position.date),
            long_contracts: ActiveValue::Set(position.long_contracts),
            short_contracts: ActiveValue::Set(position.short_contracts),
            net_contracts: ActiveValue::Set(position.net_contracts),
            long_ratio: ActiveValue::Set(position.long_ratio),
        }
    }
}

#[async_trait]
impl PositionStore for Db {
    async fn ensure_schema(&self) -> Result<()> {
        self.create_fii_positions_table().await
    }

    async fn exists_for_date(&self, date: NaiveDate) -> Result<bool> {
        let found = models::Entity::find()
            .filter(models::Column::Date.eq(date))
            .one(&self.connection)
            .await?;

        Ok(found.is_some())
    }

    async fn insert_if_absent(&self, position: &NewPosition) -> Result<InsertOutcome> {
        self.insert_position(position).await
    }

    async fn latest(&self, limit: u64) -> Result<Vec<models::Model>> {
        let rows = models::Entity::find()
            .order_by_desc(models::Column::Date)
            .limit(limit)
            .all(&self.connection)
            .await?;

        Ok(rows)
    }

    async fn count(&self) -> Result<u64> {
        Ok(models::Entity::find().count(&self.connection).await?)
    }
}
