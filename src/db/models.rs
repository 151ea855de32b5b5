use sea_orm::entity::prelude::*;

/// One row per calendar date of foreign institutional futures positioning.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fii_positions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i32,

    #[sea_orm(unique)]
    pub date: Date,

    pub long_contracts: i64,

    pub short_contracts: i64,

    pub net_contracts: i64,

    #[sea_orm(column_type = "Double")]
    pub long_ratio: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
