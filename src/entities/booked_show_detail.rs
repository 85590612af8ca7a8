use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Occurrence ledger row: bookable capacity for one calendar date of a show.
/// One row per day in the show's date range, created by the show-creation
/// fan-out and decremented by the booking engine.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booked_show_detail")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub show_detail_id: i32,
    pub show_date: Date,
    pub available_seats: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::show_detail::Entity",
        from = "Column::ShowDetailId",
        to = "super::show_detail::Column::Id"
    )]
    ShowDetail,
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
}

impl Related<super::show_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShowDetail.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
