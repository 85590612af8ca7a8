use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A recurring showtime: a time-of-day window repeated over a date range on
/// one screen. `available_seats` snapshots the screen capacity at creation;
/// per-date capacity lives in `booked_show_detail`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "show_detail")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub movie_id: Uuid,
    pub screen_id: i32,
    pub start_time: Time,
    pub end_time: Time,
    pub start_date: Date,
    pub end_date: Date,
    pub available_seats: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::movie::Entity",
        from = "Column::MovieId",
        to = "super::movie::Column::Id"
    )]
    Movie,
    #[sea_orm(
        belongs_to = "super::screen::Entity",
        from = "Column::ScreenId",
        to = "super::screen::Column::Id"
    )]
    Screen,
    #[sea_orm(has_many = "super::show_seat_price::Entity")]
    Prices,
    #[sea_orm(has_many = "super::booked_show_detail::Entity")]
    Occurrences,
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movie.def()
    }
}

impl Related<super::screen::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Screen.def()
    }
}

impl Related<super::show_seat_price::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Prices.def()
    }
}

impl Related<super::booked_show_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Occurrences.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
