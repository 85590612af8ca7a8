use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "seat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub seat_type_id: i32,
    pub seat_number: String,
    /// Row number counted across the whole screen, not per block.
    pub row: i32,
    pub col: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::screen_seat_type::Entity",
        from = "Column::SeatTypeId",
        to = "super::screen_seat_type::Column::Id"
    )]
    SeatType,
    #[sea_orm(has_many = "super::booking_seat::Entity")]
    BookingSeats,
}

impl Related<super::screen_seat_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
