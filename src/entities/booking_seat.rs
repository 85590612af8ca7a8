use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Booking-to-seat link. Carries the occurrence id so the unique index on
/// (booked_show_detail_id, seat_id) rejects a second sale of the same
/// physical seat for the same show date.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking_seat")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub booking_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub seat_id: i32,
    pub booked_show_detail_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::booking::Entity",
        from = "Column::BookingId",
        to = "super::booking::Column::Id"
    )]
    Booking,
    #[sea_orm(
        belongs_to = "super::seat::Entity",
        from = "Column::SeatId",
        to = "super::seat::Column::Id"
    )]
    Seat,
    #[sea_orm(
        belongs_to = "super::booked_show_detail::Entity",
        from = "Column::BookedShowDetailId",
        to = "super::booked_show_detail::Column::Id"
    )]
    BookedShowDetail,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl Related<super::seat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
