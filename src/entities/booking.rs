use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A confirmed purchase of a seat set for one show occurrence. Immutable
/// once created; seats hang off `booking_seat`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub show_detail_id: i32,
    pub booked_show_detail_id: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::show_detail::Entity",
        from = "Column::ShowDetailId",
        to = "super::show_detail::Column::Id"
    )]
    ShowDetail,
    #[sea_orm(
        belongs_to = "super::booked_show_detail::Entity",
        from = "Column::BookedShowDetailId",
        to = "super::booked_show_detail::Column::Id"
    )]
    BookedShowDetail,
    #[sea_orm(has_many = "super::booking_seat::Entity")]
    Seats,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::show_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShowDetail.def()
    }
}

impl Related<super::booked_show_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookedShowDetail.def()
    }
}

impl Related<super::booking_seat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
