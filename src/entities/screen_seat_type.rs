use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Pricing tier of a contiguous row block on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum SeatType {
    #[sea_orm(string_value = "PLATINUM")]
    Platinum,
    #[sea_orm(string_value = "GOLD")]
    Gold,
    #[sea_orm(string_value = "SILVER")]
    Silver,
    #[sea_orm(string_value = "UNKNOWN")]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "screen_seat_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub screen_id: i32,
    pub seat_type: SeatType,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::screen::Entity",
        from = "Column::ScreenId",
        to = "super::screen::Column::Id"
    )]
    Screen,
    #[sea_orm(has_many = "super::seat::Entity")]
    Seats,
    #[sea_orm(has_many = "super::show_seat_price::Entity")]
    Prices,
}

impl Related<super::screen::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Screen.def()
    }
}

impl Related<super::seat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
