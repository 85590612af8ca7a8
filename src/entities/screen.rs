use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "screen")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub screen_number: i32,
    /// Sum of all seat-type block sizes, set once when the screen is built.
    pub total_seat: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::screen_seat_type::Entity")]
    SeatTypes,
    #[sea_orm(has_many = "super::show_detail::Entity")]
    Shows,
}

impl Related<super::screen_seat_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatTypes.def()
    }
}

impl Related<super::show_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shows.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
