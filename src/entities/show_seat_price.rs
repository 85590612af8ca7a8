use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "show_seat_price")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub show_detail_id: i32,
    pub seat_type_id: i32,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::show_detail::Entity",
        from = "Column::ShowDetailId",
        to = "super::show_detail::Column::Id"
    )]
    ShowDetail,
    #[sea_orm(
        belongs_to = "super::screen_seat_type::Entity",
        from = "Column::SeatTypeId",
        to = "super::screen_seat_type::Column::Id"
    )]
    SeatType,
}

impl Related<super::show_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShowDetail.def()
    }
}

impl Related<super::screen_seat_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
