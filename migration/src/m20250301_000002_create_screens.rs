use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Screen::Table)
                    .if_not_exists()
                    .col(pk_auto(Screen::Id))
                    .col(integer(Screen::ScreenNumber).not_null())
                    .col(integer(Screen::TotalSeat).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ScreenSeatType::Table)
                    .if_not_exists()
                    .col(pk_auto(ScreenSeatType::Id))
                    .col(integer(ScreenSeatType::ScreenId).not_null())
                    .col(string_len(ScreenSeatType::SeatType, 10).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_screen_seat_type_screen")
                            .from(ScreenSeatType::Table, ScreenSeatType::ScreenId)
                            .to(Screen::Table, Screen::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Seat::Table)
                    .if_not_exists()
                    .col(pk_auto(Seat::Id))
                    .col(integer(Seat::SeatTypeId).not_null())
                    .col(string_len(Seat::SeatNumber, 10).not_null())
                    .col(integer(Seat::Row).not_null())
                    .col(integer(Seat::Col).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seat_seat_type")
                            .from(Seat::Table, Seat::SeatTypeId)
                            .to(ScreenSeatType::Table, ScreenSeatType::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_seat_position")
                    .table(Seat::Table)
                    .col(Seat::SeatTypeId)
                    .col(Seat::Row)
                    .col(Seat::Col)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Seat::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ScreenSeatType::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Screen::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Screen {
    Table,
    Id,
    ScreenNumber,
    TotalSeat,
}

#[derive(DeriveIden)]
pub enum ScreenSeatType {
    Table,
    Id,
    ScreenId,
    SeatType,
}

#[derive(DeriveIden)]
pub enum Seat {
    Table,
    Id,
    SeatTypeId,
    SeatNumber,
    Row,
    Col,
}
