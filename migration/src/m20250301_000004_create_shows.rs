use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_screens::{Screen, ScreenSeatType};
use super::m20250301_000003_create_movies::Movie;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShowDetail::Table)
                    .if_not_exists()
                    .col(pk_auto(ShowDetail::Id))
                    .col(uuid(ShowDetail::MovieId).not_null())
                    .col(integer(ShowDetail::ScreenId).not_null())
                    .col(time(ShowDetail::StartTime).not_null())
                    .col(time(ShowDetail::EndTime).not_null())
                    .col(date(ShowDetail::StartDate).not_null())
                    .col(date(ShowDetail::EndDate).not_null())
                    .col(integer(ShowDetail::AvailableSeats).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_show_detail_movie")
                            .from(ShowDetail::Table, ShowDetail::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_show_detail_screen")
                            .from(ShowDetail::Table, ShowDetail::ScreenId)
                            .to(Screen::Table, Screen::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ShowSeatPrice::Table)
                    .if_not_exists()
                    .col(pk_auto(ShowSeatPrice::Id))
                    .col(integer(ShowSeatPrice::ShowDetailId).not_null())
                    .col(integer(ShowSeatPrice::SeatTypeId).not_null())
                    .col(double(ShowSeatPrice::Price).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_show_seat_price_show_detail")
                            .from(ShowSeatPrice::Table, ShowSeatPrice::ShowDetailId)
                            .to(ShowDetail::Table, ShowDetail::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_show_seat_price_seat_type")
                            .from(ShowSeatPrice::Table, ShowSeatPrice::SeatTypeId)
                            .to(ScreenSeatType::Table, ScreenSeatType::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BookedShowDetail::Table)
                    .if_not_exists()
                    .col(pk_auto(BookedShowDetail::Id))
                    .col(integer(BookedShowDetail::ShowDetailId).not_null())
                    .col(date(BookedShowDetail::ShowDate).not_null())
                    .col(integer(BookedShowDetail::AvailableSeats).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booked_show_detail_show_detail")
                            .from(BookedShowDetail::Table, BookedShowDetail::ShowDetailId)
                            .to(ShowDetail::Table, ShowDetail::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One ledger row per (show, date); rows are only created by the
        // show-creation fan-out.
        manager
            .create_index(
                Index::create()
                    .name("idx_booked_show_detail_show_date")
                    .table(BookedShowDetail::Table)
                    .col(BookedShowDetail::ShowDetailId)
                    .col(BookedShowDetail::ShowDate)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookedShowDetail::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ShowSeatPrice::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ShowDetail::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ShowDetail {
    Table,
    Id,
    MovieId,
    ScreenId,
    StartTime,
    EndTime,
    StartDate,
    EndDate,
    AvailableSeats,
}

#[derive(DeriveIden)]
pub enum ShowSeatPrice {
    Table,
    Id,
    ShowDetailId,
    SeatTypeId,
    Price,
}

#[derive(DeriveIden)]
pub enum BookedShowDetail {
    Table,
    Id,
    ShowDetailId,
    ShowDate,
    AvailableSeats,
}
