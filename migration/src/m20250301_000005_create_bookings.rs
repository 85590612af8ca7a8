use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_users::User;
use super::m20250301_000002_create_screens::Seat;
use super::m20250301_000004_create_shows::{BookedShowDetail, ShowDetail};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(uuid(Booking::Id).primary_key())
                    .col(uuid(Booking::UserId).not_null())
                    .col(integer(Booking::ShowDetailId).not_null())
                    .col(integer(Booking::BookedShowDetailId).not_null())
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_show_detail")
                            .from(Booking::Table, Booking::ShowDetailId)
                            .to(ShowDetail::Table, ShowDetail::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_booked_show_detail")
                            .from(Booking::Table, Booking::BookedShowDetailId)
                            .to(BookedShowDetail::Table, BookedShowDetail::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BookingSeat::Table)
                    .if_not_exists()
                    .col(uuid(BookingSeat::BookingId).not_null())
                    .col(integer(BookingSeat::SeatId).not_null())
                    .col(integer(BookingSeat::BookedShowDetailId).not_null())
                    .primary_key(
                        Index::create()
                            .col(BookingSeat::BookingId)
                            .col(BookingSeat::SeatId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_seat_booking")
                            .from(BookingSeat::Table, BookingSeat::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_seat_seat")
                            .from(BookingSeat::Table, BookingSeat::SeatId)
                            .to(Seat::Table, Seat::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_seat_booked_show_detail")
                            .from(BookingSeat::Table, BookingSeat::BookedShowDetailId)
                            .to(BookedShowDetail::Table, BookedShowDetail::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A physical seat can be sold at most once per show occurrence; two
        // transactions inserting the same pair cannot both commit.
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_seat_occurrence")
                    .table(BookingSeat::Table)
                    .col(BookingSeat::BookedShowDetailId)
                    .col(BookingSeat::SeatId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookingSeat::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    UserId,
    ShowDetailId,
    BookedShowDetailId,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum BookingSeat {
    Table,
    BookingId,
    SeatId,
    BookedShowDetailId,
}
