use std::collections::HashSet;

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::{booked_show_detail, booking, booking_seat, seat, show_detail};
use crate::error::{AppError, AppResult};

/// A freshly committed booking together with its seat ids.
#[derive(Debug)]
pub struct BookedTicket {
    pub booking: booking::Model,
    pub seat_ids: Vec<i32>,
}

/// Sell a set of seats for one show occurrence.
///
/// The whole operation must run inside a single transaction: the occurrence
/// ledger row is read with a row lock so concurrent bookings for the same
/// occurrence serialize, the seat-conflict check runs against the locked
/// state, and the capacity decrement plus booking rows commit or roll back
/// as a unit. The unique index on booking_seat (occurrence, seat) is the
/// final guard against two transactions selling the same seat.
pub async fn book_seats<C>(
    db: &C,
    booked_show_id: i32,
    user_id: Uuid,
    seat_ids: &[i32],
) -> AppResult<BookedTicket>
where
    C: ConnectionTrait,
{
    let booked_show = booked_show_detail::Entity::find_by_id(booked_show_id)
        .lock_exclusive()
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Show occurrence not found".to_string()))?;

    let show = show_detail::Entity::find_by_id(booked_show.show_detail_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Show not found".to_string()))?;

    if seat_ids.is_empty() {
        return Err(AppError::Validation(
            "At least one seat is required".to_string(),
        ));
    }

    let requested: HashSet<i32> = seat_ids.iter().copied().collect();

    let known = seat::Entity::find()
        .filter(seat::Column::Id.is_in(requested.iter().copied()))
        .count(db)
        .await?;
    if known as usize != requested.len() {
        return Err(AppError::Validation("Unknown seat in request".to_string()));
    }

    // Seats already sold for this occurrence, across all prior bookings.
    let already_booked: HashSet<i32> = booking_seat::Entity::find()
        .filter(booking_seat::Column::BookedShowDetailId.eq(booked_show.id))
        .all(db)
        .await?
        .into_iter()
        .map(|bs| bs.seat_id)
        .collect();

    if requested.iter().any(|id| already_booked.contains(id)) {
        return Err(AppError::Conflict("Seat is already booked".to_string()));
    }

    let total_seats = requested.len() as i32;

    if booked_show.show_date < show.start_date || booked_show.show_date > show.end_date {
        return Err(AppError::BadRequest("Show date is invalid".to_string()));
    }

    if total_seats > booked_show.available_seats {
        return Err(AppError::BadRequest("No seats available".to_string()));
    }

    let occurrence_count = booked_show_detail::Entity::find()
        .filter(booked_show_detail::Column::ShowDetailId.eq(show.id))
        .filter(booked_show_detail::Column::ShowDate.eq(booked_show.show_date))
        .count(db)
        .await?;
    if occurrence_count == 0 {
        return Err(AppError::BadRequest("No show available".to_string()));
    }

    // Guarded decrement: the WHERE clause keeps the counter from going
    // negative even without the row lock.
    let decremented = booked_show_detail::Entity::update_many()
        .col_expr(
            booked_show_detail::Column::AvailableSeats,
            Expr::col(booked_show_detail::Column::AvailableSeats).sub(total_seats),
        )
        .filter(booked_show_detail::Column::Id.eq(booked_show.id))
        .filter(booked_show_detail::Column::AvailableSeats.gte(total_seats))
        .exec(db)
        .await?;

    if decremented.rows_affected == 0 {
        return Err(AppError::BadRequest("No seats available".to_string()));
    }

    let booking = booking::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        show_detail_id: Set(show.id),
        booked_show_detail_id: Set(booked_show.id),
        created_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await?;

    let links: Vec<booking_seat::ActiveModel> = requested
        .iter()
        .map(|&seat_id| booking_seat::ActiveModel {
            booking_id: Set(booking.id),
            seat_id: Set(seat_id),
            booked_show_detail_id: Set(booked_show.id),
        })
        .collect();
    booking_seat::Entity::insert_many(links).exec(db).await?;

    let mut sold: Vec<i32> = requested.into_iter().collect();
    sold.sort_unstable();

    tracing::info!(
        booking_id = %booking.id,
        booked_show_id = booked_show.id,
        seats = sold.len(),
        "booking committed"
    );

    Ok(BookedTicket {
        booking,
        seat_ids: sold,
    })
}
