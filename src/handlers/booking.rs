use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, TransactionTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{booked_show_detail, booking, booking_seat, movie, show_detail};
use crate::error::{AppError, AppResult};
use crate::services;
use crate::utils::jwt::Claims;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct BookSeatsRequest {
    pub seats: Vec<i32>,
}

#[derive(Debug, Serialize)]
pub struct ShowSummary {
    pub id: i32,
    pub movie_id: Uuid,
    pub title: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub show: ShowSummary,
    pub show_date: NaiveDate,
    pub seats: Vec<i32>,
    pub created_at: DateTime<Utc>,
}

/// Book seats for one show occurrence
pub async fn book_seats(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(booked_show_id): Path<i32>,
    Json(payload): Json<BookSeatsRequest>,
) -> AppResult<Json<BookingResponse>> {
    // The engine runs inside one transaction: ledger decrement and booking
    // rows land together or not at all.
    let txn = state.db.begin().await?;
    let ticket =
        services::booking::book_seats(&txn, booked_show_id, claims.sub, &payload.seats).await?;
    txn.commit().await?;

    let show = show_detail::Entity::find_by_id(ticket.booking.show_detail_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::Internal("Show missing for booking".to_string()))?;

    let movie = movie::Entity::find_by_id(show.movie_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::Internal("Movie missing for booking".to_string()))?;

    let occurrence = booked_show_detail::Entity::find_by_id(ticket.booking.booked_show_detail_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::Internal("Occurrence missing for booking".to_string()))?;

    Ok(Json(BookingResponse {
        id: ticket.booking.id,
        show: ShowSummary {
            id: show.id,
            movie_id: show.movie_id,
            title: movie.title,
            start_time: show.start_time,
            end_time: show.end_time,
        },
        show_date: occurrence.show_date,
        seats: ticket.seat_ids,
        created_at: ticket.booking.created_at.with_timezone(&Utc),
    }))
}

/// List the caller's bookings
pub async fn my_bookings(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<Vec<BookingResponse>>> {
    let bookings = booking::Entity::find()
        .filter(booking::Column::UserId.eq(claims.sub))
        .all(&state.db)
        .await?;

    let shows = show_detail::Entity::find().all(&state.db).await?;
    let movies = movie::Entity::find().all(&state.db).await?;
    let occurrences = booked_show_detail::Entity::find().all(&state.db).await?;

    let booking_ids: Vec<Uuid> = bookings.iter().map(|b| b.id).collect();
    let seat_links = if booking_ids.is_empty() {
        Vec::new()
    } else {
        booking_seat::Entity::find()
            .filter(booking_seat::Column::BookingId.is_in(booking_ids))
            .all(&state.db)
            .await?
    };

    let responses: Vec<BookingResponse> = bookings
        .into_iter()
        .filter_map(|b| {
            let show = shows.iter().find(|s| s.id == b.show_detail_id)?;
            let movie = movies.iter().find(|m| m.id == show.movie_id)?;
            let occurrence = occurrences
                .iter()
                .find(|o| o.id == b.booked_show_detail_id)?;

            let mut seats: Vec<i32> = seat_links
                .iter()
                .filter(|link| link.booking_id == b.id)
                .map(|link| link.seat_id)
                .collect();
            seats.sort_unstable();

            Some(BookingResponse {
                id: b.id,
                show: ShowSummary {
                    id: show.id,
                    movie_id: show.movie_id,
                    title: movie.title.clone(),
                    start_time: show.start_time,
                    end_time: show.end_time,
                },
                show_date: occurrence.show_date,
                seats,
                created_at: b.created_at.with_timezone(&Utc),
            })
        })
        .collect();

    Ok(Json(responses))
}
