use std::collections::{HashMap, HashSet};

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{NaiveDate, NaiveTime};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use uuid::Uuid;

use crate::entities::screen_seat_type::{self, SeatType};
use crate::entities::{
    booked_show_detail, booking, booking_seat, movie, screen, seat, show_detail, show_seat_price,
};
use crate::error::{AppError, AppResult};
use crate::handlers::admin::{PriceInfo, ScreenResponse, SeatTypeInfo};
use crate::AppState;

/// List all screens with their seat-type breakdown
pub async fn list_screens(State(state): State<AppState>) -> AppResult<Json<Vec<ScreenResponse>>> {
    let screens = screen::Entity::find().all(&state.db).await?;
    let seat_types = screen_seat_type::Entity::find().all(&state.db).await?;

    let responses: Vec<ScreenResponse> = screens
        .into_iter()
        .map(|s| ScreenResponse {
            id: s.id,
            screen_number: s.screen_number,
            total_seat: s.total_seat,
            seat_types: seat_types
                .iter()
                .filter(|st| st.screen_id == s.id)
                .map(|st| SeatTypeInfo {
                    id: st.id,
                    seat_type: st.seat_type,
                })
                .collect(),
        })
        .collect();

    Ok(Json(responses))
}

/// List all movies
pub async fn list_movies(State(state): State<AppState>) -> AppResult<Json<Vec<movie::Model>>> {
    let movies = movie::Entity::find().all(&state.db).await?;
    Ok(Json(movies))
}

#[derive(Debug, Serialize)]
pub struct AvailableSeatInfo {
    pub id: i32,
    pub seat_number: String,
    pub seat_type: SeatType,
}

#[derive(Debug, Serialize)]
pub struct OccurrenceInfo {
    pub id: i32,
    pub show_date: NaiveDate,
    pub available_seats: i32,
}

#[derive(Debug, Serialize)]
pub struct ShowDetailResponse {
    pub id: i32,
    pub movie_id: Uuid,
    pub title: String,
    pub screen_id: i32,
    pub screen_number: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub available_seats: i32,
    pub prices: Vec<PriceInfo>,
    pub seats: Vec<AvailableSeatInfo>,
    pub occurrences: Vec<OccurrenceInfo>,
}

/// List all showtimes with full projections
pub async fn list_shows(State(state): State<AppState>) -> AppResult<Json<Vec<ShowDetailResponse>>> {
    let shows = show_detail::Entity::find().all(&state.db).await?;

    let mut responses = Vec::with_capacity(shows.len());
    for show in shows {
        responses.push(show_response(&state, show).await?);
    }

    Ok(Json(responses))
}

/// Get one showtime with full projections
pub async fn get_show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ShowDetailResponse>> {
    let show = show_detail::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Show not found".to_string()))?;

    Ok(Json(show_response(&state, show).await?))
}

async fn show_response(
    state: &AppState,
    show: show_detail::Model,
) -> AppResult<ShowDetailResponse> {
    let movie = movie::Entity::find_by_id(show.movie_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::Internal("Movie missing for show".to_string()))?;

    let screen = screen::Entity::find_by_id(show.screen_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::Internal("Screen missing for show".to_string()))?;

    let prices = show_seat_price::Entity::find()
        .filter(show_seat_price::Column::ShowDetailId.eq(show.id))
        .all(&state.db)
        .await?;

    let occurrences = booked_show_detail::Entity::find()
        .filter(booked_show_detail::Column::ShowDetailId.eq(show.id))
        .order_by_asc(booked_show_detail::Column::ShowDate)
        .all(&state.db)
        .await?;

    // The unbooked-seat projection is showtime-wide: a seat booked for ANY
    // date of this show is excluded, even though capacity is tracked per
    // date. See DESIGN.md.
    let booking_ids: Vec<Uuid> = booking::Entity::find()
        .filter(booking::Column::ShowDetailId.eq(show.id))
        .all(&state.db)
        .await?
        .into_iter()
        .map(|b| b.id)
        .collect();

    let booked_seat_ids: HashSet<i32> = if booking_ids.is_empty() {
        HashSet::new()
    } else {
        booking_seat::Entity::find()
            .filter(booking_seat::Column::BookingId.is_in(booking_ids))
            .all(&state.db)
            .await?
            .into_iter()
            .map(|link| link.seat_id)
            .collect()
    };

    let seat_types = screen_seat_type::Entity::find()
        .filter(screen_seat_type::Column::ScreenId.eq(screen.id))
        .all(&state.db)
        .await?;
    let type_by_id: HashMap<i32, SeatType> =
        seat_types.iter().map(|st| (st.id, st.seat_type)).collect();

    let seats: Vec<AvailableSeatInfo> = seat::Entity::find()
        .filter(seat::Column::SeatTypeId.is_in(type_by_id.keys().copied()))
        .order_by_asc(seat::Column::Row)
        .order_by_asc(seat::Column::Col)
        .all(&state.db)
        .await?
        .into_iter()
        .filter(|s| !booked_seat_ids.contains(&s.id))
        .map(|s| AvailableSeatInfo {
            id: s.id,
            seat_number: s.seat_number,
            seat_type: type_by_id
                .get(&s.seat_type_id)
                .copied()
                .unwrap_or(SeatType::Unknown),
        })
        .collect();

    Ok(ShowDetailResponse {
        id: show.id,
        movie_id: show.movie_id,
        title: movie.title,
        screen_id: show.screen_id,
        screen_number: screen.screen_number,
        start_time: show.start_time,
        end_time: show.end_time,
        start_date: show.start_date,
        end_date: show.end_date,
        available_seats: screen.total_seat,
        prices: prices
            .into_iter()
            .map(|p| PriceInfo {
                id: p.id,
                seat_type_id: p.seat_type_id,
                price: p.price,
            })
            .collect(),
        seats,
        occurrences: occurrences
            .into_iter()
            .map(|o| OccurrenceInfo {
                id: o.id,
                show_date: o.show_date,
                available_seats: o.available_seats,
            })
            .collect(),
    })
}
