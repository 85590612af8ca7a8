use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{NaiveDate, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::screen_seat_type::{self, SeatType};
use crate::entities::{movie, screen, show_detail, show_seat_price};
use crate::error::{AppError, AppResult};
use crate::services;
use crate::services::screen::SeatTypeBlock;
use crate::services::show::{CreateShowInput, PriceInput, UpdateShowInput};
use crate::AppState;

// ============ Screen Management ============

#[derive(Debug, Deserialize)]
pub struct CreateScreenRequest {
    pub screen_number: i32,
    pub seat_types: Vec<SeatTypeBlock>,
}

#[derive(Debug, Serialize)]
pub struct SeatTypeInfo {
    pub id: i32,
    pub seat_type: SeatType,
}

#[derive(Debug, Serialize)]
pub struct ScreenResponse {
    pub id: i32,
    pub screen_number: i32,
    pub total_seat: i32,
    pub seat_types: Vec<SeatTypeInfo>,
}

/// Build a screen with its seat grid (staff)
pub async fn create_screen(
    State(state): State<AppState>,
    Json(payload): Json<CreateScreenRequest>,
) -> AppResult<Json<ScreenResponse>> {
    // The whole build commits or rolls back as one unit: a failed block
    // must not leave a partial screen behind.
    let txn = state.db.begin().await?;

    let screen =
        services::screen::build_screen(&txn, payload.screen_number, &payload.seat_types).await?;

    let seat_types = screen_seat_type::Entity::find()
        .filter(screen_seat_type::Column::ScreenId.eq(screen.id))
        .all(&txn)
        .await?;

    txn.commit().await?;

    Ok(Json(ScreenResponse {
        id: screen.id,
        screen_number: screen.screen_number,
        total_seat: screen.total_seat,
        seat_types: seat_types
            .into_iter()
            .map(|st| SeatTypeInfo {
                id: st.id,
                seat_type: st.seat_type,
            })
            .collect(),
    }))
}

/// Delete a screen and everything hanging off it (staff)
pub async fn delete_screen(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = screen::Entity::delete_by_id(id).exec(&state.db).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Screen not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "message": "Screen deleted" })))
}

// ============ Movie Management ============

#[derive(Debug, Deserialize)]
pub struct MovieRequest {
    pub title: String,
    pub description: String,
    pub release_date: NaiveDate,
}

/// Create a movie (staff)
pub async fn create_movie(
    State(state): State<AppState>,
    Json(payload): Json<MovieRequest>,
) -> AppResult<Json<movie::Model>> {
    let new_movie = movie::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(payload.title),
        description: Set(payload.description),
        release_date: Set(payload.release_date),
    };

    let result = new_movie.insert(&state.db).await?;
    Ok(Json(result))
}

/// Replace a movie's business data (staff)
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<MovieRequest>,
) -> AppResult<Json<movie::Model>> {
    let existing = movie::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Movie not found".to_string()))?;

    let mut active: movie::ActiveModel = existing.into();
    active.title = Set(payload.title);
    active.description = Set(payload.description);
    active.release_date = Set(payload.release_date);

    let result = active.update(&state.db).await?;
    Ok(Json(result))
}

/// Delete a movie (staff)
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let result = movie::Entity::delete_by_id(id).exec(&state.db).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Movie not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "message": "Movie deleted" })))
}

// ============ Show Management ============

#[derive(Debug, Deserialize)]
pub struct CreateShowRequest {
    pub movie_id: Uuid,
    pub screen_id: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub prices: Vec<PriceInput>,
}

#[derive(Debug, Serialize)]
pub struct PriceInfo {
    pub id: i32,
    pub seat_type_id: i32,
    pub price: f64,
}

#[derive(Debug, Serialize)]
pub struct ShowCreatedResponse {
    pub id: i32,
    pub movie_id: Uuid,
    pub screen_id: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub available_seats: i32,
    pub prices: Vec<PriceInfo>,
}

/// Create a showtime with prices and its per-date occurrence ledger (staff)
pub async fn create_show(
    State(state): State<AppState>,
    Json(payload): Json<CreateShowRequest>,
) -> AppResult<Json<ShowCreatedResponse>> {
    let txn = state.db.begin().await?;

    let show = services::show::create_show(
        &txn,
        CreateShowInput {
            movie_id: payload.movie_id,
            screen_id: payload.screen_id,
            start_time: payload.start_time,
            end_time: payload.end_time,
            start_date: payload.start_date,
            end_date: payload.end_date,
            prices: payload.prices,
        },
    )
    .await?;

    let prices = show_seat_price::Entity::find()
        .filter(show_seat_price::Column::ShowDetailId.eq(show.id))
        .all(&txn)
        .await?;

    txn.commit().await?;

    Ok(Json(ShowCreatedResponse {
        id: show.id,
        movie_id: show.movie_id,
        screen_id: show.screen_id,
        start_time: show.start_time,
        end_time: show.end_time,
        start_date: show.start_date,
        end_date: show.end_date,
        available_seats: show.available_seats,
        prices: prices
            .into_iter()
            .map(|p| PriceInfo {
                id: p.id,
                seat_type_id: p.seat_type_id,
                price: p.price,
            })
            .collect(),
    }))
}

/// Patch a showtime (staff)
pub async fn update_show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateShowInput>,
) -> AppResult<Json<show_detail::Model>> {
    let txn = state.db.begin().await?;
    let updated = services::show::update_show(&txn, id, payload).await?;
    txn.commit().await?;

    Ok(Json(updated))
}

#[derive(Debug, Deserialize)]
pub struct UpdatePriceRequest {
    pub price: f64,
}

/// Overwrite one seat-type price of a show (staff)
pub async fn update_price(
    State(state): State<AppState>,
    Path((show_id, price_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdatePriceRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let updated = services::show::update_price(&state.db, show_id, price_id, payload.price).await?;

    Ok(Json(serde_json::json!({
        "message": "Price updated successfully",
        "price": updated.price,
    })))
}

/// Delete a showtime, its prices and its occurrence ledger (staff)
pub async fn delete_show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = show_detail::Entity::delete_by_id(id).exec(&state.db).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Show not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "message": "Show deleted" })))
}
