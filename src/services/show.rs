use chrono::{NaiveDate, NaiveTime};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use serde::Deserialize;
use uuid::Uuid;

use crate::entities::{booked_show_detail, movie, screen, screen_seat_type, show_detail, show_seat_price};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize)]
pub struct PriceInput {
    pub seat_type_id: i32,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct CreateShowInput {
    pub movie_id: Uuid,
    pub screen_id: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub prices: Vec<PriceInput>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateShowInput {
    pub movie_id: Option<Uuid>,
    pub screen_id: Option<i32>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub available_seats: Option<i32>,
}

/// Create a showtime with its per-seat-type prices and fan out one
/// occurrence ledger row per calendar day in the date range, each seeded
/// with the screen's full capacity. Must run inside one transaction.
pub async fn create_show<C>(db: &C, input: CreateShowInput) -> AppResult<show_detail::Model>
where
    C: ConnectionTrait,
{
    if input.start_time >= input.end_time {
        return Err(AppError::Validation(
            "Start time must be before end time".to_string(),
        ));
    }

    if input.start_date >= input.end_date {
        return Err(AppError::Validation(
            "Start date must be before end date".to_string(),
        ));
    }

    if input.prices.is_empty() {
        return Err(AppError::Validation(
            "At least one seat price is required".to_string(),
        ));
    }

    movie::Entity::find_by_id(input.movie_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid movie".to_string()))?;

    let screen = screen::Entity::find_by_id(input.screen_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid screen".to_string()))?;

    for price in &input.prices {
        screen_seat_type::Entity::find_by_id(price.seat_type_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::BadRequest("Invalid seat type".to_string()))?;
    }

    // Rejects only when an existing show on this screen sits entirely
    // inside the new time window AND the new date window (bounds
    // inclusive). Partially overlapping shows pass; see DESIGN.md.
    let overlapping = show_detail::Entity::find()
        .filter(show_detail::Column::ScreenId.eq(input.screen_id))
        .filter(show_detail::Column::StartTime.between(input.start_time, input.end_time))
        .filter(show_detail::Column::EndTime.between(input.start_time, input.end_time))
        .filter(show_detail::Column::StartDate.between(input.start_date, input.end_date))
        .filter(show_detail::Column::EndDate.between(input.start_date, input.end_date))
        .one(db)
        .await?;

    if overlapping.is_some() {
        return Err(AppError::Validation(
            "Another show is ongoing in same time and same screen".to_string(),
        ));
    }

    let show = show_detail::ActiveModel {
        movie_id: Set(input.movie_id),
        screen_id: Set(input.screen_id),
        start_time: Set(input.start_time),
        end_time: Set(input.end_time),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        available_seats: Set(screen.total_seat),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let prices: Vec<show_seat_price::ActiveModel> = input
        .prices
        .iter()
        .map(|p| show_seat_price::ActiveModel {
            show_detail_id: Set(show.id),
            seat_type_id: Set(p.seat_type_id),
            price: Set(p.price),
            ..Default::default()
        })
        .collect();
    show_seat_price::Entity::insert_many(prices).exec(db).await?;

    let mut occurrences = Vec::new();
    let mut day = show.start_date;
    while day <= show.end_date {
        occurrences.push(booked_show_detail::ActiveModel {
            show_detail_id: Set(show.id),
            show_date: Set(day),
            available_seats: Set(screen.total_seat),
            ..Default::default()
        });
        day = day
            .succ_opt()
            .ok_or_else(|| AppError::Internal("Show date out of range".to_string()))?;
    }
    booked_show_detail::Entity::insert_many(occurrences)
        .exec(db)
        .await?;

    Ok(show)
}

/// Patch a subset of show fields. Overlap validation is not re-run and the
/// occurrence ledger is not regenerated; a date-range change leaves the
/// existing ledger rows untouched.
pub async fn update_show<C>(
    db: &C,
    show_id: i32,
    input: UpdateShowInput,
) -> AppResult<show_detail::Model>
where
    C: ConnectionTrait,
{
    let show = show_detail::Entity::find_by_id(show_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Show not found".to_string()))?;

    let mut active: show_detail::ActiveModel = show.into();

    if let Some(movie_id) = input.movie_id {
        movie::Entity::find_by_id(movie_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::BadRequest("Invalid movie".to_string()))?;
        active.movie_id = Set(movie_id);
    }

    if let Some(screen_id) = input.screen_id {
        screen::Entity::find_by_id(screen_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::BadRequest("Invalid screen".to_string()))?;
        active.screen_id = Set(screen_id);
    }

    if let Some(start_time) = input.start_time {
        active.start_time = Set(start_time);
    }

    if let Some(end_time) = input.end_time {
        active.end_time = Set(end_time);
    }

    if let Some(start_date) = input.start_date {
        active.start_date = Set(start_date);
    }

    if let Some(end_date) = input.end_date {
        active.end_date = Set(end_date);
    }

    if let Some(available_seats) = input.available_seats {
        active.available_seats = Set(available_seats);
    }

    let updated = active.update(db).await?;
    Ok(updated)
}

/// Overwrite a single price row of a show. No range validation on the new
/// value beyond the row belonging to the show.
pub async fn update_price<C>(
    db: &C,
    show_id: i32,
    price_id: i32,
    new_price: f64,
) -> AppResult<show_seat_price::Model>
where
    C: ConnectionTrait,
{
    let price = show_seat_price::Entity::find_by_id(price_id)
        .filter(show_seat_price::Column::ShowDetailId.eq(show_id))
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Price not found".to_string()))?;

    let mut active: show_seat_price::ActiveModel = price.into();
    active.price = Set(new_price);

    let updated = active.update(db).await?;
    Ok(updated)
}
