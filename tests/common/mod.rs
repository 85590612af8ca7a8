#![allow(dead_code)] // not every test binary uses every helper

use axum::{extract::State, Json};
use chrono::{NaiveDate, NaiveTime, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use uuid::Uuid;

use movie_theater_backend::entities::screen_seat_type::SeatType;
use movie_theater_backend::entities::user::{self, UserRole};
use movie_theater_backend::entities::movie;
use movie_theater_backend::handlers::admin::{
    self, CreateScreenRequest, CreateShowRequest, MovieRequest, ScreenResponse,
    ShowCreatedResponse,
};
use movie_theater_backend::services::screen::SeatTypeBlock;
use movie_theater_backend::services::show::PriceInput;
use movie_theater_backend::utils::jwt::Claims;
use movie_theater_backend::{AppState, Config};

/// Fresh in-memory database with all migrations applied. A single pooled
/// connection keeps every query on the same SQLite memory instance.
pub async fn setup_state() -> AppState {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1);

    let db: DatabaseConnection = Database::connect(options)
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");

    AppState {
        db,
        config: Config {
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: "test-secret".to_string(),
            jwt_expiration_hours: 24,
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
        },
    }
}

pub async fn seed_user(state: &AppState, email: &str, role: UserRole) -> user::Model {
    user::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(email.to_string()),
        password_hash: Set("not-a-real-hash".to_string()),
        name: Set("Test User".to_string()),
        role: Set(role),
        created_at: Set(Utc::now().into()),
    }
    .insert(&state.db)
    .await
    .expect("insert user")
}

pub fn claims_for(user: &user::Model) -> Claims {
    let now = Utc::now().timestamp();
    Claims {
        sub: user.id,
        email: user.email.clone(),
        role: user.role.clone(),
        exp: now + 3600,
        iat: now,
    }
}

pub fn block(seat_type: SeatType, rows: i32, columns: i32, order: i32) -> SeatTypeBlock {
    SeatTypeBlock {
        seat_type,
        rows,
        columns,
        order,
    }
}

/// The 75-seat reference screen: rows 1-5 silver, 6-10 gold, 11-15 platinum.
pub async fn create_standard_screen(state: &AppState) -> ScreenResponse {
    let Json(screen) = admin::create_screen(
        State(state.clone()),
        Json(CreateScreenRequest {
            screen_number: 1,
            seat_types: vec![
                block(SeatType::Silver, 5, 5, 1),
                block(SeatType::Gold, 5, 5, 2),
                block(SeatType::Platinum, 5, 5, 3),
            ],
        }),
    )
    .await
    .expect("create screen");

    screen
}

pub async fn create_movie(state: &AppState) -> movie::Model {
    let Json(movie) = admin::create_movie(
        State(state.clone()),
        Json(MovieRequest {
            title: "Test Movie".to_string(),
            description: "A test movie".to_string(),
            release_date: date(2020, 1, 1),
        }),
    )
    .await
    .expect("create movie");

    movie
}

/// December 2030 reference show: 09:00-12:00 on every day of the month.
pub async fn create_standard_show(
    state: &AppState,
    movie_id: Uuid,
    screen: &ScreenResponse,
) -> ShowCreatedResponse {
    let prices: Vec<PriceInput> = screen
        .seat_types
        .iter()
        .zip([120.0, 150.0, 200.0])
        .map(|(st, price)| PriceInput {
            seat_type_id: st.id,
            price,
        })
        .collect();

    let Json(show) = admin::create_show(
        State(state.clone()),
        Json(CreateShowRequest {
            movie_id,
            screen_id: screen.id,
            start_time: time(9, 0),
            end_time: time(12, 0),
            start_date: date(2030, 12, 1),
            end_date: date(2030, 12, 31),
            prices,
        }),
    )
    .await
    .expect("create show");

    show
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}
