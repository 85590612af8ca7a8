mod common;

use axum::{extract::State, Json};
use sea_orm::{EntityTrait, QueryOrder};

use movie_theater_backend::entities::screen_seat_type::{self, SeatType};
use movie_theater_backend::entities::{screen, seat};
use movie_theater_backend::error::AppError;
use movie_theater_backend::handlers::catalog;
use movie_theater_backend::services;

use common::{block, create_standard_screen, setup_state};

#[tokio::test]
async fn builds_contiguous_seat_grid_across_blocks() {
    let state = setup_state().await;

    let screen = create_standard_screen(&state).await;
    assert_eq!(screen.screen_number, 1);
    assert_eq!(screen.total_seat, 75);
    assert_eq!(screen.seat_types.len(), 3);
    assert_eq!(
        screen
            .seat_types
            .iter()
            .map(|st| st.seat_type)
            .collect::<Vec<_>>(),
        vec![SeatType::Silver, SeatType::Gold, SeatType::Platinum]
    );

    let seats = seat::Entity::find()
        .order_by_asc(seat::Column::Row)
        .order_by_asc(seat::Column::Col)
        .all(&state.db)
        .await
        .unwrap();
    assert_eq!(seats.len(), 75);

    let types = screen_seat_type::Entity::find()
        .all(&state.db)
        .await
        .unwrap();
    let type_of = |row: i32| {
        let seat = seats.iter().find(|s| s.row == row && s.col == 1).unwrap();
        types
            .iter()
            .find(|t| t.id == seat.seat_type_id)
            .unwrap()
            .seat_type
    };

    // Block 1 fills rows 1-5, block 2 rows 6-10, block 3 rows 11-15.
    assert_eq!(type_of(1), SeatType::Silver);
    assert_eq!(type_of(5), SeatType::Silver);
    assert_eq!(type_of(6), SeatType::Gold);
    assert_eq!(type_of(10), SeatType::Gold);
    assert_eq!(type_of(11), SeatType::Platinum);
    assert_eq!(type_of(15), SeatType::Platinum);

    // Columns are 1-based within each row, labels follow grid position.
    let first = &seats[0];
    assert_eq!((first.row, first.col), (1, 1));
    assert_eq!(first.seat_number, "1-1");
    let last = seats.last().unwrap();
    assert_eq!((last.row, last.col), (15, 5));
    assert_eq!(last.seat_number, "15-5");
}

#[tokio::test]
async fn rejects_sparse_block_ordering_without_committing() {
    let state = setup_state().await;

    let err = services::screen::build_screen(
        &state.db,
        2,
        &[
            block(SeatType::Gold, 5, 5, 1),
            block(SeatType::Silver, 5, 5, 4),
        ],
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));

    let screens = screen::Entity::find().all(&state.db).await.unwrap();
    assert!(screens.is_empty());
}

#[tokio::test]
async fn rejects_empty_block_dimensions() {
    let state = setup_state().await;

    let err = services::screen::build_screen(&state.db, 2, &[block(SeatType::Gold, 0, 5, 1)])
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn screen_listing_is_idempotent() {
    let state = setup_state().await;
    create_standard_screen(&state).await;

    let Json(first) = catalog::list_screens(State(state.clone())).await.unwrap();
    let Json(second) = catalog::list_screens(State(state.clone())).await.unwrap();

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].total_seat, 75);
}

#[tokio::test]
async fn deleting_a_screen_cascades_to_its_seats() {
    let state = setup_state().await;
    let built = create_standard_screen(&state).await;

    use movie_theater_backend::handlers::admin;
    admin::delete_screen(State(state.clone()), axum::extract::Path(built.id))
        .await
        .unwrap();

    assert!(screen::Entity::find_by_id(built.id)
        .one(&state.db)
        .await
        .unwrap()
        .is_none());
    let remaining = seat::Entity::find().all(&state.db).await.unwrap();
    assert!(remaining.is_empty());
}
