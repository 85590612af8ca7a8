use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use serde::Deserialize;

use crate::entities::screen_seat_type::{self, SeatType};
use crate::entities::{screen, seat};
use crate::error::{AppError, AppResult};

/// One contiguous block of identically-priced rows, as submitted by the
/// caller. `order` is 1-based and decides where the block's rows land on
/// the screen.
#[derive(Debug, Clone, Deserialize)]
pub struct SeatTypeBlock {
    pub seat_type: SeatType,
    pub rows: i32,
    pub columns: i32,
    pub order: i32,
}

/// Build a screen and its full seat grid from ordered seat-type blocks.
///
/// Blocks are laid out in `order`: block 1 occupies rows 1..=r1, block 2
/// rows r1+1..=r1+r2, and so on, with columns numbered 1..=columns within
/// each row. `total_seat` is the sum of all block sizes. Runs entirely on
/// the caller's connection; wrap it in a transaction so a failed build
/// leaves nothing behind.
pub async fn build_screen<C>(
    db: &C,
    screen_number: i32,
    blocks: &[SeatTypeBlock],
) -> AppResult<screen::Model>
where
    C: ConnectionTrait,
{
    let ordered = order_blocks(blocks)?;

    for block in &ordered {
        if block.rows < 1 || block.columns < 1 {
            return Err(AppError::Validation(
                "Seat type blocks must have at least one row and one column".to_string(),
            ));
        }
    }

    let total_seat: i32 = ordered.iter().map(|b| b.rows * b.columns).sum();

    let screen = screen::ActiveModel {
        screen_number: Set(screen_number),
        total_seat: Set(total_seat),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let mut row_offset = 0;
    for block in &ordered {
        let seat_type = screen_seat_type::ActiveModel {
            screen_id: Set(screen.id),
            seat_type: Set(block.seat_type),
            ..Default::default()
        }
        .insert(db)
        .await?;

        let mut seats = Vec::with_capacity((block.rows * block.columns) as usize);
        for r in 1..=block.rows {
            let row = row_offset + r;
            for col in 1..=block.columns {
                seats.push(seat::ActiveModel {
                    seat_type_id: Set(seat_type.id),
                    seat_number: Set(format!("{row}-{col}")),
                    row: Set(row),
                    col: Set(col),
                    ..Default::default()
                });
            }
        }
        seat::Entity::insert_many(seats).exec(db).await?;

        row_offset += block.rows;
    }

    Ok(screen)
}

/// Reorder blocks by their `order` field. The orders must form a dense
/// permutation of 1..=N; gaps or duplicates would silently drop or
/// overwrite blocks, so they are rejected outright.
fn order_blocks(blocks: &[SeatTypeBlock]) -> AppResult<Vec<SeatTypeBlock>> {
    if blocks.is_empty() {
        return Err(AppError::Validation(
            "At least one seat type block is required".to_string(),
        ));
    }

    let mut ordered: Vec<Option<SeatTypeBlock>> = vec![None; blocks.len()];
    for block in blocks {
        if block.order < 1 || block.order as usize > blocks.len() {
            return Err(AppError::Validation(format!(
                "Block order {} is outside 1..={}",
                block.order,
                blocks.len()
            )));
        }
        let slot = &mut ordered[(block.order - 1) as usize];
        if slot.is_some() {
            return Err(AppError::Validation(format!(
                "Duplicate block order {}",
                block.order
            )));
        }
        *slot = Some(block.clone());
    }

    // Every slot is filled: N blocks landed on N distinct slots.
    Ok(ordered.into_iter().flatten().collect())
}
