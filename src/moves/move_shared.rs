//! Shared stepping and sliding helpers for the per-piece generators.
//!
//! Both helpers drop squares held by the mover's own color. Sliding stops on
//! the first occupied square and keeps it only when it holds an enemy piece.

use crate::game_state::chess_types::{Piece, Placement, Position};

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn slide(placement: &Placement, piece: &Piece, directions: &[(i8, i8)], out: &mut Vec<Position>) {
    for &(d_row, d_col) in directions {
        let mut current = piece.position;
        while let Some(next) = current.offset(d_row, d_col) {
            match placement.piece_at(next) {
                None => out.push(next),
                Some(blocker) => {
                    if blocker.color != piece.color {
                        out.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

pub fn step(placement: &Placement, piece: &Piece, offsets: &[(i8, i8)], out: &mut Vec<Position>) {
    for &(d_row, d_col) in offsets {
        let Some(target) = piece.position.offset(d_row, d_col) else {
            continue;
        };
        if !placement.is_occupied_by(target, piece.color) {
            out.push(target);
        }
    }
}
