//! Scrambling a cube with moves picked by the caller.

use log::debug;
use rand::Rng;

use crate::{
	cube::RubiksCube,
	moves::{ALL_MOVES, Move},
};



/// Where shuffle moves come from. The cube never picks moves itself.
pub trait MoveSource {
	fn next_move(&mut self) -> Move;
}

impl<F: FnMut() -> Move> MoveSource for F {
	fn next_move(&mut self) -> Move {
		self()
	}
}

/// Draws each of the 18 moves with equal probability from the caller's RNG.
#[derive(Debug)]
pub struct UniformMoves<R>(pub R);

impl<R: Rng> MoveSource for UniformMoves<R> {
	fn next_move(&mut self) -> Move {
		ALL_MOVES[self.0.random_range(0..ALL_MOVES.len())]
	}
}



/// Apply `n` moves from `source` to `cube` and return them in the order applied,
/// so that [`inverse_sequence`](crate::inverse_sequence) can undo the shuffle.
pub fn shuffle<C: RubiksCube, S: MoveSource + ?Sized>(cube: &mut C, n: usize, source: &mut S) -> Vec<Move> {
	debug!("shuffling with {n} moves");
	let mut moves = Vec::with_capacity(n);
	for _ in 0..n {
		moves.push(shuffle_once(cube, source));
	}
	debug!("shuffled: {}", moves.iter().map(Move::to_string).collect::<Vec<_>>().join(" "));
	moves
}

pub fn shuffle_once<C: RubiksCube, S: MoveSource + ?Sized>(cube: &mut C, source: &mut S) -> Move {
	let move_ = source.next_move();
	cube.apply(move_);
	move_
}

/// A solved cube shuffled by `n` moves from `source`, with the moves.
pub fn new_shuffled<C: RubiksCube + Default, S: MoveSource + ?Sized>(n: usize, source: &mut S) -> (C, Vec<Move>) {
	let mut cube = C::default();
	let moves = shuffle(&mut cube, n, source);
	(cube, moves)
}
