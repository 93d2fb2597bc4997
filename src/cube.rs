use std::{fmt::Debug, hash::Hash};

use log::trace;

use crate::{
	error::CubeError,
	facelet::{Color, Face, FaceletCube},
	moves::{ALL_MOVES, Move},
};



/// What every cube representation offers: sticker queries, solved detection
/// and the 18 face turns.
///
/// Only the clockwise quarter turn is required. The named moves, their
/// counter-clockwise (three quarter turns) and double (two quarter turns)
/// variants and everything built on them are provided, so a new
/// representation has a single geometry to get right per face.
pub trait RubiksCube: Clone + Eq + Hash + Debug {
	fn color_at(&self, face: Face, row: usize, col: usize) -> Result<Color, CubeError>;

	fn is_solved(&self) -> bool;

	/// Turn `face` a quarter clockwise.
	fn turn_clockwise(&mut self, face: Face) -> &mut Self;

	fn u(&mut self) -> &mut Self { self.turn_clockwise(Face::Up) }
	fn u_prime(&mut self) -> &mut Self { self.u().u().u() }
	fn u2(&mut self) -> &mut Self { self.u().u() }

	fn l(&mut self) -> &mut Self { self.turn_clockwise(Face::Left) }
	fn l_prime(&mut self) -> &mut Self { self.l().l().l() }
	fn l2(&mut self) -> &mut Self { self.l().l() }

	fn f(&mut self) -> &mut Self { self.turn_clockwise(Face::Front) }
	fn f_prime(&mut self) -> &mut Self { self.f().f().f() }
	fn f2(&mut self) -> &mut Self { self.f().f() }

	fn r(&mut self) -> &mut Self { self.turn_clockwise(Face::Right) }
	fn r_prime(&mut self) -> &mut Self { self.r().r().r() }
	fn r2(&mut self) -> &mut Self { self.r().r() }

	fn b(&mut self) -> &mut Self { self.turn_clockwise(Face::Back) }
	fn b_prime(&mut self) -> &mut Self { self.b().b().b() }
	fn b2(&mut self) -> &mut Self { self.b().b() }

	fn d(&mut self) -> &mut Self { self.turn_clockwise(Face::Down) }
	fn d_prime(&mut self) -> &mut Self { self.d().d().d() }
	fn d2(&mut self) -> &mut Self { self.d().d() }

	fn apply(&mut self, move_: Move) -> &mut Self {
		match move_ {
			Move::L => self.l(),
			Move::LPrime => self.l_prime(),
			Move::L2 => self.l2(),
			Move::R => self.r(),
			Move::RPrime => self.r_prime(),
			Move::R2 => self.r2(),
			Move::U => self.u(),
			Move::UPrime => self.u_prime(),
			Move::U2 => self.u2(),
			Move::D => self.d(),
			Move::DPrime => self.d_prime(),
			Move::D2 => self.d2(),
			Move::F => self.f(),
			Move::FPrime => self.f_prime(),
			Move::F2 => self.f2(),
			Move::B => self.b(),
			Move::BPrime => self.b_prime(),
			Move::B2 => self.b2(),
		}
	}

	/// Take back `move_` by applying its inverse.
	fn undo(&mut self, move_: Move) -> &mut Self {
		self.apply(move_.inverse())
	}

	fn apply_moves(&mut self, moves: &[Move]) -> &mut Self {
		for &move_ in moves {
			trace!("applying {move_}");
			self.apply(move_);
		}
		self
	}

	/// The 18 cubes one move away, in [`ALL_MOVES`] order.
	fn successors(&self) -> [Self; 18] {
		ALL_MOVES.map(|move_| {
			let mut cube = self.clone();
			cube.apply(move_);
			cube
		})
	}
}

impl RubiksCube for FaceletCube {
	fn color_at(&self, face: Face, row: usize, col: usize) -> Result<Color, CubeError> {
		FaceletCube::color_at(self, face, row, col)
	}

	fn is_solved(&self) -> bool {
		FaceletCube::is_solved(self)
	}

	fn turn_clockwise(&mut self, face: Face) -> &mut Self {
		self.quarter_turn(face)
	}
}



#[cfg(test)]
mod rubiks_cube {
	use super::*;
	use crate::moves::Turn;
	use Color::*;

	#[test]
	fn chaining() {
		let mut chained = FaceletCube::new();
		chained.r().u().r_prime().u_prime();
		let mut applied = FaceletCube::new();
		applied.apply_moves(&[Move::R, Move::U, Move::RPrime, Move::UPrime]);
		assert_eq!(applied, chained);
	}

	#[test]
	fn derived_moves_are_repeated_quarter_turns() {
		for move_ in ALL_MOVES {
			let mut applied = FaceletCube::new();
			applied.f().apply(move_);
			let mut repeated = FaceletCube::new();
			repeated.f();
			for _ in 0..move_.turn().quarter_turns() {
				repeated.turn_clockwise(move_.face());
			}
			assert_eq!(repeated, applied, "{move_}");
		}
		assert_eq!(3, Turn::CounterClockwise.quarter_turns());
	}

	#[test]
	fn undo() {
		let mut cube = FaceletCube::new();
		cube.r().u();
		let before = cube.clone();
		cube.apply(Move::F2).apply(Move::BPrime).undo(Move::BPrime).undo(Move::F2);
		assert_eq!(before, cube);
	}

	#[test]
	fn apply_dispatches_to_the_named_move() {
		let named: [fn(&mut FaceletCube) -> &mut FaceletCube; 18] = [
			FaceletCube::l, FaceletCube::l_prime, FaceletCube::l2,
			FaceletCube::r, FaceletCube::r_prime, FaceletCube::r2,
			FaceletCube::u, FaceletCube::u_prime, FaceletCube::u2,
			FaceletCube::d, FaceletCube::d_prime, FaceletCube::d2,
			FaceletCube::f, FaceletCube::f_prime, FaceletCube::f2,
			FaceletCube::b, FaceletCube::b_prime, FaceletCube::b2,
		];
		for (move_, named) in ALL_MOVES.into_iter().zip(named) {
			let mut expected = FaceletCube::new();
			named(expected.l().f());
			let mut actual = FaceletCube::new();
			actual.l().f().apply(move_);
			assert_eq!(expected, actual, "{move_}");
		}
	}

	mod successors {
		use super::*;
		#[test]
		fn are_all_distinct_and_unsolved() {
			let successors = FaceletCube::new().successors();
			for (i, cube) in successors.iter().enumerate() {
				assert!(!cube.is_solved(), "{}", ALL_MOVES[i]);
				for other in &successors[i + 1..] {
					assert_ne!(cube, other);
				}
			}
		}

		#[test]
		fn follow_all_moves_order() {
			let successors = FaceletCube::new().successors();
			let mut expected = FaceletCube::new();
			expected.d2();
			assert_eq!(expected, successors[11]);
		}
	}

	#[test]
	fn generic_over_representations() {
		fn top_left<C: RubiksCube>(cube: &C) -> Result<Color, CubeError> {
			cube.color_at(Face::Up, 0, 0)
		}
		let mut cube = FaceletCube::new();
		assert_eq!(Ok(White), top_left(&cube));
		cube.l();
		assert_eq!(Ok(Orange), top_left(&cube));
		assert_eq!(Err(CubeError::OutOfRange { row: 0, col: 3 }), RubiksCube::color_at(&cube, Face::Up, 0, 3));
	}
}
