//! Clockwise quarter turn of one face of a [`FaceletCube`].
//!
//! A quarter turn is two independent permutations: the turned face spins in
//! place, and one 3-sticker strip on each of its four neighbours moves on to
//! the next neighbour. The neighbour strips for every face live in
//! [`adjacency`] and nowhere else; counter-clockwise and double turns are
//! repetitions of this primitive (see [`crate::RubiksCube`]).

use crate::facelet::{Color, Face, FaceletCube};



#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line { Row(usize), Col(usize) }

/// Three stickers on one line of one face, in the order they travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Strip {
	pub(crate) face: Face,
	pub(crate) line: Line,
	/// Sticker `i` sits at position `2 - i` along the line.
	pub(crate) reversed: bool,
}
impl Strip {
	const fn row(face: Face, row: usize) -> Self {
		Self { face, line: Line::Row(row), reversed: false }
	}
	const fn row_rev(face: Face, row: usize) -> Self {
		Self { face, line: Line::Row(row), reversed: true }
	}
	const fn col(face: Face, col: usize) -> Self {
		Self { face, line: Line::Col(col), reversed: false }
	}
	const fn col_rev(face: Face, col: usize) -> Self {
		Self { face, line: Line::Col(col), reversed: true }
	}

	/// (row, col) of sticker `i` on [`Self::face`].
	pub(crate) const fn cell(&self, i: usize) -> (usize, usize) {
		let along = if self.reversed { 2 - i } else { i };
		match self.line {
			Line::Row(row) => (row, along),
			Line::Col(col) => (along, col),
		}
	}
}

/// The four strips a clockwise turn of `face` moves, listed in the direction
/// the stickers travel: strip 0 goes to strip 1, 1 to 2, 2 to 3, 3 back to 0.
pub(crate) const fn adjacency(face: Face) -> [Strip; 4] {
	use Face::*;
	match face {
		Up => [
			Strip::row_rev(Right, 0),
			Strip::row_rev(Front, 0),
			Strip::row_rev(Left, 0),
			Strip::row_rev(Back, 0),
		],
		Left => [
			Strip::col(Front, 0),
			Strip::col(Down, 0),
			Strip::col_rev(Back, 2),
			Strip::col(Up, 0),
		],
		Front => [
			Strip::col(Right, 0),
			Strip::row_rev(Down, 0),
			Strip::col_rev(Left, 2),
			Strip::row(Up, 2),
		],
		Right => [
			Strip::col(Back, 0),
			Strip::col_rev(Down, 2),
			Strip::col_rev(Front, 2),
			Strip::col_rev(Up, 2),
		],
		Back => [
			Strip::col(Left, 0),
			Strip::row(Down, 2),
			Strip::col_rev(Right, 2),
			Strip::row_rev(Up, 0),
		],
		Down => [
			Strip::row(Right, 2),
			Strip::row(Back, 2),
			Strip::row(Left, 2),
			Strip::row(Front, 2),
		],
	}
}



impl FaceletCube {
	/// Turn `face` a quarter clockwise, looking at it from outside the cube.
	pub fn quarter_turn(&mut self, face: Face) -> &mut Self {
		self.rotate_face(face);
		self.cycle_strips(adjacency(face));
		self
	}

	/// Spin the 3x3 block of `face` clockwise, centre included.
	fn rotate_face(&mut self, face: Face) {
		let temp = self.cells[face.index()];
		let cells = &mut self.cells[face.index()];
		for i in 0..3 {
			cells[0][i] = temp[2 - i][0];
			cells[i][2] = temp[0][i];
			cells[2][2 - i] = temp[i][2];
			cells[2 - i][0] = temp[2][2 - i];
		}
	}

	fn cycle_strips(&mut self, strips: [Strip; 4]) {
		let carry = self.read_strip(strips[3]);
		for k in (1..4).rev() {
			let moving = self.read_strip(strips[k - 1]);
			self.write_strip(strips[k], moving);
		}
		self.write_strip(strips[0], carry);
	}

	fn read_strip(&self, strip: Strip) -> [Color; 3] {
		let face = &self.cells[strip.face.index()];
		[0, 1, 2].map(|i| {
			let (row, col) = strip.cell(i);
			face[row][col]
		})
	}

	fn write_strip(&mut self, strip: Strip, colors: [Color; 3]) {
		let face = &mut self.cells[strip.face.index()];
		for (i, color) in colors.into_iter().enumerate() {
			let (row, col) = strip.cell(i);
			face[row][col] = color;
		}
	}
}
