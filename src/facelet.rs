//! The 54-sticker state: faces, colors and the cube that holds them.

use std::fmt;

use crate::error::CubeError;



#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Face { Up, Left, Front, Right, Back, Down }
impl Face {
	/// Net order used by every rendering of the cube:
	/// `Up` on top, `Left Front Right Back` across, `Down` below.
	pub const ALL: [Face; 6] = { use Face::*; [Up, Left, Front, Right, Back, Down] };

	pub const fn index(self) -> usize {
		self as usize
	}

	/// Color every sticker of this face has when the cube is solved.
	pub const fn home_color(self) -> Color {
		Color::ALL[self.index()]
	}

	pub const fn letter(self) -> char {
		match self {
			Face::Up => 'U',
			Face::Left => 'L',
			Face::Front => 'F',
			Face::Right => 'R',
			Face::Back => 'B',
			Face::Down => 'D',
		}
	}
}



#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Color { White, Green, Red, Blue, Orange, Yellow }
impl Color {
	pub const ALL: [Color; 6] = { use Color::*; [White, Green, Red, Blue, Orange, Yellow] };

	pub const fn index(self) -> usize {
		self as usize
	}

	/// Face this color belongs to in the solved state.
	pub const fn home_face(self) -> Face {
		Face::ALL[self.index()]
	}

	pub const fn letter(self) -> char {
		match self {
			Color::White => 'W',
			Color::Green => 'G',
			Color::Red => 'R',
			Color::Blue => 'B',
			Color::Orange => 'O',
			Color::Yellow => 'Y',
		}
	}

	pub fn from_letter(letter: char) -> Result<Self, CubeError> {
		match letter {
			'W' => Ok(Color::White),
			'G' => Ok(Color::Green),
			'R' => Ok(Color::Red),
			'B' => Ok(Color::Blue),
			'O' => Ok(Color::Orange),
			'Y' => Ok(Color::Yellow),
			_ => Err(CubeError::InvalidColorLetter(letter)),
		}
	}
}

impl TryFrom<char> for Color {
	type Error = CubeError;
	fn try_from(letter: char) -> Result<Self, Self::Error> {
		Color::from_letter(letter)
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.letter())
	}
}



/// Cube stored sticker by sticker: `cells[face][row][col]`.
///
/// Rows count top to bottom and columns left to right with the face pointing
/// at you. Back is seen from behind and Down with Front above it:
///
/// ```text
///             b0 c1 c2
///             r1  .  .
///             r2  .  .
///
///  b0 c1 c2   b0 c1 c2   b0 c1 c2   b0 c1 c2
///  r1  .  .   r1  .  .   r1  .  .   r1  .  .
///  r2  .  .   r2  .  .   r2  .  .   r2  .  .
///
///             b0 c1 c2
///             r1  .  .
///             r2  .  .
/// ```
///
/// The storage is inline, so `clone` is always a full independent copy.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FaceletCube {
	pub(crate) cells: [[[Color; 3]; 3]; 6],
}
impl FaceletCube {
	/// Number of stickers.
	pub const SIZE: usize = 6 * 3 * 3;

	const NEW: [[[Color; 3]; 3]; 6] = {
		let mut cells = [[[Color::White; 3]; 3]; 6];
		let mut face = 0;
		while face < 6 {
			cells[face] = [[Color::ALL[face]; 3]; 3];
			face += 1;
		}
		cells
	};

	pub fn new() -> Self {
		Self { cells: Self::NEW }
	}

	pub fn color_at(&self, face: Face, row: usize, col: usize) -> Result<Color, CubeError> {
		if row >= 3 || col >= 3 {
			return Err(CubeError::OutOfRange { row, col });
		}
		Ok(self.cells[face.index()][row][col])
	}

	pub fn is_solved(&self) -> bool {
		Face::ALL.iter().all(|&face| {
			self.cells[face.index()].iter().flatten().all(|&color| color == face.home_color())
		})
	}

	/// All 54 stickers in (face, row, col) order.
	pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
		self.cells.iter().flatten().flatten().copied()
	}

	/// The 54 color letters in (face, row, col) order, e.g. `"WWWWWWWWWGGG..."`.
	pub fn letters(&self) -> String {
		self.colors().map(Color::letter).collect()
	}

	/// Hash of [`letters`](Self::letters) with a fixed, unkeyed hasher.
	///
	/// Unlike [`std::hash::Hash`] with a `RandomState`, the value is the same in
	/// every process, so it can key memo tables that outlive one run.
	pub fn fingerprint(&self) -> u64 {
		fxhash::hash64(self.letters().as_bytes())
	}

	/// How many stickers of each color, indexed by [`Color::index`].
	pub fn color_counts(&self) -> [usize; 6] {
		let mut counts = [0; 6];
		for color in self.colors() {
			counts[color.index()] += 1;
		}
		counts
	}
}

impl Default for FaceletCube {
	fn default() -> Self {
		Self::new()
	}
}



#[cfg(test)]
mod facelet_cube {
	use super::*;

	mod color {
		use super::*;
		#[test]
		fn letters_round_trip() {
			for color in Color::ALL {
				assert_eq!(Ok(color), Color::from_letter(color.letter()));
			}
		}

		#[test]
		fn letters_are_distinct() {
			let mut letters: Vec<char> = Color::ALL.iter().map(|c| c.letter()).collect();
			letters.sort();
			letters.dedup();
			assert_eq!(6, letters.len());
		}

		#[test]
		fn invalid_letter() {
			assert_eq!(Err(CubeError::InvalidColorLetter('w')), Color::try_from('w'));
			assert_eq!(Err(CubeError::InvalidColorLetter('U')), Color::from_letter('U'));
		}

		#[test]
		fn home_face_matches_enumeration_order() {
			for (face, color) in Face::ALL.into_iter().zip(Color::ALL) {
				assert_eq!(color, face.home_color());
				assert_eq!(face, color.home_face());
			}
		}
	}

	mod color_at {
		use super::*;
		#[test]
		fn solved() {
			let cube = FaceletCube::new();
			assert_eq!(Ok(Color::Red), cube.color_at(Face::Front, 1, 1));
			assert_eq!(Ok(Color::Yellow), cube.color_at(Face::Down, 2, 0));
		}

		#[test]
		fn out_of_range() {
			let cube = FaceletCube::new();
			assert_eq!(Err(CubeError::OutOfRange { row: 3, col: 0 }), cube.color_at(Face::Up, 3, 0));
			assert_eq!(Err(CubeError::OutOfRange { row: 0, col: 7 }), cube.color_at(Face::Up, 0, 7));
		}
	}

	#[test]
	fn new_is_solved() {
		assert!(FaceletCube::new().is_solved());
		assert_eq!([9; 6], FaceletCube::new().color_counts());
	}

	#[test]
	fn letters_new() {
		let expected = ["W", "G", "R", "B", "O", "Y"].map(|l| l.repeat(9)).concat();
		assert_eq!(expected, FaceletCube::new().letters());
	}

	#[test]
	fn clone_is_independent() {
		let original = FaceletCube::new();
		let mut copy = original.clone();
		copy.cells[0][0][0] = Color::Yellow;
		assert!(original.is_solved());
		assert!(!copy.is_solved());
		assert_ne!(original, copy);
	}

	#[test]
	fn fingerprint_is_stable() {
		assert_eq!(FaceletCube::new().fingerprint(), FaceletCube::default().fingerprint());
	}
}
