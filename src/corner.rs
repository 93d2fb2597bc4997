//! Read-only corner cubie queries over the facelet state.
//!
//! A corner slot is named by its three faces, U or D first and the other two
//! clockwise as seen from outside the cube. The cubie in a slot is identified
//! by the color set of its stickers, and its twist by where the U/D colored
//! sticker sits in the slot's triple. For any state reached by face turns the
//! 8 slots hold 8 different cubies and the twists sum to a multiple of 3.

use crate::facelet::{Color, Face, FaceletCube};



#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Corner { URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB }
impl Corner {
	pub const ALL: [Corner; 8] = { use Corner::*; [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB] };

	/// (face, row, col) of the slot's three stickers.
	pub const fn facelets(self) -> [(Face, usize, usize); 3] {
		use Face::*;
		match self {
			Corner::URF => [(Up, 2, 2), (Right, 0, 0), (Front, 0, 2)],
			Corner::UFL => [(Up, 2, 0), (Front, 0, 0), (Left, 0, 2)],
			Corner::ULB => [(Up, 0, 0), (Left, 0, 0), (Back, 0, 2)],
			Corner::UBR => [(Up, 0, 2), (Back, 0, 0), (Right, 0, 2)],
			Corner::DFR => [(Down, 0, 2), (Front, 2, 2), (Right, 2, 0)],
			Corner::DLF => [(Down, 0, 0), (Left, 2, 2), (Front, 2, 0)],
			Corner::DBL => [(Down, 2, 0), (Back, 2, 2), (Left, 2, 0)],
			Corner::DRB => [(Down, 2, 2), (Right, 2, 2), (Back, 2, 0)],
		}
	}

	/// Slot indexed by which sides it touches: bit 2 for Down (else Up),
	/// bit 1 for Back (else Front), bit 0 for Left (else Right).
	const BY_SIDES: [Corner; 8] = { use Corner::*; [URF, UFL, UBR, ULB, DFR, DLF, DRB, DBL] };
}



impl FaceletCube {
	pub fn corner_colors(&self, corner: Corner) -> [Color; 3] {
		corner.facelets().map(|(face, row, col)| self.cells[face.index()][row][col])
	}

	/// Home slot of the cubie currently sitting in `corner`.
	pub fn corner_cubie(&self, corner: Corner) -> Corner {
		let mut sides = 0;
		for color in self.corner_colors(corner) {
			sides |= match color.home_face() {
				Face::Down => 0b100,
				Face::Back => 0b010,
				Face::Left => 0b001,
				_ => 0,
			};
		}
		Corner::BY_SIDES[sides]
	}

	/// 0 when the U/D sticker of the cubie faces U or D, 1 or 2 when it is
	/// turned that many steps clockwise within the slot.
	pub fn corner_twist(&self, corner: Corner) -> u8 {
		let is_up_or_down = |color: Color| matches!(color, Color::White | Color::Yellow);
		let [first, second, _] = self.corner_colors(corner);
		if is_up_or_down(first) {
			0
		} else if is_up_or_down(second) {
			1
		} else {
			2
		}
	}
}
