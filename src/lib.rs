//! Rubik's Cube facelet model: 54 stickers and the 18 face turns that permute them.
//!
//! ```
//! use rubiks_cube_model_rs::{FaceletCube, Move, RubiksCube, inverse_sequence, parse_moves};
//!
//! let mut cube = FaceletCube::new();
//! let scramble = parse_moves("R U R' U' F2").unwrap();
//! cube.apply_moves(&scramble);
//! assert!(!cube.is_solved());
//!
//! cube.apply_moves(&inverse_sequence(&scramble));
//! assert!(cube.is_solved());
//! assert_eq!("R'", Move::RPrime.to_string());
//! ```

pub mod corner;
pub mod cube;
mod engine;
pub mod error;
pub mod facelet;
pub mod moves;
pub mod shuffle;

pub use corner::Corner;
pub use cube::RubiksCube;
pub use error::CubeError;
pub use facelet::{Color, Face, FaceletCube};
pub use moves::{ALL_MOVES, Move, Turn, inverse_sequence, parse_moves};
pub use shuffle::{MoveSource, UniformMoves, new_shuffled, shuffle, shuffle_once};
