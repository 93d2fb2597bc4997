use thiserror::Error;



/// Everything that can go wrong when untyped input meets the cube model.
///
/// The move engine itself never fails; these only come from queries and
/// decoders that take raw indices, letters or tags.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
	#[error("cell ({row}, {col}) is out of range, rows and columns must be in 0..3")]
	OutOfRange { row: usize, col: usize },
	#[error("{0:?} is not a color letter, expected one of W G R B O Y")]
	InvalidColorLetter(char),
	#[error("unknown move {0:?}")]
	UnknownMove(String),
}
