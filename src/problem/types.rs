//! The problem instance data model.

use super::error::ProblemError;
use std::fmt;

/// An immutable orchestra rehearsal scheduling instance.
///
/// `need_matrix[s][p]` is `true` iff solist `s` plays in piece `p`.
/// Piece lengths and salaries share the time unit of the problem file, so
/// the cost of an ordering is expressed in salary units.
///
/// # Examples
///
/// ```
/// use orchestra_scheduler::problem::ProblemInstance;
///
/// let problem = ProblemInstance::new(
///     vec![vec![true, false, true], vec![false, true, false]],
///     vec![2.0, 3.0, 4.0],
///     vec![10.0, 5.0],
/// )
/// .unwrap();
/// assert_eq!(problem.nbr_pieces(), 3);
/// assert_eq!(problem.nbr_solists(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawProblemInstance"))]
pub struct ProblemInstance {
    nbr_pieces: usize,
    nbr_solists: usize,
    need_matrix: Vec<Vec<bool>>,
    pieces_length: Vec<f64>,
    salaries: Vec<f64>,
}

impl ProblemInstance {
    /// Builds an instance, checking that all dimensions agree and that
    /// salaries and piece lengths are finite and non-negative.
    ///
    /// The number of solists is the number of rows of `need_matrix`; the
    /// number of pieces is the length of `pieces_length`.
    pub fn new(
        need_matrix: Vec<Vec<bool>>,
        pieces_length: Vec<f64>,
        salaries: Vec<f64>,
    ) -> Result<Self, ProblemError> {
        let nbr_solists = need_matrix.len();
        let nbr_pieces = pieces_length.len();

        if nbr_solists == 0 || nbr_pieces == 0 {
            return Err(ProblemError::EmptyInstance);
        }
        if salaries.len() != nbr_solists {
            return Err(ProblemError::DimensionMismatch {
                what: "salaries",
                expected: nbr_solists,
                found: salaries.len(),
            });
        }
        if let Some(row) = need_matrix.iter().find(|row| row.len() != nbr_pieces) {
            return Err(ProblemError::DimensionMismatch {
                what: "need matrix row",
                expected: nbr_pieces,
                found: row.len(),
            });
        }

        check_values("piece length", &pieces_length)?;
        check_values("salary", &salaries)?;

        Ok(Self {
            nbr_pieces,
            nbr_solists,
            need_matrix,
            pieces_length,
            salaries,
        })
    }

    pub fn nbr_pieces(&self) -> usize {
        self.nbr_pieces
    }

    pub fn nbr_solists(&self) -> usize {
        self.nbr_solists
    }

    pub fn need_matrix(&self) -> &[Vec<bool>] {
        &self.need_matrix
    }

    pub fn pieces_length(&self) -> &[f64] {
        &self.pieces_length
    }

    pub fn salaries(&self) -> &[f64] {
        &self.salaries
    }

    /// Whether `solist` plays in `piece`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn is_needed(&self, solist: usize, piece: usize) -> bool {
        self.need_matrix[solist][piece]
    }
}

fn check_values(what: &'static str, values: &[f64]) -> Result<(), ProblemError> {
    match values.iter().position(|v| !v.is_finite() || *v < 0.0) {
        Some(index) => Err(ProblemError::InvalidValue {
            what,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

/// Unchecked wire form; deserialization goes through [`ProblemInstance::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawProblemInstance {
    need_matrix: Vec<Vec<bool>>,
    pieces_length: Vec<f64>,
    salaries: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawProblemInstance> for ProblemInstance {
    type Error = ProblemError;

    fn try_from(raw: RawProblemInstance) -> Result<Self, Self::Error> {
        Self::new(raw.need_matrix, raw.pieces_length, raw.salaries)
    }
}

impl fmt::Display for ProblemInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "number of solists: {}", self.nbr_solists)?;
        writeln!(f, "number of pieces: {}", self.nbr_pieces)?;
        writeln!(f, "need matrix:")?;
        for row in &self.need_matrix {
            let flags: Vec<&str> = row.iter().map(|&b| if b { "1" } else { "0" }).collect();
            writeln!(f, "  {}", flags.join(" "))?;
        }
        writeln!(f, "salaries: {:?}", self.salaries)?;
        write!(f, "pieces length: {:?}", self.pieces_length)
    }
}
