//! Split a target value into two operands that recombine with math.
//!
//! Given a 32-bit word (or a string chunked into words), `opsplit`
//! asks a bitvector solver for a pair `(x, y)` with `op(x, y) == word`
//! modulo 2^32 such that no byte of either operand falls in a
//! caller-supplied bad-character set. Useful when payload bytes have
//! to dodge characters a vulnerable parser treats specially.

pub mod badchars;
pub mod error;
pub mod model;
pub mod report;
pub mod solve;
pub mod words;

pub use badchars::ByteExclusionSet;
pub use error::{InputError, Result, SolverError, SplitError};
pub use model::Operation;
pub use solve::{solve_word, SolutionSequence, SolveResult, SolverLimits};
pub use words::{split, SplitOptions, TargetWord};
