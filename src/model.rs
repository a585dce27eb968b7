use crate::badchars::ByteExclusionSet;
use crate::error::InputError;
use crate::words::TargetWord;
use z3::ast::{Ast, BV};
use z3::{Context, Solver};

pub const WORD_BITS: u32 = 32;
pub const WORD_BYTES: u32 = WORD_BITS / 8;

/// The binary relation the two operands must satisfy against the
/// target word. Exactly one operation applies per solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Xor,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Xor => "xor",
        }
    }

    /// Recombines a solved pair under 32-bit wraparound semantics.
    /// Used for caller-side verification of satisfiable results.
    pub fn apply(self, x: u32, y: u32) -> u32 {
        match self {
            Self::Add => x.wrapping_add(y),
            Self::Subtract => x.wrapping_sub(y),
            Self::Xor => x ^ y,
        }
    }
}

impl std::str::FromStr for Operation {
    type Err = InputError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "xor" => Ok(Self::Xor),
            _ => Err(InputError::UnknownOperation(raw.to_string())),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two unknown operands of one word's constraint model. Opaque to
/// callers until the solver driver extracts concrete values.
pub struct WordModel<'ctx> {
    pub x: BV<'ctx>,
    pub y: BV<'ctx>,
}

/// Asserts the full constraint set for one target word into `solver`:
/// the relation `op(x, y) == target` over 32-bit bitvectors, then one
/// inequality per byte slice per excluded value.
///
/// The exclusions are per-slice rather than one inequality on the
/// whole word: an excluded byte must be dodged in every position it
/// could occupy, not just as a 32-bit literal.
pub fn build<'ctx>(
    ctx: &'ctx Context,
    solver: &Solver<'ctx>,
    target: TargetWord,
    op: Operation,
    exclusions: &ByteExclusionSet,
) -> WordModel<'ctx> {
    let x = BV::new_const(ctx, "x", WORD_BITS);
    let y = BV::new_const(ctx, "y", WORD_BITS);
    let wanted = BV::from_u64(ctx, u64::from(target.value()), WORD_BITS);

    let combined = match op {
        Operation::Add => x.bvadd(&y),
        Operation::Subtract => x.bvsub(&y),
        Operation::Xor => x.bvxor(&y),
    };
    solver.assert(&combined._eq(&wanted));

    // Slice i covers bits [8i, 8i+8) of the solved value; this is a
    // bit-position decomposition, independent of host endianness.
    for i in 0..WORD_BYTES {
        let high = (i + 1) * 8 - 1;
        let low = i * 8;
        let x_byte = x.extract(high, low);
        let y_byte = y.extract(high, low);
        for bad in exclusions.iter() {
            let forbidden = BV::from_u64(ctx, u64::from(bad), 8);
            solver.assert(&x_byte._eq(&forbidden).not());
            solver.assert(&y_byte._eq(&forbidden).not());
        }
    }

    WordModel { x, y }
}
