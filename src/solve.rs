use crate::badchars::ByteExclusionSet;
use crate::error::{Result, SolverError};
use crate::model::{self, Operation};
use crate::words::TargetWord;
use z3::ast::BV;
use z3::{Config, Context, Params, SatResult, Solver};

/// Resource bounds for a single solve. `timeout_ms` unset means the
/// solver runs until it decides.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolverLimits {
    pub timeout_ms: Option<u32>,
}

/// Outcome of one word's solve. Unsatisfiable and Unknown are
/// legitimate terminal outcomes, not errors; the driver never retries
/// with relaxed constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult {
    Satisfiable {
        x: u32,
        y: u32,
    },
    /// Carries the asserted constraint set in SMT-LIB text so an
    /// infeasible word can be inspected offline.
    Unsatisfiable {
        assertions: String,
    },
    Unknown {
        reason: Option<String>,
    },
}

/// Per-word results in the order the splitter emitted the words.
pub type SolutionSequence = Vec<(TargetWord, SolveResult)>;

fn configure_solver(ctx: &Context, solver: &Solver, limits: &SolverLimits) {
    let mut params = Params::new(ctx);
    if let Some(timeout_ms) = limits.timeout_ms {
        params.set_u32("timeout", timeout_ms);
    }
    params.set_u32("random_seed", 42); // Deterministic by default
    solver.set_params(&params);
}

/// Builds and checks the constraint model for one target word.
///
/// Each call owns a fresh Z3 context: contexts are not `Send` and the
/// per-word models share nothing, so nothing is gained by pooling one.
pub fn solve_word(
    target: TargetWord,
    op: Operation,
    exclusions: &ByteExclusionSet,
    limits: &SolverLimits,
) -> Result<SolveResult> {
    let cfg = Config::new();
    let ctx = Context::new(&cfg);
    let solver = Solver::new(&ctx);
    configure_solver(&ctx, &solver, limits);

    let word_model = model::build(&ctx, &solver, target, op, exclusions);

    tracing::debug!(
        "[SOLVE] word {} via {} ({} excluded bytes)",
        target,
        op,
        exclusions.len()
    );

    match solver.check() {
        SatResult::Sat => {
            let model = solver
                .get_model()
                .ok_or_else(|| SolverError::Operation("sat verdict without a model".into()))?;
            let x = eval_u32(&model, &word_model.x, "x")?;
            let y = eval_u32(&model, &word_model.y, "y")?;
            Ok(SolveResult::Satisfiable { x, y })
        }
        SatResult::Unsat => {
            tracing::info!("[SOLVE] word {} unsat under {}", target, op);
            Ok(SolveResult::Unsatisfiable {
                assertions: solver.to_string(),
            })
        }
        SatResult::Unknown => {
            let reason = solver.get_reason_unknown();
            tracing::info!(
                "[SOLVE] word {} unknown under {}: {}",
                target,
                op,
                reason.as_deref().unwrap_or("no reason given")
            );
            Ok(SolveResult::Unknown { reason })
        }
    }
}

fn eval_u32<'ctx>(model: &z3::Model<'ctx>, operand: &BV<'ctx>, name: &str) -> Result<u32> {
    let value = model
        .eval(operand, true)
        .and_then(|bv| bv.as_u64())
        .ok_or_else(|| {
            SolverError::Operation(format!("could not extract concrete value for `{name}`"))
        })?;
    Ok(value as u32)
}
