//! Timed execution of a selected solver

use crate::error::CliError;
use chrono::{DateTime, TimeDelta, Utc};
use euler_solver::Solver;

/// Result of one timed run
pub struct RunRecord {
    /// The answer this run produced
    pub answer: i64,
    /// When the run started (UTC)
    pub started: DateTime<Utc>,
    /// When the run finished (UTC)
    pub finished: DateTime<Utc>,
}

impl RunRecord {
    /// Get the run duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.finished - self.started
    }
}

/// Outcome of the whole timing loop
pub struct RunReport {
    /// The individual runs, in execution order
    pub runs: Vec<RunRecord>,
    /// Whether every run produced the same answer
    pub stable: bool,
}

impl RunReport {
    pub fn total_time(&self) -> TimeDelta {
        self.runs.iter().map(RunRecord::duration).sum()
    }
}

/// Run the solver the requested number of times, recording per-run timings
/// and checking that the answer is stable across runs.
///
/// A solver failure aborts the loop; runs already completed are discarded
/// since a partial report would misrepresent the failed benchmark.
pub fn run_solver(solver: &dyn Solver, runs: u32) -> Result<RunReport, CliError> {
    let mut records = Vec::with_capacity(runs as usize);
    for _ in 0..runs {
        let started = Utc::now();
        let answer = solver.solve()?;
        let finished = Utc::now();
        records.push(RunRecord {
            answer,
            started,
            finished,
        });
    }

    let stable = records
        .windows(2)
        .all(|pair| pair[0].answer == pair[1].answer);

    Ok(RunReport {
        runs: records,
        stable,
    })
}
