//! Timing and reporting of solver runs.
//!
//! [`timed`] measures one solver call; [`Report`] collects the runs and
//! renders them as text (one `key: value` line each) or, through `serde`,
//! as JSON.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};

use crate::models::Tour;

/// A value together with the wall-clock time taken to produce it.
#[derive(Debug, Clone)]
pub struct Timed<T> {
    /// Result of the measured call.
    pub value: T,
    /// Elapsed wall-clock time.
    pub elapsed: Duration,
}

/// Runs `f` and records how long it took.
///
/// # Examples
///
/// ```
/// use u_tsp::report::timed;
///
/// let t = timed(|| 2 + 2);
/// assert_eq!(t.value, 4);
/// ```
pub fn timed<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// Outcome of a single solver invocation.
#[derive(Debug, Clone, Serialize)]
pub struct SolverRun {
    /// Cost of the returned tour.
    pub cost: u64,
    /// The tour, origin at both ends.
    pub tour: Vec<usize>,
    /// Wall-clock time spent in the solver.
    #[serde(rename = "elapsed_seconds", serialize_with = "serialize_seconds")]
    pub elapsed: Duration,
}

impl From<Timed<Tour>> for SolverRun {
    fn from(run: Timed<Tour>) -> Self {
        Self {
            cost: run.value.cost(),
            tour: run.value.nodes().to_vec(),
            elapsed: run.elapsed,
        }
    }
}

fn serialize_seconds<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

/// Costs and timings of one program run.
///
/// `exact` is present only when the branch-and-bound solver was requested.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::report::{Report, SolverRun};
///
/// let report = Report {
///     exact: None,
///     approximate: SolverRun {
///         cost: 95,
///         tour: vec![0, 1, 2, 3, 0],
///         elapsed: Duration::from_micros(12),
///     },
/// };
/// assert_eq!(
///     report.to_string(),
///     "approx_tsp_cost: 95\napprox_tsp_time: 0.000012 s\n"
/// );
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Branch-and-bound run, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<SolverRun>,
    /// MST heuristic run.
    pub approximate: SolverRun,
}

impl Report {
    /// `approximate / exact` cost, when the exact solver ran and its
    /// optimum is non-zero.
    pub fn approximation_ratio(&self) -> Option<f64> {
        let exact = self.exact.as_ref()?;
        if exact.cost == 0 {
            return None;
        }
        Some(self.approximate.cost as f64 / exact.cost as f64)
    }

    /// Writes the tours below the cost lines, one per solver.
    pub fn write_tours(&self, f: &mut impl fmt::Write) -> fmt::Result {
        if let Some(exact) = &self.exact {
            writeln!(f, "brute_force_tour: {}", join(&exact.tour))?;
        }
        writeln!(f, "approx_tsp_tour: {}", join(&self.approximate.tour))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(exact) = &self.exact {
            writeln!(f, "brute_force_cost: {}", exact.cost)?;
            writeln!(f, "brute_force_time: {:.6} s", exact.elapsed.as_secs_f64())?;
        }
        writeln!(f, "approx_tsp_cost: {}", self.approximate.cost)?;
        writeln!(
            f,
            "approx_tsp_time: {:.6} s",
            self.approximate.elapsed.as_secs_f64()
        )
    }
}

fn join(nodes: &[usize]) -> String {
    nodes
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
