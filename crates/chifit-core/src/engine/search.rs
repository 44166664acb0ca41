use super::composer::{compose, compose_into};
use super::error::FitError;
use super::group::RotationGroup;
use super::progress::{Progress, ProgressReporter};
use super::scoring::ScoreFunction;
use crate::core::trig::TrigTable;
use nalgebra::Point3;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument};

/// The result of one search invocation.
///
/// `sites` is `None` when no candidate strictly improved on the scorer's
/// initial score (including the empty-candidate-list case), and `score` is
/// then the initial score unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    pub sites: Option<Vec<Point3<f64>>>,
    pub score: f64,
}

impl FitOutcome {
    pub fn improved(&self) -> bool {
        self.sites.is_some()
    }
}

/// Scans the candidate list in order and returns the best-scoring
/// arrangement.
///
/// Every candidate is composed onto a private copy of `base` and scored;
/// the incumbent is replaced only on strict improvement, so the earliest
/// candidate wins exact ties. Candidate angle counts are validated up front
/// and any mismatch aborts the whole search.
///
/// With the `parallel` feature the candidates are scored across worker
/// threads and reduced in list order, which reproduces the sequential
/// tie-break exactly regardless of scheduling.
#[instrument(
    skip_all,
    name = "conformer_fit",
    fields(candidates = candidates.len(), axes = group.len())
)]
pub fn fit<S: ScoreFunction + Sync>(
    base: &[Point3<f64>],
    group: &RotationGroup,
    candidates: &[Vec<f64>],
    scorer: &S,
    table: &TrigTable,
    reporter: &ProgressReporter,
) -> Result<FitOutcome, FitError> {
    group.check_candidates(candidates)?;

    reporter.report(Progress::ScanStart {
        total_candidates: candidates.len() as u64,
    });
    let scores = score_all(base, group, candidates, scorer, table, reporter)?;
    reporter.report(Progress::ScanFinish);

    let mut incumbent = scorer.initial_score();
    let mut best: Option<usize> = None;
    for (index, &score) in scores.iter().enumerate() {
        if scorer.improves(score, incumbent) {
            incumbent = score;
            best = Some(index);
        }
    }

    match best {
        None => {
            debug!("no candidate improved on the initial score");
            Ok(FitOutcome {
                sites: None,
                score: scorer.initial_score(),
            })
        }
        Some(index) => {
            debug!(candidate = index, score = incumbent, "search found a better arrangement");
            let sites = compose(base, group, &candidates[index], table)?;
            Ok(FitOutcome {
                sites: Some(sites),
                score: incumbent,
            })
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn score_all<S: ScoreFunction>(
    base: &[Point3<f64>],
    group: &RotationGroup,
    candidates: &[Vec<f64>],
    scorer: &S,
    table: &TrigTable,
    reporter: &ProgressReporter,
) -> Result<Vec<f64>, FitError> {
    // One scratch arrangement reused across the whole scan.
    let mut scratch = Vec::with_capacity(base.len());
    candidates
        .iter()
        .map(|angles| {
            compose_into(&mut scratch, base, group, angles, table)?;
            let score = scorer.score(&scratch)?;
            reporter.report(Progress::CandidateScored);
            Ok(score)
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn score_all<S: ScoreFunction + Sync>(
    base: &[Point3<f64>],
    group: &RotationGroup,
    candidates: &[Vec<f64>],
    scorer: &S,
    table: &TrigTable,
    reporter: &ProgressReporter,
) -> Result<Vec<f64>, FitError> {
    // One scratch arrangement per worker.
    candidates
        .par_iter()
        .map_init(
            || Vec::with_capacity(base.len()),
            |scratch, angles| {
                compose_into(scratch, base, group, angles, table)?;
                let score = scorer.score(scratch)?;
                reporter.report(Progress::CandidateScored);
                Ok(score)
            },
        )
        .collect()
}
