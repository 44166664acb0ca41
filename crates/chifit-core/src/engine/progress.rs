#[derive(Debug, Clone)]
pub enum Progress {
    ScanStart { total_candidates: u64 },
    CandidateScored,
    ScanFinish,
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards search progress events to an optional caller-supplied callback.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn forwards_events_to_the_callback() {
        let scored = AtomicUsize::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if matches!(event, Progress::CandidateScored) {
                scored.fetch_add(1, Ordering::Relaxed);
            }
        }));

        reporter.report(Progress::ScanStart {
            total_candidates: 2,
        });
        reporter.report(Progress::CandidateScored);
        reporter.report(Progress::CandidateScored);
        reporter.report(Progress::ScanFinish);

        assert_eq!(scored.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn reporter_without_callback_is_a_no_op() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::CandidateScored);
    }
}
