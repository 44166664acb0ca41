use std::f64::consts::TAU;

/// Precomputed sine/cosine values sampled over one full turn.
///
/// Rotation angles are resolved to the nearest tabulated entry instead of
/// calling `sin`/`cos` for every point rotation. Angles outside `[0, 2π)`
/// wrap around: `-π/2` and `3π/2` resolve to the same entry, and an angle of
/// exactly `2π` lands back on index 0.
#[derive(Debug, Clone, PartialEq)]
pub struct TrigTable {
    sin: Vec<f64>,
    cos: Vec<f64>,
    step: f64,
}

impl TrigTable {
    /// Builds a table with `n` entries at step `2π / n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "TrigTable requires at least one entry");
        let step = TAU / n as f64;
        let (sin, cos) = (0..n)
            .map(|i| {
                let angle = i as f64 * step;
                (angle.sin(), angle.cos())
            })
            .unzip();
        Self { sin, cos, step }
    }

    pub fn len(&self) -> usize {
        self.sin.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sin.is_empty()
    }

    /// The angular resolution in radians.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Resolves `angle` (radians) to the nearest tabulated `(sin, cos)` pair.
    pub fn sin_cos(&self, angle: f64) -> (f64, f64) {
        let index = (angle.rem_euclid(TAU) / self.step).round() as usize % self.sin.len();
        (self.sin[index], self.cos[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn tabulates_exact_values_at_sample_points() {
        let table = TrigTable::new(3600);

        let (s, c) = table.sin_cos(FRAC_PI_2);
        assert!((s - 1.0).abs() < 1e-9);
        assert!(c.abs() < 1e-9);

        let (s, c) = table.sin_cos(PI);
        assert!(s.abs() < 1e-9);
        assert!((c + 1.0).abs() < 1e-9);
    }

    #[test]
    fn wraps_negative_angles_into_the_table_domain() {
        let table = TrigTable::new(3600);

        let (s_neg, c_neg) = table.sin_cos(-FRAC_PI_2);
        let (s_pos, c_pos) = table.sin_cos(3.0 * FRAC_PI_2);

        assert_eq!(s_neg, s_pos);
        assert_eq!(c_neg, c_pos);
        assert!((s_neg + 1.0).abs() < 1e-9);
        assert!(c_neg.abs() < 1e-9);
    }

    #[test]
    fn wraps_full_turns_back_to_index_zero() {
        let table = TrigTable::new(360);

        assert_eq!(table.sin_cos(TAU), table.sin_cos(0.0));
        assert_eq!(table.sin_cos(5.0 * TAU + PI), table.sin_cos(PI));
    }

    #[test]
    fn rounds_to_the_nearest_entry() {
        let table = TrigTable::new(360);
        let step = table.step();

        // Slightly less than half a step above an entry resolves down.
        let (s, _) = table.sin_cos(10.0 * step + 0.49 * step);
        assert_eq!(s, (10.0 * step).sin());

        // Slightly more than half a step resolves up.
        let (s, _) = table.sin_cos(10.0 * step + 0.51 * step);
        assert_eq!(s, (11.0 * step).sin());
    }

    #[test]
    #[should_panic(expected = "at least one entry")]
    fn rejects_empty_table() {
        TrigTable::new(0);
    }
}
