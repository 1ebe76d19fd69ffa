//! Small statistics helpers shared by the metrics.

use ndarray::Array1;

/// Arithmetic mean. `None` for an empty slice.
///
/// Non-finite inputs propagate into the result.
pub fn mean(values: &[f64]) -> Option<f64> {
    Array1::from_vec(values.to_vec()).mean()
}

/// Sample standard deviation (divisor n - 1).
///
/// Undefined for fewer than two observations, returned as NaN.
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    Array1::from_vec(values.to_vec()).std(1.0)
}

/// Key of the first maximal finite value, in iteration order.
///
/// A later candidate replaces the current best only when strictly greater,
/// so ties resolve to the earliest key. Non-finite values are never
/// selected; `None` when no candidate is finite.
pub fn first_max<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut best: Option<(&'a str, f64)> = None;

    for (key, value) in candidates {
        if !value.is_finite() {
            continue;
        }
        match best {
            Some((_, current)) if value <= current => {}
            _ => best = Some((key, value)),
        }
    }

    best.map(|(key, _)| key)
}
