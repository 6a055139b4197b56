//! Suspicion level computation.


/// Phi value for `time_diff_ms` of silence against the expected distribution.
///
/// Uses the logistic approximation to the normal tail probability from
/// Hayashibara et al.; the true normal CDF has no closed form. The result is
/// monotonically non-decreasing in `time_diff_ms` for a fixed mean and spread
/// and approaches zero as the elapsed time falls far below the mean.
///
/// `std_deviation_ms` must be strictly positive; the detector floors it to a
/// configured minimum before calling.
pub(crate) fn phi(time_diff_ms: f64, mean_ms: f64, std_deviation_ms: f64) -> f64 {
  let y = (time_diff_ms - mean_ms) / std_deviation_ms;
  let e = (-y * (1.5976 + 0.070566 * y * y)).exp();

  if time_diff_ms > mean_ms {
    -(e / (1.0 + e)).log10()
  } else {
    -(1.0 - 1.0 / (1.0 + e)).log10()
  }
}
