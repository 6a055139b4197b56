use super::HeartbeatHistory;

const TOLERANCE: f64 = 1e-9;

#[test]
fn should_compute_mean_over_retained_samples() {
  let history = HeartbeatHistory::new(10).append(100).append(200).append(300);
  assert!((history.mean() - 200.0).abs() < TOLERANCE);
}

#[test]
fn should_compute_population_standard_deviation() {
  let history = HeartbeatHistory::new(10).append(100).append(300);
  // mean 200, deviations +-100
  assert!((history.std_deviation() - 100.0).abs() < TOLERANCE);
}

#[test]
fn should_match_naive_statistics_within_capacity() {
  let samples = [750_u64, 1250, 1000, 100, 2400];
  let mut history = HeartbeatHistory::new(samples.len());
  for sample in samples {
    history = history.append(sample);
  }

  let count = samples.len() as f64;
  let mean = samples.iter().sum::<u64>() as f64 / count;
  let variance = samples.iter().map(|&s| (s as f64 - mean) * (s as f64 - mean)).sum::<f64>() / count;

  assert!((history.mean() - mean).abs() < TOLERANCE);
  assert!((history.variance() - variance).abs() < 1e-6);
  assert!((history.std_deviation() - variance.sqrt()).abs() < 1e-6);
}

#[test]
fn should_evict_oldest_sample_beyond_capacity() {
  let history = HeartbeatHistory::new(3).append(1000).append(100).append(200).append(300);
  assert_eq!(history.sample_count(), 3);
  // 1000 evicted, stats cover [100, 200, 300] only
  assert!((history.mean() - 200.0).abs() < TOLERANCE);
  let variance = (10_000.0 + 0.0 + 10_000.0) / 3.0;
  assert!((history.variance() - variance).abs() < 1e-6);
}

#[test]
fn should_leave_receiver_untouched_on_append() {
  let base = HeartbeatHistory::new(2).append(100).append(200);
  let grown = base.append(900);
  assert!((base.mean() - 150.0).abs() < TOLERANCE);
  assert!((grown.mean() - 550.0).abs() < TOLERANCE);
}

#[test]
fn should_keep_single_slot_window_with_unit_capacity() {
  let history = HeartbeatHistory::new(1).append(750).append(1250);
  assert_eq!(history.sample_count(), 1);
  assert!((history.mean() - 1250.0).abs() < TOLERANCE);
  assert!(history.variance().abs() < TOLERANCE);
}
