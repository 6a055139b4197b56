use super::ManualClock;
use crate::clock::MonotonicClock;

#[test]
fn should_accumulate_offsets_from_zero_origin() {
  let clock = ManualClock::from_offsets(&[0, 1, 2, 3]);
  assert_eq!(clock.now_millis(), 0);
  assert_eq!(clock.now_millis(), 1);
  assert_eq!(clock.now_millis(), 3);
  assert_eq!(clock.now_millis(), 6);
}

#[test]
fn should_report_interval_between_consecutive_reads() {
  let clock = ManualClock::from_offsets(&[1000, 100, 200, 300]);
  let mut last = clock.now_millis();
  for expected in [100, 200, 300] {
    let now = clock.now_millis();
    assert_eq!(now - last, expected);
    last = now;
  }
}

#[test]
fn should_repeat_last_instant_when_exhausted() {
  let clock = ManualClock::from_offsets(&[0, 50]);
  assert_eq!(clock.now_millis(), 0);
  assert_eq!(clock.now_millis(), 50);
  assert_eq!(clock.now_millis(), 50);
  assert_eq!(clock.now_millis(), 50);
}
