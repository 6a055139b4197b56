//! Time sources consumed by the failure detector.

mod manual_clock;
mod monotonic_clock;
mod system_clock;

pub use manual_clock::ManualClock;
pub use monotonic_clock::MonotonicClock;
pub use system_clock::SystemClock;
