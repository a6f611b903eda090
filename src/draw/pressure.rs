//! Pressure smoothing for stylus input.
//!
//! Raw device pressure is noisy; feeding it straight into the line width makes
//! freehand strokes look jittery. [`PressureSmoother`] keeps a short moving
//! window of raw samples and eases towards its mean, producing a width signal
//! that stays inside the visible range.

use std::collections::VecDeque;

/// Lowest pressure value a stroke ever renders with.
pub const MIN_PRESSURE: f64 = 0.3;
/// Highest pressure value a stroke ever renders with.
pub const MAX_PRESSURE: f64 = 1.0;
/// Substitute for devices reporting no pressure (absent or exactly zero).
pub const DEFAULT_PRESSURE: f64 = MIN_PRESSURE;

const DEFAULT_WINDOW: usize = 5;
const DEFAULT_SMOOTHING: f64 = 0.2;

/// Normalises the pressure reported by an input device before smoothing.
///
/// Absent or zero pressure becomes [`DEFAULT_PRESSURE`] so that devices without a
/// pressure sensor still produce visible strokes.
pub fn normalize_raw(raw: Option<f64>) -> f64 {
    match raw {
        Some(value) if value != 0.0 && value.is_finite() => value,
        _ => DEFAULT_PRESSURE,
    }
}

/// Gesture-scoped moving-average + exponential smoothing filter.
///
/// Call [`reset`](Self::reset) at the start of each gesture so consecutive
/// strokes do not bias each other.
#[derive(Debug, Clone)]
pub struct PressureSmoother {
    window: VecDeque<f64>,
    capacity: usize,
    smoothing: f64,
    floor: f64,
    last: Option<f64>,
}

impl Default for PressureSmoother {
    fn default() -> Self {
        Self::new()
    }
}

impl PressureSmoother {
    /// Creates a smoother with a 5-sample window, α = 0.2 and a 0.3 floor.
    pub fn new() -> Self {
        Self::with_params(DEFAULT_WINDOW, DEFAULT_SMOOTHING, MIN_PRESSURE)
    }

    /// Creates a smoother with custom window size, smoothing factor and floor.
    ///
    /// Values are sanitised: the window holds at least one sample, α is kept in
    /// (0, 1] and the floor stays within [`MIN_PRESSURE`]..=[`MAX_PRESSURE`].
    /// Non-finite parameters fall back to the defaults.
    pub fn with_params(window: usize, smoothing: f64, floor: f64) -> Self {
        let capacity = window.max(1);
        let smoothing = if smoothing.is_finite() { smoothing } else { DEFAULT_SMOOTHING };
        let floor = if floor.is_finite() { floor } else { MIN_PRESSURE };
        Self {
            window: VecDeque::with_capacity(capacity),
            capacity,
            smoothing: smoothing.clamp(f64::EPSILON, 1.0),
            floor: floor.clamp(MIN_PRESSURE, MAX_PRESSURE),
            last: None,
        }
    }

    /// Feeds one raw sample and returns the smoothed, clamped pressure.
    ///
    /// Non-finite samples count as [`MIN_PRESSURE`].
    pub fn sample(&mut self, raw: f64) -> f64 {
        let raw = if raw.is_finite() { raw } else { MIN_PRESSURE };
        if self.window.len() == self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(raw);

        let average = self.window.iter().sum::<f64>() / self.window.len() as f64;
        let last = *self.last.get_or_insert(raw);
        let smoothed = (last + (average - last) * self.smoothing).clamp(self.floor, MAX_PRESSURE);

        self.last = Some(smoothed);
        smoothed
    }

    /// Forgets all history; the next sample starts a fresh gesture.
    pub fn reset(&mut self) {
        self.window.clear();
        self.last = None;
    }

    /// Number of raw samples currently held in the window.
    pub fn buffered(&self) -> usize {
        self.window.len()
    }
}
