//! Generic pointer event types, independent of the host toolkit.

use crate::util::Point;

/// One event from a mouse, touch or stylus source.
///
/// `pressure` is the raw device value in 0.0-1.0; `None` (or 0.0) means the device
/// reports no pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Contact started
    Down { point: Point, pressure: Option<f64> },
    /// Contact moved while down
    Move { point: Point, pressure: Option<f64> },
    /// Contact ended; the gesture is committed
    Up { point: Point, pressure: Option<f64> },
}

impl PointerEvent {
    /// Replays a gesture: `Down` at the first sample, `Move` for the middle ones and
    /// `Up` at the last. A single sample yields `Down` followed by `Up` at the same spot.
    pub fn gesture(samples: &[(Point, Option<f64>)]) -> Vec<PointerEvent> {
        let Some((&(first, first_pressure), rest)) = samples.split_first() else {
            return Vec::new();
        };

        let mut events = vec![PointerEvent::Down {
            point: first,
            pressure: first_pressure,
        }];
        match rest.split_last() {
            Some((&(last, last_pressure), middle)) => {
                events.extend(
                    middle
                        .iter()
                        .map(|&(point, pressure)| PointerEvent::Move { point, pressure }),
                );
                events.push(PointerEvent::Up {
                    point: last,
                    pressure: last_pressure,
                });
            }
            None => events.push(PointerEvent::Up {
                point: first,
                pressure: first_pressure,
            }),
        }
        events
    }
}
