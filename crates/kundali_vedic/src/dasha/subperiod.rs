//! Sub-period generation within a parent dasha span.
//!
//! Spans are measured in days from birth. Two methods:
//! - Proportional: child duration = parent duration × child years / 120,
//!   children in cycle order starting from the parent's lord.
//! - Elapsed fraction: nine equal slices in the same order.

use crate::graha::Graha;

use super::types::{SubPeriodMethod, VIMSHOTTARI, VIMSHOTTARI_TOTAL_YEARS};
use super::vimshottari::cycle_position;

/// A lord with a [start, end) interval in days from birth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub lord: Graha,
    pub start_day: f64,
    pub end_day: f64,
}

impl Span {
    pub fn duration_days(&self) -> f64 {
        self.end_day - self.start_day
    }

    pub fn contains(&self, day: f64) -> bool {
        day >= self.start_day && day < self.end_day
    }
}

/// Generate the nine children of a parent span.
pub fn children(parent: &Span, method: SubPeriodMethod) -> Vec<Span> {
    let start = cycle_position(parent.lord);
    let total = parent.duration_days();
    let mut out = Vec::with_capacity(VIMSHOTTARI.len());
    let mut cursor = parent.start_day;

    for i in 0..VIMSHOTTARI.len() {
        let (lord, years) = VIMSHOTTARI[(start + i) % VIMSHOTTARI.len()];
        let share = match method {
            SubPeriodMethod::Proportional => years / VIMSHOTTARI_TOTAL_YEARS,
            SubPeriodMethod::ElapsedFraction => 1.0 / VIMSHOTTARI.len() as f64,
        };
        let end = cursor + total * share;
        out.push(Span { lord, start_day: cursor, end_day: end });
        cursor = end;
    }

    // Absorb floating-point drift into the last child.
    if let Some(last) = out.last_mut() {
        last.end_day = parent.end_day;
    }
    out
}

/// Index of the child active at `day`.
///
/// Proportional children are searched directly. For the elapsed-fraction
/// method the fraction of the parent already elapsed is mapped onto the
/// nine slices. Either way the index is clamped to the last child.
pub fn active_child(parent: &Span, kids: &[Span], day: f64, method: SubPeriodMethod) -> usize {
    let last = kids.len().saturating_sub(1);
    match method {
        SubPeriodMethod::Proportional => kids.iter().position(|k| k.contains(day)).unwrap_or(last),
        SubPeriodMethod::ElapsedFraction => {
            let fraction = ((day - parent.start_day) / parent.duration_days()).clamp(0.0, 1.0);
            ((fraction * kids.len() as f64).floor() as usize).min(last)
        }
    }
}
