use crate::config::{KNOB_CENTER, KNOB_HIGH, KNOB_LOW};

/// What one knob sample did to the gesture
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KnobStep {
    /// Nothing new
    Hold,
    /// First reading outside the neutral band since the gesture was armed
    Departed(u16),
    /// The knob reached the far end opposite its starting side
    Rotated { initial: u16, value: u16 },
}

/// Full-range rotation detector for the potentiometer
///
/// The gesture is armed with the reading at the moment a new action is
/// posed. It completes once the knob has left the neutral band at least
/// once and then sits beyond the threshold on the side opposite the start.
/// Arming is the only reset: after `Rotated` further samples past the
/// threshold keep reporting `Rotated` until `arm` is called again.
#[derive(Copy, Clone, Debug)]
pub struct KnobGesture {
    initial: u16,
    departed: bool,
}

impl KnobGesture {
    pub const fn new(initial: u16) -> Self {
        Self {
            initial,
            departed: false,
        }
    }

    pub fn arm(&mut self, initial: u16) {
        self.initial = initial;
        self.departed = false;
    }

    pub fn initial(&self) -> u16 {
        self.initial
    }

    pub fn has_departed(&self) -> bool {
        self.departed
    }

    pub fn update(&mut self, value: u16) -> KnobStep {
        let mut step = KnobStep::Hold;

        if !self.departed && (value < KNOB_LOW || value > KNOB_HIGH) {
            self.departed = true;
            step = KnobStep::Departed(value);
        }

        if self.departed {
            let reached = if self.initial < KNOB_CENTER {
                value > KNOB_HIGH
            } else {
                value < KNOB_LOW
            };
            if reached {
                step = KnobStep::Rotated {
                    initial: self.initial,
                    value,
                };
            }
        }

        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotations(gesture: &mut KnobGesture, path: &[u16]) -> Vec<usize> {
        path.iter()
            .enumerate()
            .filter(|&(_, &v)| matches!(gesture.update(v), KnobStep::Rotated { .. }))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn high_start_must_end_low() {
        let mut g = KnobGesture::new(700);
        let path = [650, 820, 910, 1010, 600, 300, 120, 99, 40];
        assert_eq!(rotations(&mut g, &path), [7, 8]);
    }

    #[test]
    fn low_start_must_end_high() {
        let mut g = KnobGesture::new(200);
        assert_eq!(g.update(50), KnobStep::Departed(50));
        assert_eq!(g.update(500), KnobStep::Hold);
        assert_eq!(
            g.update(901),
            KnobStep::Rotated {
                initial: 200,
                value: 901
            }
        );
    }

    #[test]
    fn wobble_inside_band_is_ignored() {
        let mut g = KnobGesture::new(520);
        let path = [480, 560, 100, 900, 512, 101, 899];
        assert_eq!(rotations(&mut g, &path), Vec::<usize>::new());
        assert!(!g.has_departed());
    }

    #[test]
    fn departure_to_the_wrong_side_alone_is_not_enough() {
        let mut g = KnobGesture::new(800);
        assert_eq!(g.update(950), KnobStep::Departed(950));
        assert_eq!(g.update(1023), KnobStep::Hold);
        assert!(matches!(g.update(20), KnobStep::Rotated { .. }));
    }

    #[test]
    fn center_start_counts_as_high_side() {
        let mut g = KnobGesture::new(KNOB_CENTER);
        assert_eq!(g.update(950), KnobStep::Departed(950));
        assert!(matches!(g.update(90), KnobStep::Rotated { .. }));
    }

    #[test]
    fn crossing_in_one_sample_departs_and_completes() {
        let mut g = KnobGesture::new(300);
        assert_eq!(
            g.update(1000),
            KnobStep::Rotated {
                initial: 300,
                value: 1000
            }
        );
    }

    #[test]
    fn arm_resets_the_latch() {
        let mut g = KnobGesture::new(100);
        g.update(950);
        assert!(g.has_departed());
        g.arm(960);
        assert!(!g.has_departed());
        assert_eq!(g.initial(), 960);
        assert_eq!(g.update(980), KnobStep::Departed(980));
        assert_eq!(g.update(980), KnobStep::Hold);
    }
}
