//! Pseudo-random action selection

/// Uniform integers for picking the next action
pub trait RandomSource {
    /// Value in `0..bound`, `bound` is never zero
    fn next_below(&mut self, bound: u32) -> u32;
}

/// Xorshift32, small enough for an 8-bit part
#[derive(Copy, Clone, Debug)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub const fn new(seed: u32) -> Self {
        // Zero is a fixed point of the generator
        Self {
            state: if seed == 0 { 0xA5A5_5A5A } else { seed },
        }
    }

    /// Folds a series of noisy ADC samples into a seed
    ///
    /// Only the low bits of a floating input carry any noise.
    pub fn from_noise<I: IntoIterator<Item = u16>>(samples: I) -> Self {
        let seed = samples
            .into_iter()
            .fold(0x811C_9DC5u32, |acc, s| (acc ^ u32::from(s & 0x0F)).wrapping_mul(0x0100_0193));
        Self::new(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl RandomSource for XorShift32 {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seed_still_moves() {
        let mut rng = XorShift32::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = XorShift32::new(1234);
        let mut b = XorShift32::new(1234);
        for _ in 0..32 {
            assert_eq!(a.next_below(3), b.next_below(3));
        }
    }

    #[test]
    fn covers_every_value_below_bound() {
        let mut rng = XorShift32::new(42);
        let mut seen = [0u32; 3];
        for _ in 0..3000 {
            seen[rng.next_below(3) as usize] += 1;
        }
        assert!(seen.iter().all(|&n| n > 800), "{:?}", seen);
    }

    #[test]
    fn noise_changes_the_seed() {
        let mut quiet = XorShift32::from_noise([512u16; 8]);
        let mut noisy = XorShift32::from_noise([512u16, 513, 515, 510, 512, 514, 511, 509]);
        assert_ne!(quiet.next_u32(), noisy.next_u32());
    }
}
