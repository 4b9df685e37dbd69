// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Seeded sampling plan for accuracy measurement.
//!
//! The accuracy tests and the `valori-fixed-verify accuracy` report draw
//! their inputs from this table with this generator, so both look at the
//! same domains.

/// PCG32 with a fixed increment.
pub struct Pcg32 {
    state: u64,
    inc: u64,
}

impl Pcg32 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed, inc: 1 }
    }

    pub fn next_u32(&mut self) -> u32 {
        let oldstate = self.state;
        self.state = oldstate.wrapping_mul(6364136223846793005).wrapping_add(self.inc);
        let xorshifted = (((oldstate >> 18) ^ oldstate) >> 27) as u32;
        let rot = (oldstate >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    pub fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    /// Uniform raw word in `[lo, hi)`.
    pub fn uniform(&mut self, lo: i64, hi: i64) -> i64 {
        let span = (hi as i128 - lo as i128) as u128;
        (lo as i128 + ((self.next_u64() as u128 * span) >> 64) as i128) as i64
    }
}

/// Sampling domain of one function per width, in real units. One interval
/// per argument.
pub struct Domain {
    pub function: &'static str,
    pub fixed32: &'static [(f64, f64)],
    /// Reaches past the packed range for the saturating functions.
    pub fixed48: &'static [(f64, f64)],
    pub fixed64: &'static [(f64, f64)],
}

impl Domain {
    /// Seed for this function's stream.
    pub fn seed(&self, base: u64) -> u64 {
        base ^ self.function.len() as u64
    }
}

const fn domain(
    function: &'static str,
    narrow: &'static [(f64, f64)],
    wide: &'static [(f64, f64)],
) -> Domain {
    Domain { function, fixed32: narrow, fixed48: narrow, fixed64: wide }
}

const fn saturating(
    function: &'static str,
    narrow: &'static [(f64, f64)],
    packed: &'static [(f64, f64)],
    wide: &'static [(f64, f64)],
) -> Domain {
    Domain { function, fixed32: narrow, fixed48: packed, fixed64: wide }
}

pub const DOMAINS: &[Domain] = &[
    domain("sqrt", &[(0.0, 32767.0)], &[(0.0, 2.0e9)]),
    domain("rsqrt", &[(1.0 / 256.0, 32767.0)], &[(1.0 / 256.0, 2.0e9)]),
    domain("rcp", &[(1.0 / 16.0, 1000.0)], &[(1.0 / 16.0, 1000.0)]),
    saturating("exp", &[(-10.0, 10.3)], &[(-20.0, 16.0)], &[(-20.0, 21.4)]),
    saturating("exp2", &[(-16.0, 14.9)], &[(-32.0, 24.0)], &[(-32.0, 30.9)]),
    domain("log", &[(1.0 / 65536.0, 32767.0)], &[(1.0 / 4_294_967_296.0, 2.0e9)]),
    domain("log2", &[(1.0 / 65536.0, 32767.0)], &[(1.0 / 4_294_967_296.0, 2.0e9)]),
    domain("log10", &[(1.0 / 65536.0, 32767.0)], &[(1.0 / 4_294_967_296.0, 2.0e9)]),
    domain("sin", &[(-1000.0, 1000.0)], &[(-1.0e6, 1.0e6)]),
    domain("cos", &[(-1000.0, 1000.0)], &[(-1.0e6, 1.0e6)]),
    domain("tan", &[(-1.4, 1.4)], &[(-1.4, 1.4)]),
    domain("atan", &[(-50.0, 50.0)], &[(-50.0, 50.0)]),
    domain("asin", &[(-1.0, 1.0)], &[(-1.0, 1.0)]),
    domain("acos", &[(-1.0, 1.0)], &[(-1.0, 1.0)]),
    domain(
        "div",
        &[(-2048.0, 2048.0), (0.125, 32767.0)],
        &[(-1.0e8, 1.0e8), (0.125, 2.0e9)],
    ),
    domain(
        "atan2",
        &[(-32767.0, 32767.0), (-32767.0, 32767.0)],
        &[(-2.0e9, 2.0e9), (-2.0e9, 2.0e9)],
    ),
    saturating(
        "pow",
        &[(0.01, 100.0), (-2.0, 2.0)],
        &[(0.01, 100.0), (-2.0, 4.0)],
        &[(0.01, 100.0), (-2.0, 2.0)],
    ),
];

/// Looks up the domain of `function`.
pub fn lookup(function: &str) -> Option<&'static Domain> {
    DOMAINS.iter().find(|d| d.function == function)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_stays_in_range() {
        let mut rng = Pcg32::new(3);
        for _ in 0..1000 {
            let v = rng.uniform(-5, 7);
            assert!((-5..7).contains(&v));
        }
        let v = rng.uniform(i64::MIN, i64::MAX);
        assert!(v < i64::MAX);
    }

    #[test]
    fn every_width_has_one_interval_per_argument() {
        for d in DOMAINS {
            assert_eq!(d.fixed32.len(), d.fixed64.len(), "{}", d.function);
            assert_eq!(d.fixed48.len(), d.fixed64.len(), "{}", d.function);
            for &(lo, hi) in d.fixed32.iter().chain(d.fixed48).chain(d.fixed64) {
                assert!(lo < hi, "{}", d.function);
            }
        }
    }

    #[test]
    fn packed_domains_cross_the_packed_range() {
        // 2^15 is the packed limit.
        let ln_limit = 15.0 * core::f64::consts::LN_2;
        assert!(lookup("exp").is_some_and(|d| d.fixed48[0].1 > ln_limit));
        assert!(lookup("exp2").is_some_and(|d| d.fixed48[0].1 > 15.0));
        // log2(100) > 6.6
        assert!(lookup("pow").is_some_and(|d| d.fixed48[0].1 >= 100.0 && d.fixed48[1].1 * 6.6 > 15.0));
        assert!(lookup("nope").is_none());
    }
}
