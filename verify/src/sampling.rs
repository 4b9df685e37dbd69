// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Seeded accuracy sampling against `f64` references.

use serde::Serialize;
use valori_fixed::sampling::{Domain, Pcg32, DOMAINS};
use valori_fixed::Tier;

use crate::catalogue::{reference, Catalogue};

#[derive(Debug, Clone, Serialize)]
pub struct AccuracyRow {
    pub width: &'static str,
    pub function: &'static str,
    pub tier: &'static str,
    pub samples: usize,
    pub max_abs_error: f64,
    pub max_rel_error: f64,
}

/// Samples one function for one width and tier.
pub fn measure<V: Catalogue, T: Tier>(domain: &Domain, samples: usize, seed: u64) -> AccuracyRow {
    let bounds = V::bounds(domain);
    let (lo_range, hi_range) = V::range();
    let mut rng = Pcg32::new(domain.seed(seed));
    let mut max_abs = 0.0f64;
    let mut max_rel = 0.0f64;
    let mut taken = 0;
    let mut args = Vec::with_capacity(bounds.len());
    let mut real = Vec::with_capacity(bounds.len());

    for _ in 0..samples {
        args.clear();
        real.clear();
        for &(lo, hi) in bounds {
            let v = V::from_scaled(rng.uniform((lo * V::SCALE) as i64, (hi * V::SCALE) as i64));
            args.push(v);
            real.push(v.to_f64());
        }
        let (Some(got), Some(want)) = (
            V::call::<T>(domain.function, &args),
            reference(domain.function, &real),
        ) else {
            continue;
        };
        if !want.is_finite() {
            continue;
        }
        // Saturating functions are compared against the clamped reference.
        let want = want.clamp(lo_range, hi_range);
        let abs = (got.to_f64() - want).abs();
        max_abs = max_abs.max(abs);
        if want != 0.0 {
            max_rel = max_rel.max(abs / want.abs());
        }
        taken += 1;
    }

    tracing::debug!(
        width = V::WIDTH,
        function = domain.function,
        tier = T::NAME,
        max_abs,
        "sampled"
    );
    AccuracyRow {
        width: V::WIDTH,
        function: domain.function,
        tier: T::NAME,
        samples: taken,
        max_abs_error: max_abs,
        max_rel_error: max_rel,
    }
}

/// Every domain for every width at tier `T`.
pub fn measure_all<T: Tier>(samples: usize, seed: u64) -> Vec<AccuracyRow> {
    use valori_fixed::{Fixed32, Fixed48, Fixed64};

    let mut rows = Vec::with_capacity(DOMAINS.len() * 3);
    for domain in DOMAINS {
        rows.push(measure::<Fixed32, T>(domain, samples, seed));
        rows.push(measure::<Fixed64, T>(domain, samples, seed));
        rows.push(measure::<Fixed48, T>(domain, samples, seed));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use valori_fixed::sampling::lookup;
    use valori_fixed::{Fixed32, Fixed48, Fixed64, Precise};

    #[test]
    fn every_domain_names_a_sampled_function() {
        for domain in DOMAINS {
            let arity = crate::catalogue::arity(domain.function);
            assert_eq!(arity, Some(domain.fixed64.len()), "{}", domain.function);
        }
    }

    #[test]
    fn precise_rows_are_tight() {
        let Some(sqrt) = lookup("sqrt") else {
            panic!("sqrt has a domain");
        };
        let row = measure::<Fixed64, Precise>(sqrt, 500, 1);
        assert_eq!(row.samples, 500);
        assert!(row.max_rel_error < 1e-6);
        let row = measure::<Fixed32, Precise>(sqrt, 500, 1);
        assert!(row.max_abs_error < 1e-3);
    }

    #[test]
    fn packed_exp_saturates_into_the_clamped_reference() {
        let Some(exp) = lookup("exp") else {
            panic!("exp has a domain");
        };
        let row = measure::<Fixed48, Precise>(exp, 2_000, 5);
        assert_eq!(row.samples, 2_000);
        // Unclamped packing would be off by thousands near e^16.
        assert!(row.max_abs_error < 0.05, "{row:?}");
    }
}
