use aqi_core::{
    AQI_BREAKPOINTS, Breakpoint, CATEGORIES, Pollutant, TIER_COUNT, aqi_for_pollutant, category_for_aqi,
    tier_for_aqi,
};
use proptest::prelude::*;

/// Point at fraction `t` of the range, clamped so rounding never leaves it.
fn point(bp: Breakpoint, t: f64) -> f64 {
    (bp.low + t * (bp.high - bp.low)).clamp(bp.low, bp.high)
}

fn tier_and_fraction() -> impl Strategy<Value = (Pollutant, usize, f64)> {
    (
        prop::sample::select(Pollutant::ALL.to_vec()),
        0..TIER_COUNT,
        0.0f64..=1.0,
    )
}

proptest! {
    #[test]
    fn aqi_stays_inside_tier_band((pollutant, tier, t) in tier_and_fraction()) {
        let bp = pollutant.table().concentrations()[tier];
        let concentration = point(bp, t);
        let aqi = aqi_for_pollutant(pollutant, concentration).unwrap();
        prop_assert!(AQI_BREAKPOINTS[tier].contains(aqi));
    }

    #[test]
    fn category_inverts_index((pollutant, tier, t) in tier_and_fraction()) {
        let bp = pollutant.table().concentrations()[tier];
        let concentration = point(bp, t);
        let aqi = aqi_for_pollutant(pollutant, concentration).unwrap();
        prop_assert_eq!(tier_for_aqi(aqi), Some(tier));
        prop_assert_eq!(category_for_aqi(aqi).unwrap(), CATEGORIES[tier]);
    }

    #[test]
    fn monotonic_within_tier((pollutant, tier, t) in tier_and_fraction(), u in 0.0f64..=1.0) {
        let bp = pollutant.table().concentrations()[tier];
        let (lo, hi) = if t <= u { (t, u) } else { (u, t) };
        let a = aqi_for_pollutant(pollutant, point(bp, lo)).unwrap();
        let b = aqi_for_pollutant(pollutant, point(bp, hi)).unwrap();
        prop_assert!(a <= b);
    }

    #[test]
    fn negative_concentrations_are_beyond_scale(c in -1.0e6f64..-1.0e-9) {
        for pollutant in Pollutant::ALL {
            prop_assert!(aqi_for_pollutant(pollutant, c).is_err());
        }
    }

    #[test]
    fn values_above_table_are_beyond_scale(excess in 1.0e-6f64..1.0e6) {
        for pollutant in Pollutant::ALL {
            let max = pollutant.table().max();
            prop_assert!(aqi_for_pollutant(pollutant, max + excess).is_err());
        }
    }
}
