//! Crane system - periodic retargeting plus per-frame interpolation

use portwatch_logic::crane::{
    approach, next_gantry_target, GANTRY_RATE, TROLLEY_RANGE, TROLLEY_RATE,
};
use rand::Rng;

use super::uniform_in;
use crate::components::CraneGantry;

/// Advance every crane by `delta_seconds`.
///
/// A crane whose retarget timer runs out flips its gantry toward the other
/// container row, picks a new trolley spot, and draws its next timer from
/// `[retarget_min, retarget_max]`.
pub fn crane_system<R: Rng + ?Sized>(
    cranes: &mut [CraneGantry],
    delta_seconds: f32,
    retarget_min: f32,
    retarget_max: f32,
    rng: &mut R,
) {
    for crane in cranes.iter_mut() {
        crane.retarget_in -= delta_seconds;
        if crane.retarget_in <= 0.0 {
            crane.target_z = next_gantry_target(crane.gantry_z);
            crane.target_x = uniform_in(TROLLEY_RANGE.min, TROLLEY_RANGE.max, rng);
            crane.retarget_in = uniform_in(retarget_min, retarget_max, rng);
        }
        crane.gantry_z = approach(crane.gantry_z, crane.target_z, GANTRY_RATE, delta_seconds);
        crane.trolley_x = approach(crane.trolley_x, crane.target_x, TROLLEY_RATE, delta_seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portwatch_logic::crane::{GANTRY_FAR_ROW_Z, GANTRY_NEAR_ROW_Z};
    use portwatch_logic::layout::ZoneId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_retarget_sends_gantry_to_far_row() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut cranes = vec![CraneGantry::new(ZoneId::ALL[0], 0.5)];
        crane_system(&mut cranes, 1.0, 6.0, 10.0, &mut rng);
        let c = &cranes[0];
        assert_eq!(c.target_z, GANTRY_FAR_ROW_Z);
        assert!(c.gantry_z > GANTRY_NEAR_ROW_Z);
        assert!((6.0..=10.0).contains(&c.retarget_in));
        assert!(TROLLEY_RANGE.contains(c.target_x));
    }

    #[test]
    fn test_no_retarget_before_timer() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut cranes = vec![CraneGantry::new(ZoneId::ALL[1], 8.0)];
        crane_system(&mut cranes, 1.0, 6.0, 10.0, &mut rng);
        assert_eq!(cranes[0].target_z, GANTRY_NEAR_ROW_Z);
        assert_eq!(cranes[0].retarget_in, 7.0);
    }

    #[test]
    fn test_gantry_stays_between_rows() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut cranes: Vec<_> = ZoneId::ALL.iter().map(|&z| CraneGantry::new(z, 0.0)).collect();
        for _ in 0..2000 {
            crane_system(&mut cranes, 0.25, 6.0, 10.0, &mut rng);
            for c in &cranes {
                assert!((GANTRY_NEAR_ROW_Z..=GANTRY_FAR_ROW_Z).contains(&c.gantry_z));
                assert!(TROLLEY_RANGE.contains(c.trolley_x));
            }
        }
    }
}
