//! Zone metrics system - utilization, waiting time, plug status, crane marker

use rand::Rng;

use super::random_walk;
use crate::components::ZoneMetric;
use crate::config::StepSizes;

/// One random-walk pass over every zone record
pub fn zone_metrics_system<R: Rng + ?Sized>(
    zones: &mut [ZoneMetric],
    steps: &StepSizes,
    rng: &mut R,
) {
    for zone in zones.iter_mut() {
        random_walk(&mut zone.utilization, steps.utilization, rng);
        random_walk(&mut zone.waiting_time, steps.waiting_time, rng);
        random_walk(&mut zone.plug_status, steps.plug_status, rng);
        random_walk(&mut zone.crane_position, steps.crane_position, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portwatch_logic::layout::ZoneId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pinned_zone_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut zones = vec![ZoneMetric::new(ZoneId::ALL[0], 100.0, 40.0, 0.0, 450.0)];
        let steps = StepSizes::default();
        for _ in 0..500 {
            zone_metrics_system(&mut zones, &steps, &mut rng);
            let z = &zones[0];
            assert!((0.0..=100.0).contains(&z.utilization.value()));
            assert!((0.0..=40.0).contains(&z.waiting_time.value()));
            assert!((0.0..=100.0).contains(&z.plug_status.value()));
            assert!((50.0..=450.0).contains(&z.crane_position.value()));
        }
    }
}
