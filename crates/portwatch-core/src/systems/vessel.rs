//! Ship monitor point system

use rand::Rng;

use super::random_walk;
use crate::components::ShipMonitorPoint;
use crate::config::StepSizes;

pub fn ship_points_system<R: Rng + ?Sized>(
    points: &mut [ShipMonitorPoint],
    steps: &StepSizes,
    rng: &mut R,
) {
    for point in points.iter_mut() {
        random_walk(&mut point.status, steps.ship_status, rng);
    }
}
