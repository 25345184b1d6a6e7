//! Empty-row system - backlog counts and forklift travel

use rand::Rng;

use super::random_walk;
use crate::components::EmptyBlock;
use crate::config::StepSizes;

/// One pass over every empty row. The forklift bounces inside its row band
/// and keeps its row's fixed y.
pub fn empty_blocks_system<R: Rng + ?Sized>(
    blocks: &mut [EmptyBlock],
    steps: &StepSizes,
    rng: &mut R,
) {
    for block in blocks.iter_mut() {
        random_walk(&mut block.containers_to_clean, steps.containers_to_clean, rng);
        random_walk(&mut block.repairing_containers, steps.repairing_containers, rng);
        random_walk(&mut block.forklift_x, steps.forklift_x, rng);
    }
}
