//! Transient cue timers: the per-target hit flash and the
//! HEADSHOT!/BODYSHOT feedback text.

use hecs::World;

use deadshot_core::components::TargetStatus;
use deadshot_core::constants::DT;

use crate::spawner::HitFeedback;

/// Count down flash and feedback timers for one tick.
pub fn run(world: &mut World, hit_feedback: &mut Option<HitFeedback>) {
    for (_entity, status) in world.query_mut::<&mut TargetStatus>() {
        if status.flash_remaining_secs > 0.0 {
            status.flash_remaining_secs = (status.flash_remaining_secs - DT).max(0.0);
        }
    }

    if let Some(feedback) = hit_feedback {
        feedback.remaining_secs -= DT;
        if feedback.remaining_secs <= 0.0 {
            *hit_feedback = None;
        }
    }
}
