#![allow(dead_code)]

use bevy_ecs::prelude::World;
use bevy_ecs::schedule::Schedule;
use dispatch_core::runner::{dispatch_schedule, run_ticks, run_ticks_with_hook};

/// Helper that owns a reusable `Schedule` so tests can step or drain the dispatch loop.
pub struct ScheduleRunner {
    schedule: Schedule,
}

impl Default for ScheduleRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleRunner {
    pub fn new() -> Self {
        Self {
            schedule: dispatch_schedule(),
        }
    }

    /// Run exactly one tick, whether or not any request is active.
    pub fn tick(&mut self, world: &mut World) {
        self.schedule.run(world);
    }

    /// Run ticks until no request is active or `max_ticks` is hit.
    pub fn run_until_settled(&mut self, world: &mut World, max_ticks: usize) -> usize {
        run_ticks(world, &mut self.schedule, max_ticks)
    }

    pub fn run_with_hook<F>(&mut self, world: &mut World, max_ticks: usize, hook: F) -> usize
    where
        F: FnMut(&World, usize),
    {
        run_ticks_with_hook(world, &mut self.schedule, max_ticks, hook)
    }
}
