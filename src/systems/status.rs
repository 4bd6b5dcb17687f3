//! Status line projection.
//!
//! Builds the one-line summary external debug displays show. It is computed
//! on demand from the world and never stored.
use bevy_ecs::prelude::*;

use crate::resources::signals::InputSignals;
use crate::resources::simclock::SimulationClock;
use crate::resources::worldgrid::WorldGrid;

/// Format the current status line.
///
/// The layout is informational and may change between releases:
/// `FPS: 60 | Time: 07 | Running: true | World Size: 8 | World Cells: 0 | Signal: Right`
pub fn status_line(world: &World) -> String {
    let (fps, frame, running) = world
        .get_resource::<SimulationClock>()
        .map(|clock| (clock.fps(), clock.frame(), clock.is_running()))
        .unwrap_or((0, 0, false));

    let (size, sample) = match world.get_resource::<WorldGrid>() {
        Some(grid) => (
            grid.size(),
            grid.get(0, 0)
                .map(|cell| cell.to_string())
                .unwrap_or_else(|_| "-".to_string()),
        ),
        None => (0, "-".to_string()),
    };

    let signals = world
        .get_resource::<InputSignals>()
        .map(|signals| signals.active_signals().join(", "))
        .unwrap_or_default();

    format!(
        "FPS: {fps} | Time: {frame:02} | Running: {running} | World Size: {size} | World Cells: {sample} | Signal: {signals}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for_empty_world() {
        let world = World::new();
        assert_eq!(
            status_line(&world),
            "FPS: 0 | Time: 00 | Running: false | World Size: 0 | World Cells: - | Signal: "
        );
    }

    #[test]
    fn test_status_reflects_state() {
        let mut world = World::new();
        let mut clock = SimulationClock::new(60).unwrap();
        clock.start(0.0);
        for i in 1..=7 {
            assert!(clock.tick(i as f64 * 20.0));
        }
        world.insert_resource(clock);
        let mut grid = WorldGrid::new(8).unwrap();
        grid.set(0, 0, -1).unwrap();
        world.insert_resource(grid);
        let mut signals = InputSignals::default();
        signals.set_signal("Up", true);
        signals.set_signal("Right", true);
        signals.set_signal("Left", false);
        world.insert_resource(signals);

        assert_eq!(
            status_line(&world),
            "FPS: 60 | Time: 07 | Running: true | World Size: 8 | World Cells: -1 | Signal: Right, Up"
        );
    }
}
