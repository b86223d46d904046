//! Movement integration: step attackers toward their move orders.
//!
//! Orders are fire-and-forget. Whoever issued one observes completion on a
//! later tick by the order disappearing.

use hecs::{Entity, World};

use skirmish_core::components::{Heading, MoveOrder};
use skirmish_core::constants::{ARRIVAL_TOLERANCE, ATTACKER_SPEED};
use skirmish_core::types::Position;

/// Advance every unit with a move order by one tick of `dt_ms`.
pub fn run(world: &mut World, dt_ms: u64, arrived: &mut Vec<Entity>) {
    arrived.clear();
    let step = ATTACKER_SPEED * dt_ms as f64 / 1000.0;

    for (entity, (pos, order, heading)) in
        world.query_mut::<(&mut Position, &MoveOrder, Option<&mut Heading>)>()
    {
        let current = pos.as_dvec3();
        let offset = order.destination.as_dvec3() - current;
        let remaining = offset.length();

        if remaining <= step.max(ARRIVAL_TOLERANCE) {
            *pos = order.destination;
            arrived.push(entity);
            continue;
        }

        if let Some(heading) = heading {
            heading.0 = pos.bearing_to(&order.destination);
        }
        *pos = Position::from(current + offset.normalize_or_zero() * step);
    }

    for entity in arrived.drain(..) {
        let _ = world.remove_one::<MoveOrder>(entity);
    }
}
