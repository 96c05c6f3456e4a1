use hecs::{Entity, World};
use log::{debug, trace, warn};

use crate::{
    attachment::{attach, detach, AttachmentRule, DetachmentRule},
    components::{
        pawn::get_pawn_entity, GlobalTransform, Interaction, InteractionState, LocalTransform,
        Parent, Pawn, Tags,
    },
    config::PawnConfig,
    contexts::{InputContext, PhysicsContext, RaycastHit},
    util::origin_and_forward,
    Engine, VrPawnResult, DRAWER_TAG, PICKABLE_TAG,
};

/// What happened when the pawn tried to grab or release something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// The ray didn't hit anything. Nothing changed.
    Missed,
    /// The entity was picked up and is now attached to the left hand
    Grabbed(Entity),
    /// The held entity was let go and is simulating physics again
    Released(Entity),
    /// The entity was interacted with, eg. a drawer was opened or closed
    Interacted(Entity),
    /// The ray hit the entity, but there was nothing to do with it
    Ignored(Entity),
}

/// Grabbing system
/// When the grab action fires, picks up whatever the left hand is pointing at, or lets go of whatever it's holding.
pub fn grabbing_system(engine: &mut Engine) -> Option<InteractionOutcome> {
    grabbing_system_inner(
        &mut engine.world,
        &engine.input_context,
        &mut engine.physics_context,
        &engine.config,
    )
}

pub fn grabbing_system_inner(
    world: &mut World,
    input_context: &InputContext,
    physics_context: &mut PhysicsContext,
    config: &PawnConfig,
) -> Option<InteractionOutcome> {
    if !input_context.action_fired(&config.bindings.grab) {
        return None;
    }

    let pawn_entity = get_pawn_entity(world)?;
    match grab_or_release(
        world,
        physics_context,
        pawn_entity,
        config.grab_distance,
        config.release_only_held,
    ) {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            warn!("Unable to grab or release with {pawn_entity:?}: {e:?}");
            None
        }
    }
}

/// Cast a ray `distance` long from the pawn's left anchor along the direction it's pointing, then:
///
/// - if the pawn's hands are empty and the ray hit a [`PICKABLE_TAG`] entity that is simulating physics, pick it up
/// - if the pawn's hands are empty and the ray hit a [`DRAWER_TAG`] entity, interact with the closest
///   [`Interaction`] at or above it in the hierarchy
/// - if the pawn is holding something, let it go
///
/// By default anything the ray hits releases the held entity, including the held entity itself (which is sitting
/// right on top of the anchor). Pass `release_only_held` to only release when the held entity is hit.
///
/// A miss changes nothing, whatever state the pawn is in.
pub fn grab_or_release(
    world: &mut World,
    physics_context: &mut PhysicsContext,
    pawn_entity: Entity,
    distance: f32,
    release_only_held: bool,
) -> VrPawnResult<InteractionOutcome> {
    let pawn = (*world.get::<&Pawn>(pawn_entity)?).clone();
    let global_from_anchor = world.get::<&GlobalTransform>(pawn.left_anchor)?.0;
    let (origin, forward) = origin_and_forward(&global_from_anchor);

    let Some(hit) = physics_context.cast_ray(origin, forward, distance) else {
        trace!("Grab ray from {origin:?} along {forward:?} hit nothing");
        return Ok(InteractionOutcome::Missed);
    };

    match pawn.state {
        InteractionState::Idle => {
            grab_or_interact(world, physics_context, pawn_entity, &pawn, &hit)
        }
        InteractionState::Holding(held) => {
            if release_only_held && hit.entity != held {
                return Ok(InteractionOutcome::Ignored(hit.entity));
            }
            release(world, physics_context, pawn_entity, held)?;
            Ok(InteractionOutcome::Released(held))
        }
    }
}

fn grab_or_interact(
    world: &mut World,
    physics_context: &mut PhysicsContext,
    pawn_entity: Entity,
    pawn: &Pawn,
    hit: &RaycastHit,
) -> VrPawnResult<InteractionOutcome> {
    let tags = world
        .get::<&Tags>(hit.entity)
        .map(|t| (*t).clone())
        .unwrap_or_default();

    if tags.has(PICKABLE_TAG) {
        // Only free-floating objects can be picked up.
        let is_simulating = physics_context
            .is_simulating_physics(world, hit.entity)
            .unwrap_or(false);
        if !is_simulating {
            trace!("{:?} is pickable, but isn't simulating physics", hit.entity);
            return Ok(InteractionOutcome::Ignored(hit.entity));
        }

        attach(world, hit.entity, pawn.left_anchor, AttachmentRule::SnapToTarget)?;
        physics_context.set_simulate_physics(world, hit.entity, false)?;
        world.get::<&mut Pawn>(pawn_entity)?.state = InteractionState::Holding(hit.entity);

        debug!("{pawn_entity:?} grabbed {:?}", hit.entity);
        return Ok(InteractionOutcome::Grabbed(hit.entity));
    }

    if tags.has(DRAWER_TAG) {
        let Some(owner) = find_interaction_owner(world, hit.entity) else {
            warn!(
                "{:?} is tagged as a drawer, but nothing above it can be interacted with",
                hit.entity
            );
            return Ok(InteractionOutcome::Ignored(hit.entity));
        };

        let (interaction, local_transform) =
            world.query_one_mut::<(&mut Interaction, &mut LocalTransform)>(owner)?;
        interaction.0.on_interaction_hit(local_transform, hit);

        debug!("{pawn_entity:?} interacted with {owner:?}");
        return Ok(InteractionOutcome::Interacted(owner));
    }

    Ok(InteractionOutcome::Ignored(hit.entity))
}

/// Let go of `held`: it's detached from the pawn where it is now, and starts simulating physics again.
///
/// The pawn's state is cleared first, so that it never refers to an entity it isn't holding.
pub fn release(
    world: &mut World,
    physics_context: &mut PhysicsContext,
    pawn_entity: Entity,
    held: Entity,
) -> VrPawnResult<()> {
    world.get::<&mut Pawn>(pawn_entity)?.state = InteractionState::Idle;

    detach(world, held, DetachmentRule::KeepWorld)?;
    let position = world.get::<&GlobalTransform>(held)?.to_isometry();
    physics_context
        .get_rigid_body(world, held)?
        .set_position(position, true);
    physics_context.set_simulate_physics(world, held, true)?;

    debug!("{pawn_entity:?} released {held:?}");
    Ok(())
}

fn find_interaction_owner(world: &World, entity: Entity) -> Option<Entity> {
    let mut current = entity;
    loop {
        if world.get::<&Interaction>(current).is_ok() {
            return Some(current);
        }
        current = world.get::<&Parent>(current).ok()?.entity;
    }
}
