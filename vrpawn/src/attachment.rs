use glam::Affine3A;
use hecs::{Entity, World};

use crate::{
    components::{GlobalTransform, LocalTransform, Parent},
    VrPawnResult,
};

/// Where should a child end up when it's attached to a parent?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentRule {
    /// Move the child on top of the parent
    SnapToTarget,
    /// Leave the child where it is in the world, and follow the parent from there on
    KeepWorld,
    /// Treat the child's current [`LocalTransform`] as its offset from the parent
    KeepRelative,
}

/// Where should a child end up when it's detached from its parent?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetachmentRule {
    /// Leave the child where it is in the world
    KeepWorld,
    /// Use the child's offset from its parent as its new position in the world
    KeepRelative,
}

/// Attach `child` to `parent`, so that it moves with the parent from now on.
///
/// The child's [`GlobalTransform`] is updated straight away; the rest of the hierarchy catches up the next time
/// [`crate::systems::update_global_transform_system`] runs.
pub fn attach(
    world: &mut World,
    child: Entity,
    parent: Entity,
    rule: AttachmentRule,
) -> VrPawnResult<()> {
    let global_from_parent = world.get::<&GlobalTransform>(parent)?.0;
    let global_from_child = world.get::<&GlobalTransform>(child)?.0;

    let parent_from_child = match rule {
        AttachmentRule::SnapToTarget => Affine3A::IDENTITY,
        AttachmentRule::KeepWorld => global_from_parent.inverse() * global_from_child,
        AttachmentRule::KeepRelative => world
            .get::<&LocalTransform>(child)
            .map(|l| l.to_affine())
            .unwrap_or(Affine3A::IDENTITY),
    };

    world.insert_one(
        child,
        Parent {
            entity: parent,
            from_child: parent_from_child,
        },
    )?;
    world.get::<&mut GlobalTransform>(child)?.0 = global_from_parent * parent_from_child;

    Ok(())
}

/// Detach `child` from its parent. Detaching an entity that has no parent does nothing.
pub fn detach(world: &mut World, child: Entity, rule: DetachmentRule) -> VrPawnResult<()> {
    let Ok(parent) = world.remove_one::<Parent>(child) else {
        return Ok(());
    };

    let global_from_child = match rule {
        DetachmentRule::KeepWorld => world.get::<&GlobalTransform>(child)?.0,
        DetachmentRule::KeepRelative => parent.from_child,
    };

    let has_local_transform = world
        .get::<&mut LocalTransform>(child)
        .map(|mut l| l.update_from_affine(&global_from_child))
        .is_ok();
    if !has_local_transform {
        let mut local_transform = LocalTransform::default();
        local_transform.update_from_affine(&global_from_child);
        world.insert_one(child, local_transform)?;
    }
    world.get::<&mut GlobalTransform>(child)?.0 = global_from_child;

    Ok(())
}
