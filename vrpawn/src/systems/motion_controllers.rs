use hecs::World;

use crate::{
    components::{Camera, MotionController, Parent},
    contexts::InputContext,
    Engine,
};

/// Motion controllers system
/// Copies the tracked poses of the player's headset and controllers onto the pawn's camera and hands.
///
/// Poses arrive in stage space, and the camera and controllers are parented to the pawn's root, so moving
/// the root (eg. by teleporting) moves the player's whole frame of reference.
pub fn motion_controllers_system(engine: &mut Engine) {
    let world = &mut engine.world;
    let input_context = &engine.input_context;
    motion_controllers_system_inner(world, input_context);
}

pub fn motion_controllers_system_inner(world: &mut World, input_context: &InputContext) {
    for (_, (controller, parent)) in world.query_mut::<(&MotionController, &mut Parent)>() {
        parent.from_child = input_context
            .controller(controller.handedness)
            .stage_from_grip();
    }

    for (_, parent) in world.query_mut::<&mut Parent>().with::<&Camera>() {
        parent.from_child = input_context.stage_from_head();
    }
}
