use glam::Vec3;
use hecs::{Entity, World};
use rapier3d::prelude::{ColliderBuilder, RigidBodyBuilder};

use crate::{
    components::{
        AnchorPoint, Camera, GlobalTransform, Handedness, Info, LocalTransform, MotionController,
        Parent, StaticMesh,
    },
    contexts::{physics_context::PAWN_COLLISION_GROUP, PhysicsContext},
    VrPawnResult,
};

/// Half height of the cylindrical part of the pawn's body capsule
pub const BODY_HALF_HEIGHT: f32 = 0.6;
/// Radius of the pawn's body capsule
pub const BODY_RADIUS: f32 = 0.25;

/// What, if anything, is the pawn holding?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// Hands are empty
    #[default]
    Idle,
    /// The entity is attached to the left anchor and is not simulating physics
    Holding(Entity),
}

/// The player's avatar. Added to the pawn's root entity by [`add_pawn`].
///
/// The pawn doesn't own the things it holds: the entity in [`InteractionState::Holding`] is only borrowed until it
/// is released.
#[derive(Debug, Clone)]
pub struct Pawn {
    /// The player's view point
    pub camera: Entity,
    /// Tracks the left controller
    pub left_controller: Entity,
    /// Tracks the right controller
    pub right_controller: Entity,
    /// Visual anchor on the left hand
    pub left_anchor: Entity,
    /// Visual anchor on the right hand
    pub right_anchor: Entity,
    /// Current interaction state
    pub state: InteractionState,
}

impl Pawn {
    /// The entity currently being held, if any
    pub fn grabbed_entity(&self) -> Option<Entity> {
        match self.state {
            InteractionState::Idle => None,
            InteractionState::Holding(entity) => Some(entity),
        }
    }

    /// Is the pawn holding something?
    pub fn is_holding(&self) -> bool {
        self.grabbed_entity().is_some()
    }
}

/// Spawn the player's pawn at `position` and return its root entity.
///
/// The hierarchy looks like:
///
/// ```text
/// VR_Body (Pawn, kinematic capsule)
/// ├── VR_Camera
/// ├── L_MotionController
/// │   └── Anchor_Point_Left
/// └── R_MotionController
///     └── Anchor_Point_Right
/// ```
///
/// The body capsule lives in its own collision group so that the pawn's raycasts never hit the pawn.
pub fn add_pawn(
    world: &mut World,
    physics_context: &mut PhysicsContext,
    position: Vec3,
) -> VrPawnResult<Entity> {
    let local_transform = LocalTransform::from_translation(position);
    let root = world.spawn((
        Info::new("VR_Body"),
        local_transform,
        GlobalTransform::from(local_transform),
    ));

    let rigid_body = RigidBodyBuilder::kinematic_position_based()
        .translation(crate::util::na_vector_from_glam(position))
        .build();
    // The capsule sits on the floor, with the pawn's origin at its feet.
    let collider = ColliderBuilder::capsule_y(BODY_HALF_HEIGHT, BODY_RADIUS)
        .translation([0., BODY_HALF_HEIGHT + BODY_RADIUS, 0.].into())
        .build();
    let components = physics_context.create_rigid_body_and_collider(
        root,
        rigid_body,
        collider,
        PAWN_COLLISION_GROUP,
    );
    world.insert(root, components)?;

    let camera = world.spawn((
        Info::new("VR_Camera"),
        Camera {},
        Parent::new(root),
        GlobalTransform::default(),
    ));

    let (left_controller, left_anchor) = add_hand(world, root, Handedness::Left);
    let (right_controller, right_anchor) = add_hand(world, root, Handedness::Right);

    world.insert_one(
        root,
        Pawn {
            camera,
            left_controller,
            right_controller,
            left_anchor,
            right_anchor,
            state: InteractionState::Idle,
        },
    )?;

    Ok(root)
}

fn add_hand(world: &mut World, root: Entity, handedness: Handedness) -> (Entity, Entity) {
    let (controller_name, anchor_name) = match handedness {
        Handedness::Left => ("L_MotionController", "Anchor_Point_Left"),
        Handedness::Right => ("R_MotionController", "Anchor_Point_Right"),
    };

    let controller = world.spawn((
        Info::new(controller_name),
        MotionController { handedness },
        Parent::new(root),
        GlobalTransform::default(),
    ));
    let anchor = world.spawn((
        Info::new(anchor_name),
        AnchorPoint { handedness },
        StaticMesh::new(anchor_name),
        Parent::new(controller),
        GlobalTransform::default(),
    ));

    (controller, anchor)
}

/// Find the first pawn in the world
pub fn get_pawn_entity(world: &World) -> Option<Entity> {
    world
        .query::<&Pawn>()
        .iter()
        .next()
        .map(|(entity, _)| entity)
}
