use glam::Vec3;
use hecs::{Entity, World};
use log::trace;
use rapier3d::na::Vector3;
use rapier3d::prelude::*;

use crate::{
    components::{Collider as ColliderComponent, RigidBody as RigidBodyComponent},
    util::{entity_from_user_data, entity_to_user_data, glam_vec_from_na, na_vector_from_glam},
    VrPawnError, VrPawnResult,
};

pub const DEFAULT_COLLISION_GROUP: u32 = 0b001;
pub const PAWN_COLLISION_GROUP: u32 = 0b010;
pub const SENSOR_COLLISION_GROUP: u32 = 0b100;

/// The result of a successful raycast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// The entity that owns the collider that was hit
    pub entity: Entity,
    /// Where the ray hit, in global space
    pub point: Vec3,
    /// How far along the ray the hit was
    pub distance: f32,
}

pub struct PhysicsContext {
    pub physics_pipeline: PhysicsPipeline,
    pub gravity: Vector3<f32>,
    pub query_pipeline: QueryPipeline,
    pub colliders: ColliderSet,
    pub broad_phase: BroadPhase,
    pub narrow_phase: NarrowPhase,
    pub rigid_bodies: RigidBodySet,
    pub island_manager: IslandManager,
    pub integration_parameters: IntegrationParameters,
    pub impulse_joints: ImpulseJointSet,
    pub multibody_joints: MultibodyJointSet,
    pub ccd_solver: CCDSolver,
}

impl Default for PhysicsContext {
    fn default() -> Self {
        let gravity: Vector3<f32> = vector![0.0, 0.0, 0.0];
        let mut integration_parameters = IntegrationParameters::default();

        // TODO: Take the tick rate from `PawnConfig` rather than assuming the Quest 2's 72Hz.
        integration_parameters.dt = 1. / 72.;

        PhysicsContext {
            physics_pipeline: PhysicsPipeline::new(),
            gravity,
            query_pipeline: QueryPipeline::new(),
            colliders: ColliderSet::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            rigid_bodies: RigidBodySet::new(),
            island_manager: IslandManager::new(),
            integration_parameters,
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }
}

impl PhysicsContext {
    /// Create a physics context with the given gravity
    pub fn with_gravity(gravity: Vec3) -> Self {
        Self {
            gravity: na_vector_from_glam(gravity),
            ..Default::default()
        }
    }

    /// Step the simulation, and bring the query pipeline up to date so raycasts see the new positions.
    pub fn update(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    /// Add a rigid body and a collider attached to it, returning the components that should be added to `entity`.
    ///
    /// The collider is a member of `collision_group` and will interact with every group.
    pub fn create_rigid_body_and_collider(
        &mut self,
        entity: Entity,
        rigid_body: RigidBody,
        mut collider: Collider,
        collision_group: u32,
    ) -> (RigidBodyComponent, ColliderComponent) {
        collider.user_data = entity_to_user_data(entity);
        collider.set_collision_groups(InteractionGroups::new(
            Group::from_bits_truncate(collision_group),
            Group::ALL,
        ));

        let rigid_body_handle = self.rigid_bodies.insert(rigid_body);
        let collider_handle =
            self.colliders
                .insert_with_parent(collider, rigid_body_handle, &mut self.rigid_bodies);

        (
            RigidBodyComponent {
                handle: rigid_body_handle,
            },
            ColliderComponent::new(collider_handle),
        )
    }

    /// Add a kinematic sensor that overlaps with everything, returning the components that should be added to `entity`.
    pub fn create_sensor(
        &mut self,
        entity: Entity,
        shape: SharedShape,
    ) -> (RigidBodyComponent, ColliderComponent) {
        let rigid_body = RigidBodyBuilder::kinematic_position_based().build();
        let collider = ColliderBuilder::new(shape)
            .sensor(true)
            .active_collision_types(ActiveCollisionTypes::all())
            .build();
        let (rigid_body, collider) = self.create_rigid_body_and_collider(
            entity,
            rigid_body,
            collider,
            SENSOR_COLLISION_GROUP,
        );

        // Sensors should "overlap all", not just the default group.
        if let Some(c) = self.colliders.get_mut(collider.handle) {
            c.set_collision_groups(InteractionGroups::all());
        }

        (rigid_body, collider)
    }

    pub fn get_rigid_body<'a>(
        &'a mut self,
        world: &World,
        entity: Entity,
    ) -> VrPawnResult<&'a mut RigidBody> {
        let rigid_body_handle = world.get::<&RigidBodyComponent>(entity)?.handle;
        self.rigid_bodies
            .get_mut(rigid_body_handle)
            .ok_or(VrPawnError::MissingRigidBody(entity))
    }

    /// Is this entity's rigid body being moved by the physics simulation?
    pub fn is_simulating_physics(&mut self, world: &World, entity: Entity) -> VrPawnResult<bool> {
        Ok(self.get_rigid_body(world, entity)?.is_dynamic())
    }

    /// Hand an entity over to the physics simulation (`simulate == true`), or take it back so the game can move it.
    ///
    /// Bodies that start simulating again do so from rest.
    pub fn set_simulate_physics(
        &mut self,
        world: &World,
        entity: Entity,
        simulate: bool,
    ) -> VrPawnResult<()> {
        let rigid_body = self.get_rigid_body(world, entity)?;
        if simulate {
            rigid_body.set_body_type(RigidBodyType::Dynamic, true);
            rigid_body.set_linvel(Vector3::zeros(), true);
            rigid_body.set_angvel(Vector3::zeros(), true);
        } else {
            rigid_body.set_body_type(RigidBodyType::KinematicPositionBased, true);
        }
        Ok(())
    }

    /// Cast a ray from `origin` along `direction` for at most `max_distance`, returning the first solid thing it hits.
    ///
    /// Sensors and the pawn's own colliders are ignored. A miss is a perfectly normal outcome and returns `None`.
    pub fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RaycastHit> {
        let direction = direction.try_normalize()?;
        let ray = Ray::new(
            point![origin.x, origin.y, origin.z],
            na_vector_from_glam(direction),
        );
        let filter = QueryFilter::new().exclude_sensors().groups(InteractionGroups::new(
            Group::ALL,
            Group::from_bits_truncate(!PAWN_COLLISION_GROUP),
        ));

        let (handle, toi) = self.query_pipeline.cast_ray(
            &self.rigid_bodies,
            &self.colliders,
            &ray,
            max_distance,
            true,
            filter,
        )?;

        let collider = self.colliders.get(handle)?;
        let Some(entity) = entity_from_user_data(collider.user_data) else {
            trace!("Ray hit collider {handle:?}, which does not belong to an entity");
            return None;
        };

        Some(RaycastHit {
            entity,
            point: glam_vec_from_na(&ray.point_at(toi).coords),
            distance: toi,
        })
    }
}
