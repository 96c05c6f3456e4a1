use glam::Vec3;
use log::{debug, info};

use crate::{
    components::pawn::add_pawn,
    config::PawnConfig,
    contexts::{InputContext, InputSample, PhysicsContext},
    systems::{
        collision_system, grabbing_system, held_object_system, motion_controllers_system,
        physics_system, teleport_system, update_global_transform_system,
        update_global_transform_with_parent_system, InteractionOutcome,
    },
    VrPawnResult,
};

/// Builder for `Engine`.
#[derive(Default)]
pub struct EngineBuilder {
    config: Option<PawnConfig>,
}

impl EngineBuilder {
    /// Create an `EngineBuilder`
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the pawn's config. If this isn't called, [`PawnConfig::default`] is used.
    pub fn config(&mut self, config: PawnConfig) -> &mut Self {
        self.config = Some(config);
        self
    }

    /// Build the `Engine`, spawning the player's pawn at the configured spawn position.
    pub fn build(&self) -> VrPawnResult<Engine> {
        let config = self.config.clone().unwrap_or_default();

        let mut world = hecs::World::default();
        let mut physics_context = PhysicsContext::with_gravity(config.gravity);
        let pawn_entity = add_pawn(&mut world, &mut physics_context, config.spawn_position)?;
        info!(
            "Spawned pawn {pawn_entity:?} at {:?}",
            config.spawn_position
        );

        Ok(Engine {
            world,
            physics_context,
            input_context: Default::default(),
            config,
            pawn_entity,
            tick: 0,
        })
    }
}

/// The vrpawn Engine
/// Owns the world and everything the systems need to run against it.
/// **IMPORTANT**: make sure you call `update` each tick
pub struct Engine {
    /// World
    pub world: hecs::World,
    /// Physics context
    pub physics_context: PhysicsContext,
    /// Input context
    pub input_context: InputContext,
    /// Config the engine was built with
    pub config: PawnConfig,
    /// The player's pawn
    pub pawn_entity: hecs::Entity,
    tick: u64,
}

/// The result of calling `update()` on Engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickData {
    /// How many ticks have run, including this one
    pub tick: u64,
    /// Where the pawn teleported to this tick, if it did
    pub teleported_to: Option<Vec3>,
    /// What happened if the grab action fired this tick
    pub interaction: Option<InteractionOutcome>,
}

impl Engine {
    /// Create a new instance of the engine with the default config
    pub fn new() -> VrPawnResult<Self> {
        EngineBuilder::new().build()
    }

    /// IMPORTANT: Call this function each tick with the latest tracking and button state.
    ///
    /// Systems run in a fixed order: tracked poses are applied first, then the pawn's actions, then whatever's
    /// held is moved to the hand, and finally the physics simulation is stepped.
    pub fn update(&mut self, input: &InputSample) -> TickData {
        self.tick += 1;
        self.input_context.update(input);

        motion_controllers_system(self);
        update_global_transform_system(self);
        update_global_transform_with_parent_system(self);

        let teleported_to = teleport_system(self);
        if teleported_to.is_some() {
            // The grab ray should come from where the hand is now.
            update_global_transform_system(self);
            update_global_transform_with_parent_system(self);
        }
        let interaction = grabbing_system(self);

        update_global_transform_system(self);
        update_global_transform_with_parent_system(self);
        held_object_system(self);

        physics_system(self);
        collision_system(self);

        if teleported_to.is_some() || interaction.is_some() {
            debug!(
                "Tick {}: teleported to {teleported_to:?}, interaction {interaction:?}",
                self.tick
            );
        }

        TickData {
            tick: self.tick,
            teleported_to,
            interaction,
        }
    }

    /// How many times `update` has been called
    pub fn tick(&self) -> u64 {
        self.tick
    }
}
