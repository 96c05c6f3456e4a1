use approx::assert_relative_eq;
use vrpawn::{
    components::{
        Collider, GlobalTransform, InteractionState, LocalTransform, Pawn, ProximitySphere,
    },
    config::PawnConfig,
    contexts::{ControllerSample, InputSample},
    glam::{Affine3A, Quat, Vec3},
    hecs::Entity,
    props::{add_drawer, add_floor, add_gas_mask, add_pickable},
    systems::InteractionOutcome,
    Engine, EngineBuilder,
};

fn head() -> Affine3A {
    Affine3A::from_translation([0., 1.7, 0.].into())
}

fn sample(stage_from_head: Affine3A, teleport: bool, grip: bool, left_x: f32) -> InputSample {
    InputSample {
        stage_from_head,
        left: ControllerSample {
            stage_from_grip: Affine3A::from_translation([left_x, 1.2, -0.3].into()),
            grip_button: grip,
            ..Default::default()
        },
        right: ControllerSample {
            stage_from_grip: Affine3A::from_translation([0.2, 1.2, -0.3].into()),
            trigger_button: teleport,
            ..Default::default()
        },
    }
}

fn build(config: PawnConfig) -> (Engine, Entity, Entity) {
    let mut engine = EngineBuilder::new().config(config).build().unwrap();
    let world = &mut engine.world;
    let physics_context = &mut engine.physics_context;
    add_floor(world, physics_context, 50., 0.).unwrap();
    let cube = add_pickable(
        world,
        physics_context,
        "Cube",
        [-0.2, 1.2, -6.].into(),
        Vec3::splat(0.1),
    )
    .unwrap();
    let drawer = add_drawer(
        world,
        physics_context,
        [0.2, 1.2, -6.].into(),
        Vec3::new(0.1, 0.1, 0.2),
        [0., 0., 0.3].into(),
    )
    .unwrap();
    (engine, cube, drawer)
}

fn pawn_state(engine: &Engine) -> InteractionState {
    engine.world.get::<&Pawn>(engine.pawn_entity).unwrap().state
}

fn global_translation(engine: &Engine, entity: Entity) -> Vec3 {
    engine
        .world
        .get::<&GlobalTransform>(entity)
        .unwrap()
        .translation()
}

#[test]
pub fn test_teleport_grab_carry_release() {
    let (mut engine, cube, _) = build(PawnConfig::default());

    for _ in 0..5 {
        let tick_data = engine.update(&sample(head(), false, false, -0.2));
        assert_eq!(tick_data.teleported_to, None);
        assert_eq!(tick_data.interaction, None);
    }
    assert_eq!(engine.tick(), 5);

    // Look down and pull the right trigger to teleport forward. The pawn stays at floor height.
    let looking_down = Affine3A::from_rotation_translation(
        Quat::from_rotation_x(-0.5),
        [0., 1.7, 0.].into(),
    );
    let tick_data = engine.update(&sample(looking_down, true, false, -0.2));
    let destination = tick_data.teleported_to.unwrap();
    let expected_z = -1.7 / 0.5_f32.tan();
    assert_relative_eq!(destination, Vec3::new(0., 0., expected_z), epsilon = 0.01);
    assert_relative_eq!(
        engine
            .world
            .get::<&LocalTransform>(engine.pawn_entity)
            .unwrap()
            .translation,
        destination
    );

    engine.update(&sample(head(), false, false, -0.2));

    // Squeeze the left grip to grab the cube, some way in front of the pawn.
    let tick_data = engine.update(&sample(head(), false, true, -0.2));
    assert_eq!(tick_data.interaction, Some(InteractionOutcome::Grabbed(cube)));
    assert_eq!(pawn_state(&engine), InteractionState::Holding(cube));

    // Keep holding the grip and move the hand; the cube comes with it.
    let left_anchor = engine
        .world
        .get::<&Pawn>(engine.pawn_entity)
        .unwrap()
        .left_anchor;
    for i in 0..10 {
        let x = -0.2 + i as f32 * 0.04;
        let tick_data = engine.update(&sample(head(), false, true, x));
        assert_eq!(tick_data.interaction, None);
        assert_relative_eq!(
            global_translation(&engine, cube),
            global_translation(&engine, left_anchor),
            epsilon = 0.0001
        );
        assert_relative_eq!(
            global_translation(&engine, cube),
            Vec3::new(x, 1.2, expected_z - 0.3),
            epsilon = 0.01
        );
    }

    // Let go of the grip, then squeeze it again to release.
    engine.update(&sample(head(), false, false, 0.16));
    let tick_data = engine.update(&sample(head(), false, true, 0.16));
    assert_eq!(tick_data.interaction, Some(InteractionOutcome::Released(cube)));
    assert_eq!(pawn_state(&engine), InteractionState::Idle);
    assert!(engine
        .physics_context
        .is_simulating_physics(&engine.world, cube)
        .unwrap());

    // Without gravity, the cube stays where it was let go.
    let released_at = global_translation(&engine, cube);
    for _ in 0..10 {
        engine.update(&sample(head(), false, false, 0.16));
    }
    assert_relative_eq!(global_translation(&engine, cube), released_at, epsilon = 0.001);
}

#[test]
pub fn test_drawer() {
    let (mut engine, _, drawer) = build(PawnConfig::default());

    engine.update(&sample(head(), false, false, 0.2));
    let tick_data = engine.update(&sample(head(), false, true, 0.2));
    assert_eq!(tick_data.interaction, Some(InteractionOutcome::Interacted(drawer)));
    assert_eq!(pawn_state(&engine), InteractionState::Idle);

    // The drawer slid open, and its collider went with it.
    engine.update(&sample(head(), false, false, 0.2));
    assert_relative_eq!(
        global_translation(&engine, drawer),
        Vec3::new(0.2, 1.2, -5.7),
        epsilon = 0.0001
    );
    let body = engine
        .physics_context
        .get_rigid_body(&engine.world, drawer)
        .unwrap();
    assert_relative_eq!(body.translation().z, -5.7, epsilon = 0.0001);
}

#[test]
pub fn test_missing_everything_changes_nothing() {
    let (mut engine, _, _) = build(PawnConfig::default());

    // Point the left hand at the sky and keep pressing grip.
    let pointing_up = InputSample {
        left: ControllerSample {
            stage_from_grip: Affine3A::from_rotation_translation(
                Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
                [-0.2, 1.2, -0.3].into(),
            ),
            grip_button: true,
            ..Default::default()
        },
        ..Default::default()
    };
    for _ in 0..5 {
        let tick_data = engine.update(&pointing_up);
        engine.update(&InputSample::default());
        assert!(matches!(
            tick_data.interaction,
            None | Some(InteractionOutcome::Missed)
        ));
        assert_eq!(pawn_state(&engine), InteractionState::Idle);
    }
}

#[test]
pub fn test_gravity() {
    let config = PawnConfig::from_json(r#"{ "gravity": [0.0, -9.81, 0.0] }"#).unwrap();
    let (mut engine, cube, drawer) = build(config);

    for _ in 0..144 {
        engine.update(&InputSample::default());
    }

    // The cube fell to the floor, the kinematic drawer didn't move.
    let cube_translation = global_translation(&engine, cube);
    assert!(cube_translation.y < 0.2, "{cube_translation:?}");
    assert!(cube_translation.y > 0.05, "{cube_translation:?}");
    assert_relative_eq!(
        global_translation(&engine, drawer),
        Vec3::new(0.2, 1.2, -6.)
    );
}

#[test]
pub fn test_gas_mask() {
    let (mut engine, cube, drawer) = build(PawnConfig::default());
    let config = engine.config.gas_mask;
    assert_relative_eq!(config.proximity_radius, 0.1);

    // Resting just in front of the cube.
    let mask = add_gas_mask(
        &mut engine.world,
        &mut engine.physics_context,
        &config,
        [-0.2, 1.2, -5.85].into(),
    )
    .unwrap();

    engine.update(&InputSample::default());

    // The 10cm proximity sphere reaches the cube, but not the drawer 40cm away.
    let collisions = engine
        .world
        .query::<(&ProximitySphere, &Collider)>()
        .iter()
        .map(|(_, (_, collider))| collider.collisions_this_frame.clone())
        .next()
        .unwrap();
    assert!(collisions.contains(&cube));
    assert!(!collisions.contains(&drawer));
    assert!(!collisions.contains(&engine.pawn_entity));
    assert!(
        !engine
            .world
            .get::<&vrpawn::components::GasMask>(mask)
            .unwrap()
            .is_equipped
    );
}

#[test]
pub fn test_default_reach() {
    let (mut engine, _, _) = build(PawnConfig::default());
    let far_cube = add_pickable(
        &mut engine.world,
        &mut engine.physics_context,
        "Far cube",
        [0.6, 1.2, -15.].into(),
        Vec3::splat(0.1),
    )
    .unwrap();

    // 14.7m away is out of reach of the default 10m grab ray..
    engine.update(&sample(head(), false, false, 0.6));
    let tick_data = engine.update(&sample(head(), false, true, 0.6));
    assert_eq!(tick_data.interaction, Some(InteractionOutcome::Missed));

    // ..but not of a longer one.
    engine.config.grab_distance = 20.;
    engine.update(&sample(head(), false, false, 0.6));
    let tick_data = engine.update(&sample(head(), false, true, 0.6));
    assert_eq!(
        tick_data.interaction,
        Some(InteractionOutcome::Grabbed(far_cube))
    );
}
