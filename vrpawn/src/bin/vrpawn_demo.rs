use anyhow::Result;
use glam::{Affine3A, Quat, Vec3};
use log::info;
use vrpawn::{
    config::PawnConfig,
    contexts::{ControllerSample, InputSample},
    props::{add_drawer, add_floor, add_gas_mask, add_pickable},
    EngineBuilder,
};

/// Runs a short scripted session: look around, teleport, pick up a cube, carry it and put it down again.
///
/// Pass the path to a JSON config as the first argument to override the defaults.
pub fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => PawnConfig::load(path)?,
        None => PawnConfig::default(),
    };
    let gas_mask_config = config.gas_mask;
    let mut engine = EngineBuilder::new().config(config).build()?;

    let world = &mut engine.world;
    let physics_context = &mut engine.physics_context;
    add_floor(world, physics_context, 50., 0.)?;
    let cube = add_pickable(
        world,
        physics_context,
        "Cube",
        [-0.2, 1.2, -6.].into(),
        Vec3::splat(0.1),
    )?;
    add_drawer(
        world,
        physics_context,
        [0.2, 1.2, -6.].into(),
        Vec3::new(0.2, 0.1, 0.2),
        [0., 0., 0.3].into(),
    )?;
    add_gas_mask(
        world,
        physics_context,
        &gas_mask_config,
        [2., 1., -2.].into(),
    )?;
    info!("Scene ready. Cube is {cube:?}");

    let head = Affine3A::from_translation([0., 1.7, 0.].into());
    let looking_down = Affine3A::from_rotation_translation(
        Quat::from_rotation_x(-0.5),
        [0., 1.7, 0.].into(),
    );
    let left_hand = |grip: bool, x: f32| ControllerSample {
        stage_from_grip: Affine3A::from_translation([x, 1.2, -0.3].into()),
        grip_button: grip,
        ..Default::default()
    };
    let right_hand = |trigger: bool| ControllerSample {
        stage_from_grip: Affine3A::from_translation([0.2, 1.2, -0.3].into()),
        trigger_button: trigger,
        ..Default::default()
    };

    // Stand still, teleport once, then grab, carry and release.
    let mut script = Vec::new();
    script.extend(std::iter::repeat((head, false, false, -0.2)).take(10));
    script.push((looking_down, true, false, -0.2));
    script.extend(std::iter::repeat((head, false, false, -0.2)).take(10));
    script.push((head, false, true, -0.2));
    for i in 0..20 {
        script.push((head, false, true, -0.2 + i as f32 * 0.02));
    }
    script.push((head, false, false, 0.2));
    script.push((head, false, true, 0.2));
    script.extend(std::iter::repeat((head, false, false, 0.2)).take(10));

    for (stage_from_head, teleport, grip, x) in script {
        let tick_data = engine.update(&InputSample {
            stage_from_head,
            left: left_hand(grip, x),
            right: right_hand(teleport),
        });

        if let Some(destination) = tick_data.teleported_to {
            info!("[{}] Teleported to {destination:?}", tick_data.tick);
        }
        if let Some(outcome) = tick_data.interaction {
            info!("[{}] Grab action: {outcome:?}", tick_data.tick);
        }
    }

    let cube_position = engine
        .world
        .get::<&vrpawn::components::GlobalTransform>(cube)?
        .translation();
    info!(
        "Finished after {} ticks. The cube ended up at {cube_position:?}",
        engine.tick()
    );

    Ok(())
}
