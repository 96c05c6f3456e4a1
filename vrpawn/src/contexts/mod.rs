#![allow(missing_docs)]
pub mod input_context;
pub mod physics_context;

pub use input_context::{
    ActionBinding, Button, ControllerSample, InputContext, InputSample, TriggerEvent,
};
pub use physics_context::{PhysicsContext, RaycastHit};
