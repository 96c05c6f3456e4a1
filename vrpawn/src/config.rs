use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::{
    components::Handedness,
    contexts::{ActionBinding, Button, TriggerEvent},
    VrPawnResult,
};

/// Which buttons fire the pawn's actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct InputBindings {
    /// Teleport to wherever the player is looking. Fires every tick the button is held by default.
    pub teleport: ActionBinding,
    /// Grab what the left hand is pointing at, or release what it's holding. Fires once per press by default.
    pub grab: ActionBinding,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            teleport: ActionBinding {
                hand: Handedness::Right,
                button: Button::Trigger,
                trigger_event: TriggerEvent::Triggered,
            },
            grab: ActionBinding {
                hand: Handedness::Left,
                button: Button::Grip,
                trigger_event: TriggerEvent::Started,
            },
        }
    }
}

/// Settings for the gas mask prop.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GasMaskConfig {
    /// Radius of the proximity sphere attached to the mask, in metres
    pub proximity_radius: f32,
}

impl Default for GasMaskConfig {
    fn default() -> Self {
        Self {
            proximity_radius: 0.1,
        }
    }
}

/// Settings for the player's pawn. Distances are in metres.
///
/// Every field has a default, so a config file only needs to mention what it changes:
///
/// ```
/// let config = vrpawn::config::PawnConfig::from_json(r#"{ "teleport_distance": 20.0 }"#).unwrap();
/// assert_eq!(config.teleport_distance, 20.0);
/// assert_eq!(config.grab_distance, 10.0);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PawnConfig {
    /// How far the teleport ray reaches
    pub teleport_distance: f32,
    /// How far the grab ray reaches
    pub grab_distance: f32,
    /// When holding something, only release it if the grab ray hits the held entity itself.
    ///
    /// Off by default, in which case the grab action releases whatever is held as soon as the ray hits anything.
    pub release_only_held: bool,
    /// Gravity applied to everything simulating physics
    pub gravity: Vec3,
    /// Where the pawn is spawned
    pub spawn_position: Vec3,
    /// Which buttons fire which actions
    pub bindings: InputBindings,
    /// Settings for gas masks added with [`crate::props::add_gas_mask`]
    pub gas_mask: GasMaskConfig,
}

impl Default for PawnConfig {
    fn default() -> Self {
        Self {
            teleport_distance: 10.0,
            grab_distance: 10.0,
            release_only_held: false,
            gravity: Vec3::ZERO,
            spawn_position: Vec3::ZERO,
            bindings: Default::default(),
            gas_mask: Default::default(),
        }
    }
}

impl PawnConfig {
    /// Parse a config from a JSON string
    pub fn from_json(json: &str) -> VrPawnResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> VrPawnResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
