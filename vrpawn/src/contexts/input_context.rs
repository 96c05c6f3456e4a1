use glam::Affine3A;
use serde::{Deserialize, Serialize};

use crate::components::Handedness;

/// A physical button on one of the player's controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Button {
    Grip,
    Trigger,
    /// A on the right controller, X on the left
    Primary,
    /// B on the right controller, Y on the left
    Secondary,
    ThumbstickClick,
}

/// When should an action bound to a button fire?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum TriggerEvent {
    /// Every tick the button is held down
    Triggered,
    /// Only on the tick the button goes down
    Started,
    /// Only on the tick the button is let go
    Completed,
}

/// Maps an action to a button on one of the controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ActionBinding {
    pub hand: Handedness,
    pub button: Button,
    pub trigger_event: TriggerEvent,
}

/// The state of one controller, as reported by the tracking system for a single tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerSample {
    /// Pose of the controller's grip in stage space
    pub stage_from_grip: Affine3A,
    pub grip_button: bool,
    pub trigger_button: bool,
    pub primary_button: bool,
    pub secondary_button: bool,
    pub thumbstick_click: bool,
}

impl ControllerSample {
    fn button(&self, button: Button) -> bool {
        match button {
            Button::Grip => self.grip_button,
            Button::Trigger => self.trigger_button,
            Button::Primary => self.primary_button,
            Button::Secondary => self.secondary_button,
            Button::ThumbstickClick => self.thumbstick_click,
        }
    }
}

/// Everything the tracking system reported for a single tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSample {
    /// Pose of the headset in stage space
    pub stage_from_head: Affine3A,
    pub left: ControllerSample,
    pub right: ControllerSample,
}

#[derive(Debug, Default)]
pub struct ControllerInputContext {
    current: ControllerSample,
    previous: ControllerSample,
}

impl ControllerInputContext {
    pub fn button(&self, button: Button) -> bool {
        self.current.button(button)
    }
    pub fn button_just_pressed(&self, button: Button) -> bool {
        self.current.button(button) && !self.previous.button(button)
    }
    pub fn button_just_released(&self, button: Button) -> bool {
        !self.current.button(button) && self.previous.button(button)
    }
    pub fn stage_from_grip(&self) -> Affine3A {
        self.current.stage_from_grip
    }

    fn update(&mut self, sample: &ControllerSample) {
        self.previous = std::mem::replace(&mut self.current, sample.clone());
    }
}

/// Player input for the current tick, plus enough of the previous tick to detect presses and releases.
#[derive(Debug, Default)]
pub struct InputContext {
    pub left: ControllerInputContext,
    pub right: ControllerInputContext,
    stage_from_head: Affine3A,
}

impl InputContext {
    /// Feed in this tick's sample. Call exactly once per tick, before running any systems.
    pub fn update(&mut self, sample: &InputSample) {
        self.left.update(&sample.left);
        self.right.update(&sample.right);
        self.stage_from_head = sample.stage_from_head;
    }

    pub fn stage_from_head(&self) -> Affine3A {
        self.stage_from_head
    }

    pub fn controller(&self, handedness: Handedness) -> &ControllerInputContext {
        match handedness {
            Handedness::Left => &self.left,
            Handedness::Right => &self.right,
        }
    }

    /// Should the action with this binding fire this tick?
    pub fn action_fired(&self, binding: &ActionBinding) -> bool {
        let controller = self.controller(binding.hand);
        match binding.trigger_event {
            TriggerEvent::Triggered => controller.button(binding.button),
            TriggerEvent::Started => controller.button_just_pressed(binding.button),
            TriggerEvent::Completed => controller.button_just_released(binding.button),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn left_grip(pressed: bool) -> InputSample {
        InputSample {
            left: ControllerSample {
                grip_button: pressed,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    pub fn test_just_pressed_and_released() {
        let mut input_context = InputContext::default();

        input_context.update(&left_grip(true));
        assert!(input_context.left.button(Button::Grip));
        assert!(input_context.left.button_just_pressed(Button::Grip));
        assert!(!input_context.right.button(Button::Grip));

        input_context.update(&left_grip(true));
        assert!(input_context.left.button(Button::Grip));
        assert!(!input_context.left.button_just_pressed(Button::Grip));

        input_context.update(&left_grip(false));
        assert!(!input_context.left.button(Button::Grip));
        assert!(input_context.left.button_just_released(Button::Grip));
    }

    #[test]
    pub fn test_action_fired() {
        let mut input_context = InputContext::default();
        let started = ActionBinding {
            hand: Handedness::Left,
            button: Button::Grip,
            trigger_event: TriggerEvent::Started,
        };
        let triggered = ActionBinding {
            trigger_event: TriggerEvent::Triggered,
            ..started
        };
        let completed = ActionBinding {
            trigger_event: TriggerEvent::Completed,
            ..started
        };

        let fired = |input_context: &InputContext| {
            (
                input_context.action_fired(&started),
                input_context.action_fired(&triggered),
                input_context.action_fired(&completed),
            )
        };

        input_context.update(&left_grip(true));
        assert_eq!(fired(&input_context), (true, true, false));
        input_context.update(&left_grip(true));
        assert_eq!(fired(&input_context), (false, true, false));
        input_context.update(&left_grip(false));
        assert_eq!(fired(&input_context), (false, false, true));
        input_context.update(&left_grip(false));
        assert_eq!(fired(&input_context), (false, false, false));
    }

    #[test]
    pub fn test_poses() {
        let mut input_context = InputContext::default();
        let stage_from_head = Affine3A::from_translation([0., 1.7, 0.].into());
        let stage_from_grip = Affine3A::from_translation([0.2, 1.2, -0.3].into());
        input_context.update(&InputSample {
            stage_from_head,
            right: ControllerSample {
                stage_from_grip,
                ..Default::default()
            },
            ..Default::default()
        });

        assert_relative_eq!(input_context.stage_from_head(), stage_from_head);
        assert_relative_eq!(
            input_context.controller(Handedness::Right).stage_from_grip(),
            stage_from_grip
        );
        assert_relative_eq!(input_context.left.stage_from_grip(), Affine3A::IDENTITY);
    }
}
