//! Input contracts for the animator.
//!
//! Hosts that drive the animator from serialized messages (the wasm adapter,
//! scripted tests) send these instead of calling the methods one by one.

use serde::{Deserialize, Serialize};

use crate::ids::AnimationId;
use crate::transform::RestPose;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    /// Resolve free text and start the matching animation.
    SetAnimation { prompt: String },
    /// Start a known animation without going through the resolver.
    SetAnimationId { id: AnimationId },
    SetSpeed { speed: f32 },
    Play,
    Pause,
    Stop,
    /// Attach a model (its rest pose) or detach with `None`.
    SetModel {
        #[serde(default)]
        rest: Option<RestPose>,
    },
}

/// Commands applied in order before the next step.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl Inputs {
    pub fn push(&mut self, cmd: Command) -> &mut Self {
        self.commands.push(cmd);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_use_tagged_json() {
        let json = r#"[
            { "cmd": "set_animation", "prompt": "make it dance" },
            { "cmd": "set_speed", "speed": 2.0 },
            { "cmd": "pause" },
            { "cmd": "set_model" }
        ]"#;
        let cmds: Vec<Command> = serde_json::from_str(json).unwrap();
        assert_eq!(
            cmds,
            vec![
                Command::SetAnimation {
                    prompt: "make it dance".into()
                },
                Command::SetSpeed { speed: 2.0 },
                Command::Pause,
                Command::SetModel { rest: None },
            ]
        );
    }
}
