//! Animator: owns the attached model's rest pose, the playback state and the
//! per-tick outputs.
//!
//! Methods:
//! - new, with_jitter, set_model, set_animation / set_animation_id, set_speed,
//!   play / pause / stop, apply (commands), update (advance → evaluate → outputs)

use std::collections::VecDeque;

use crate::aliases::AliasTable;
use crate::baking::{bake_clip, BakedClip, BakingConfig};
use crate::config::Config;
use crate::error::AnimError;
use crate::ids::AnimationId;
use crate::inputs::{Command, Inputs};
use crate::jitter::{JitterSource, RandJitter};
use crate::motion;
use crate::outputs::{CoreEvent, Outputs};
use crate::playback::{validate_speed, PlaybackState, PlaybackStatus, Transition};
use crate::resolver::PromptResolver;
use crate::transform::{RestPose, Transform};

/// Model slot. Without a model there is no rest pose and nothing to evaluate.
#[derive(Debug, Clone)]
enum Model {
    Detached,
    Attached { rest: RestPose, current: Transform },
}

pub struct Animator {
    cfg: Config,
    resolver: PromptResolver,
    model: Model,
    playback: PlaybackState,
    jitter: Box<dyn JitterSource + Send + Sync>,

    // Events queued by commands until the next update.
    pending: VecDeque<CoreEvent>,
    outputs: Outputs,
}

impl std::fmt::Debug for Animator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animator")
            .field("model", &self.model)
            .field("playback", &self.playback)
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Animator {
    /// Create an animator. An invalid `default_speed` falls back to 1.0 and a
    /// zero `max_events_per_tick` to 1.
    pub fn new(mut cfg: Config) -> Self {
        let speed = validate_speed(cfg.default_speed).unwrap_or_else(|err| {
            log::warn!("{err}; using 1.0");
            1.0
        });
        if cfg.max_events_per_tick == 0 {
            log::warn!("max_events_per_tick must be at least 1; using 1");
            cfg.max_events_per_tick = 1;
        }
        Self {
            resolver: PromptResolver::new(AliasTable::with_extra(&cfg.extra_aliases)),
            jitter: Box::new(RandJitter::from_seed_opt(cfg.jitter_seed)),
            playback: PlaybackState::new(speed),
            model: Model::Detached,
            pending: VecDeque::new(),
            outputs: Outputs::default(),
            cfg,
        }
    }

    /// Replace the randomness used by `earthquake`.
    pub fn with_jitter<J>(mut self, jitter: J) -> Self
    where
        J: JitterSource + Send + Sync + 'static,
    {
        self.jitter = Box::new(jitter);
        self
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn resolver(&self) -> &PromptResolver {
        &self.resolver
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn status(&self) -> PlaybackStatus {
        self.playback.status
    }

    pub fn current_animation(&self) -> Option<AnimationId> {
        self.playback.current
    }

    pub fn elapsed(&self) -> f32 {
        self.playback.elapsed
    }

    pub fn speed(&self) -> f32 {
        self.playback.speed
    }

    pub fn has_model(&self) -> bool {
        matches!(self.model, Model::Attached { .. })
    }

    pub fn rest_pose(&self) -> Option<&RestPose> {
        match &self.model {
            Model::Attached { rest, .. } => Some(rest),
            Model::Detached => None,
        }
    }

    /// Transform to apply to the model root, if a model is attached.
    pub fn transform(&self) -> Option<&Transform> {
        match &self.model {
            Model::Attached { current, .. } => Some(current),
            Model::Detached => None,
        }
    }

    /// Resolve a prompt without touching playback.
    pub fn resolve(&self, prompt: &str) -> Option<AnimationId> {
        self.resolver.resolve(prompt)
    }

    fn push_event(&mut self, event: CoreEvent) {
        if self.pending.len() >= self.cfg.max_events_per_tick {
            log::debug!("event queue full; dropping oldest event");
            self.pending.pop_front();
        }
        self.pending.push_back(event);
    }

    fn emit(&mut self, transition: Transition) {
        let event = match transition {
            Transition::Paused => CoreEvent::PlaybackPaused,
            Transition::Resumed => CoreEvent::PlaybackResumed,
            Transition::Stopped => CoreEvent::PlaybackStopped,
            Transition::Started | Transition::Unchanged => return,
        };
        self.push_event(event);
    }

    /// Attach a model by its rest pose, or detach with `None`.
    /// Playback state survives model swaps. A paused animation is shown on the
    /// new model at the frozen time; otherwise it starts from its rest pose.
    pub fn set_model(&mut self, rest: Option<RestPose>) {
        match rest {
            Some(rest) => {
                log::info!("model attached");
                let current = match (self.playback.status, self.playback.current) {
                    (PlaybackStatus::Paused, Some(id)) => motion::evaluate(
                        id,
                        self.playback.elapsed,
                        &rest,
                        self.jitter.as_mut(),
                    ),
                    _ => *rest.transform(),
                };
                self.model = Model::Attached { rest, current };
                self.push_event(CoreEvent::ModelAttached);
            }
            None => {
                if self.has_model() {
                    log::info!("model detached");
                    self.push_event(CoreEvent::ModelDetached);
                }
                self.model = Model::Detached;
            }
        }
    }

    /// Resolve `prompt` and start the match from t = 0. On no match nothing
    /// changes except a queued `PromptRejected` event.
    pub fn set_animation(&mut self, prompt: &str) -> bool {
        match self.resolver.resolve(prompt) {
            Some(id) => {
                self.start(id, Some(prompt.to_string()));
                true
            }
            None => {
                log::warn!("unknown animation prompt {prompt:?}");
                self.push_event(CoreEvent::PromptRejected {
                    prompt: prompt.to_string(),
                });
                false
            }
        }
    }

    pub fn set_animation_id(&mut self, id: AnimationId) {
        self.start(id, None);
    }

    fn start(&mut self, id: AnimationId, prompt: Option<String>) {
        log::info!("starting animation {id}");
        self.playback.start(id);
        self.push_event(CoreEvent::AnimationStarted {
            animation: id,
            prompt,
        });
    }

    pub fn set_speed(&mut self, speed: f32) -> Result<(), AnimError> {
        self.playback.set_speed(speed)?;
        self.push_event(CoreEvent::SpeedChanged { speed });
        Ok(())
    }

    pub fn play(&mut self) {
        let t = self.playback.play();
        self.emit(t);
    }

    /// Freeze time; the last transform stays in place.
    pub fn pause(&mut self) {
        let t = self.playback.pause();
        self.emit(t);
    }

    /// Back to Stopped with t = 0; the model snaps to its rest pose.
    pub fn stop(&mut self) {
        let t = self.playback.stop();
        if let Model::Attached { rest, current } = &mut self.model {
            *current = *rest.transform();
        }
        self.emit(t);
    }

    pub fn apply(&mut self, cmd: Command) -> Result<(), AnimError> {
        match cmd {
            Command::SetAnimation { prompt } => {
                self.set_animation(&prompt);
            }
            Command::SetAnimationId { id } => self.set_animation_id(id),
            Command::SetSpeed { speed } => self.set_speed(speed)?,
            Command::Play => self.play(),
            Command::Pause => self.pause(),
            Command::Stop => self.stop(),
            Command::SetModel { rest } => self.set_model(rest),
        }
        Ok(())
    }

    /// Apply commands in order; stops at the first failing command.
    pub fn apply_inputs(&mut self, inputs: Inputs) -> Result<(), AnimError> {
        for cmd in inputs.commands {
            self.apply(cmd)?;
        }
        Ok(())
    }

    /// Evaluate the active animation at an arbitrary logical time without
    /// changing playback (scrubbing, previews).
    pub fn evaluate_at(&mut self, t: f32) -> Option<Transform> {
        let id = self.playback.current?;
        let rest = self.rest_pose().copied()?;
        Some(motion::evaluate(id, t.max(0.0), &rest, self.jitter.as_mut()))
    }

    /// Bake the active animation at the current speed for export.
    /// `Ok(None)` when there is no active animation or no model.
    pub fn bake_current(&self, cfg: &BakingConfig) -> Result<Option<BakedClip>, AnimError> {
        let (Some(id), Some(rest)) = (self.playback.current, self.rest_pose()) else {
            return Ok(None);
        };
        let cfg = BakingConfig {
            speed: self.playback.speed,
            ..cfg.clone()
        };
        bake_clip(id, rest, &cfg).map(Some)
    }

    /// Advance by `dt` seconds and produce this tick's outputs.
    ///
    /// Time moves only while Playing with an animation set and a model
    /// attached; in every other state this only drains queued events.
    pub fn update(&mut self, dt: f32) -> &Outputs {
        self.outputs.clear();
        self.outputs.events.extend(self.pending.drain(..));

        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            log::warn!("ignoring invalid frame delta {dt}");
            0.0
        };

        match &mut self.model {
            Model::Attached { rest, current } => {
                if let Some(id) = self.playback.advance(dt) {
                    *current =
                        motion::evaluate(id, self.playback.elapsed, rest, self.jitter.as_mut());
                }
                self.outputs.transform = Some(*current);
            }
            Model::Detached => log::debug!("update without a model; nothing to animate"),
        }

        self.outputs.status = self.playback.status;
        self.outputs.elapsed = self.playback.elapsed;
        &self.outputs
    }
}
