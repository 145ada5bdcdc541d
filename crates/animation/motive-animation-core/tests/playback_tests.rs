use motive_animation_core::{
    evaluate, AnimError, AnimationId, Animator, Command, ConstJitter, CoreEvent, Inputs,
    PlaybackStatus, RestPose, Transform, Vec3,
};

fn approx(a: f32, b: f32) {
    assert!((a - b).abs() <= 1e-4, "left={a} right={b}");
}

fn approx_tf(a: &Transform, b: &Transform) {
    for (x, y) in [
        (a.position, b.position),
        (a.rotation, b.rotation),
        (a.scale, b.scale),
    ] {
        approx(x.x, y.x);
        approx(x.y, y.y);
        approx(x.z, y.z);
    }
}

fn rest() -> RestPose {
    RestPose::capture(&Transform::new(
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.5, 0.0),
        Vec3::ONE,
    ))
}

fn animator() -> Animator {
    let mut a = Animator::default().with_jitter(ConstJitter(0.0));
    a.set_model(Some(rest()));
    a
}

/// it should scale logical time by the speed multiplier
#[test]
fn speed_scales_logical_time() {
    let mut fast = animator();
    fast.set_animation_id(AnimationId::Rotate);
    fast.set_speed(2.0).unwrap();
    let fast_tf = *fast.update(1.0).transform.as_ref().unwrap();

    let mut slow = animator();
    slow.set_animation_id(AnimationId::Rotate);
    let slow_tf = *slow.update(2.0).transform.as_ref().unwrap();

    approx(fast.elapsed(), 2.0);
    approx_tf(&fast_tf, &slow_tf);
}

/// it should keep elapsed time when speed changes mid-playback
#[test]
fn speed_change_keeps_elapsed() {
    let mut a = animator();
    a.set_animation_id(AnimationId::Float);
    a.update(1.0);
    a.set_speed(0.5).unwrap();
    approx(a.elapsed(), 1.0);
    a.update(1.0);
    approx(a.elapsed(), 1.5);
}

/// it should reject non-positive or non-finite speeds and keep the old one
#[test]
fn invalid_speed_is_rejected() {
    let mut a = animator();
    a.set_speed(3.0).unwrap();
    for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        assert!(matches!(a.set_speed(bad), Err(AnimError::InvalidSpeed { .. })));
    }
    assert_eq!(a.speed(), 3.0);
}

/// it should freeze time and transform while paused and resume without a jump
#[test]
fn pause_resume_is_continuous() {
    let mut a = animator();
    a.set_animation_id(AnimationId::Bounce);
    a.update(0.25);
    a.pause();
    let frozen = *a.update(0.0).transform.as_ref().unwrap();
    let out = a.update(5.0);
    assert_eq!(out.status, PlaybackStatus::Paused);
    approx(out.elapsed, 0.25);
    assert_eq!(out.transform, Some(frozen));

    a.play();
    a.update(0.25);
    approx(a.elapsed(), 0.5);

    let mut straight = animator();
    straight.set_animation_id(AnimationId::Bounce);
    straight.update(0.5);
    approx_tf(a.transform().unwrap(), straight.transform().unwrap());
}

/// it should restore the rest pose on stop and clear the active animation
#[test]
fn stop_restores_rest() {
    let mut a = animator();
    a.set_animation_id(AnimationId::Dance);
    a.update(0.8);
    assert_ne!(a.transform(), Some(rest().transform()));
    a.stop();
    assert_eq!(a.status(), PlaybackStatus::Stopped);
    assert_eq!(a.current_animation(), None);
    assert_eq!(a.elapsed(), 0.0);
    let out = a.update(1.0);
    assert_eq!(out.transform.as_ref(), Some(rest().transform()));
}

/// it should ignore play while stopped
#[test]
fn play_while_stopped_is_noop() {
    let mut a = animator();
    a.play();
    let out = a.update(1.0);
    assert_eq!(out.status, PlaybackStatus::Stopped);
    assert!(out.events.iter().all(|e| *e != CoreEvent::PlaybackResumed));
}

/// it should restart from t = 0 when the same animation is selected again
#[test]
fn reselecting_restarts() {
    let mut a = animator();
    a.set_animation_id(AnimationId::Spin);
    a.update(3.0);
    assert!(a.set_animation("spin"));
    approx(a.elapsed(), 0.0);
    let out = a.update(0.0);
    approx_tf(out.transform.as_ref().unwrap(), rest().transform());
}

/// it should keep playback running across a model swap and evaluate against the new rest pose
#[test]
fn model_swap_keeps_playback() {
    let mut a = animator();
    a.set_animation_id(AnimationId::Float);
    a.update(1.0);

    let moved = RestPose::capture(&Transform::new(
        Vec3::new(5.0, 0.0, 0.0),
        Vec3::ZERO,
        Vec3::ONE,
    ));
    a.set_model(Some(moved));
    assert_eq!(a.transform(), Some(moved.transform()));
    let out = a.update(0.5);
    assert_eq!(out.status, PlaybackStatus::Playing);
    let tf = out.transform.unwrap();
    approx(tf.position.x, 5.0);
    approx(tf.position.y, (1.5f32 * 1.5).sin() * 0.2);
}

/// it should show a paused animation on a swapped model at the frozen time
#[test]
fn paused_model_swap_holds_frozen_pose() {
    let mut a = animator();
    a.set_animation_id(AnimationId::Float);
    a.update(1.0);
    a.pause();

    let moved = RestPose::capture(&Transform::new(
        Vec3::new(5.0, 0.0, 0.0),
        Vec3::ZERO,
        Vec3::ONE,
    ));
    a.set_model(Some(moved));
    let expected = evaluate(AnimationId::Float, 1.0, &moved, &mut ConstJitter(0.0));
    approx_tf(a.transform().unwrap(), &expected);
    approx(a.transform().unwrap().position.y, 1.5f32.sin() * 0.2);

    let out = a.update(0.5);
    assert_eq!(out.status, PlaybackStatus::Paused);
    approx(out.elapsed, 1.0);
    approx_tf(out.transform.as_ref().unwrap(), &expected);
}

/// it should evaluate at an arbitrary time without moving the playhead
#[test]
fn evaluate_at_leaves_playback_alone() {
    let mut a = animator();
    assert!(a.evaluate_at(1.0).is_none());

    a.set_animation_id(AnimationId::Rotate);
    a.update(0.25);
    let tf = a.evaluate_at(2.0).unwrap();
    approx(tf.rotation.y, 0.5 + 2.0);
    approx(a.elapsed(), 0.25);
    approx(a.transform().unwrap().rotation.y, 0.5 + 0.25);

    let clamped = a.evaluate_at(-3.0).unwrap();
    approx_tf(&clamped, &a.evaluate_at(0.0).unwrap());

    a.set_model(None);
    assert!(a.evaluate_at(1.0).is_none());
}

/// it should apply a batch of commands in order and emit matching events
#[test]
fn commands_apply_in_order() {
    let mut a = Animator::default().with_jitter(ConstJitter(0.0));
    let mut inputs = Inputs::default();
    inputs
        .push(Command::SetModel { rest: Some(rest()) })
        .push(Command::SetAnimation {
            prompt: "make it boogie".into(),
        })
        .push(Command::SetSpeed { speed: 1.5 })
        .push(Command::Pause);
    a.apply_inputs(inputs).unwrap();

    assert_eq!(a.current_animation(), Some(AnimationId::Dance));
    assert_eq!(a.status(), PlaybackStatus::Paused);
    let events = a.update(0.1).events.clone();
    assert_eq!(
        events,
        vec![
            CoreEvent::ModelAttached,
            CoreEvent::AnimationStarted {
                animation: AnimationId::Dance,
                prompt: Some("make it boogie".into()),
            },
            CoreEvent::SpeedChanged { speed: 1.5 },
            CoreEvent::PlaybackPaused,
        ]
    );
}

/// it should stop applying commands at the first error
#[test]
fn failing_command_halts_batch() {
    let mut a = animator();
    let mut inputs = Inputs::default();
    inputs
        .push(Command::SetSpeed { speed: -2.0 })
        .push(Command::SetAnimationId {
            id: AnimationId::Hop,
        });
    assert!(a.apply_inputs(inputs).is_err());
    assert_eq!(a.current_animation(), None);
}

/// it should decode commands from tagged JSON
#[test]
fn commands_from_json() {
    let cmds: Vec<Command> = serde_json::from_str(
        r#"[
            {"cmd": "set_animation", "prompt": "hover"},
            {"cmd": "set_speed", "speed": 2.0},
            {"cmd": "stop"}
        ]"#,
    )
    .unwrap();
    let mut a = animator();
    for cmd in cmds {
        a.apply(cmd).unwrap();
    }
    assert_eq!(a.status(), PlaybackStatus::Stopped);
    assert_eq!(a.speed(), 2.0);
}

/// it should match a fresh animator after stop and restart
#[test]
fn restart_law() {
    let mut used = animator();
    used.set_animation_id(AnimationId::Tumble);
    used.set_speed(1.7).unwrap();
    used.update(4.2);
    used.stop();
    used.set_animation_id(AnimationId::Wave);
    used.set_speed(1.0).unwrap();
    let a = *used.update(0.0).transform.as_ref().unwrap();

    let mut fresh = animator();
    fresh.set_animation_id(AnimationId::Wave);
    let b = *fresh.update(0.0).transform.as_ref().unwrap();
    assert_eq!(a, b);
}
