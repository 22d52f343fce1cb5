use playloop::app::runtime::FramePacer;
use playloop::input::ScriptedInput;
use playloop::render::{RecordingSurface, SurfaceOp};
use playloop::{ActorState, InputEvent, Key, LoopState, RenderLoop};
use tokio::time::{timeout, Duration};

const TIMEOUT_MS: u64 = 2000;

fn spawn_loop(frames: Vec<Vec<InputEvent>>) -> RenderLoop<ScriptedInput, RecordingSurface> {
    RenderLoop::new(
        ScriptedInput::new(frames),
        RecordingSurface::new(),
        ActorState::new(370, 480),
    )
}

async fn run_with_limit(
    render_loop: &mut RenderLoop<ScriptedInput, RecordingSurface>,
    limit: Option<u64>,
) -> playloop::LoopReport {
    let mut pacer = FramePacer::unpaced();
    timeout(
        Duration::from_millis(TIMEOUT_MS),
        render_loop.run(&mut pacer, limit),
    )
    .await
    .expect("render loop timed out")
    .expect("render loop failed")
}

#[tokio::test]
async fn idle_frames_leave_actor_in_place() {
    let mut render_loop = spawn_loop(vec![]);
    let report = run_with_limit(&mut render_loop, Some(25)).await;

    assert_eq!(report.frames, 25);
    assert_eq!(report.state, LoopState::Running);
    assert_eq!((report.actor.x, report.actor.y), (370, 480));
    assert!(render_loop
        .surface()
        .presented_frames()
        .iter()
        .all(|frame| frame == &vec![ActorState::new(370, 480)]));
}

#[tokio::test]
async fn held_left_key_moves_one_unit_per_frame() {
    let frames: u64 = 40;
    let mut render_loop = spawn_loop(vec![vec![InputEvent::KeyDown(Key::Left)]]);
    let report = run_with_limit(&mut render_loop, Some(frames)).await;

    assert_eq!((report.actor.x, report.actor.y), (370 - frames as i32, 480));

    let xs: Vec<i32> = render_loop
        .surface()
        .presented_frames()
        .iter()
        .map(|frame| frame[0].x)
        .collect();
    let expected: Vec<i32> = (1..=frames as i32).map(|f| 370 - f).collect();
    assert_eq!(xs, expected);
}

#[tokio::test]
async fn opposite_key_release_stops_horizontal_motion() {
    let mut render_loop = spawn_loop(vec![
        vec![InputEvent::KeyDown(Key::Left)],
        vec![],
        vec![InputEvent::KeyUp(Key::Right)],
    ]);
    let report = run_with_limit(&mut render_loop, Some(10)).await;

    // Two frames of motion, then the right release clears vx
    assert_eq!(report.actor.x, 368);
    assert_eq!(report.actor.vx, 0);
}

#[tokio::test]
async fn release_after_left_right_left_sequence_clears_axis() {
    let mut render_loop = spawn_loop(vec![vec![
        InputEvent::KeyDown(Key::Left),
        InputEvent::KeyDown(Key::Right),
        InputEvent::KeyUp(Key::Left),
    ]]);
    let report = run_with_limit(&mut render_loop, Some(5)).await;

    assert_eq!(report.actor.vx, 0);
    assert_eq!(report.actor.x, 370);
}

#[tokio::test]
async fn diagonal_motion_integrates_both_axes() {
    let mut render_loop = spawn_loop(vec![vec![
        InputEvent::KeyDown(Key::Right),
        InputEvent::KeyDown(Key::Up),
    ]]);
    let report = run_with_limit(&mut render_loop, Some(10)).await;

    assert_eq!((report.actor.x, report.actor.y), (380, 470));
}

#[tokio::test]
async fn quit_presents_its_frame_and_nothing_after() {
    let quit_frame = 7;
    let mut script: Vec<Vec<InputEvent>> = vec![vec![]; quit_frame - 1];
    script.push(vec![InputEvent::KeyDown(Key::Down), InputEvent::Quit]);
    script.push(vec![InputEvent::KeyDown(Key::Left)]);

    let mut render_loop = spawn_loop(script);
    let report = run_with_limit(&mut render_loop, None).await;

    assert_eq!(report.state, LoopState::Stopped);
    assert_eq!(report.frames, quit_frame as u64);
    assert_eq!(render_loop.surface().present_count(), quit_frame);
    assert_eq!(render_loop.surface().ops().last(), Some(&SurfaceOp::Present));

    // The quit frame still integrated the press that came with it
    assert_eq!(
        render_loop.surface().last_presented_actor().map(|a| a.y),
        Some(481)
    );
    assert_eq!(render_loop.input().remaining(), 1);
}

#[tokio::test]
async fn loop_runs_until_harness_limit_without_quit() {
    let mut render_loop = spawn_loop(vec![]);
    let report = run_with_limit(&mut render_loop, Some(500)).await;

    assert_eq!(report.state, LoopState::Running);
    assert_eq!(report.frames, 500);
    assert_eq!(render_loop.surface().present_count(), 500);
}

#[tokio::test]
async fn every_frame_clears_before_drawing() {
    let mut render_loop = spawn_loop(vec![vec![InputEvent::KeyDown(Key::Up)]]);
    run_with_limit(&mut render_loop, Some(3)).await;

    let ops = render_loop.surface().ops();
    assert_eq!(ops.len(), 9);
    for chunk in ops.chunks(3) {
        assert_eq!(chunk[0], SurfaceOp::Clear);
        assert!(matches!(chunk[1], SurfaceOp::DrawActor(_)));
        assert_eq!(chunk[2], SurfaceOp::Present);
    }
}

#[tokio::test]
async fn paced_loop_still_honours_limit() {
    let mut render_loop = spawn_loop(vec![]);
    let mut pacer = FramePacer::new(200);
    let report = timeout(
        Duration::from_millis(TIMEOUT_MS),
        render_loop.run(&mut pacer, Some(5)),
    )
    .await
    .expect("render loop timed out")
    .unwrap();

    assert_eq!(report.frames, 5);
}
