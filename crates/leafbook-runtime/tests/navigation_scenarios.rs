//! End-to-end navigation scenarios on a four-leaf portfolio book.

use std::time::Duration;

use leafbook_core::{
    Animatable, AnimatableRef, BookConfig, BookLayout, ClickTarget, EffectKind, FaceId,
    InputEvent, KeyCode, Viewport,
};
use leafbook_runtime::{FlipBook, RecordingView, ViewCall};
use web_time::Instant;

const SETTLE: Duration = Duration::from_millis(800);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

const LAYOUT: &str = r#"
[[leaves]]
[leaves.front]
animatables = [
    { kind = "split_text", text = "Portfolio", delay_ms = 0 },
    { kind = "effect", effect = "fade", delay_ms = 300 },
]
[leaves.back]
animatables = [{ kind = "effect", effect = "left", delay_ms = 100 }]

[[leaves]]
[leaves.front]
animatables = [
    { kind = "skill_bar", width = 90.0, delay_ms = 200 },
    { kind = "skill_percent", target = 90, delay_ms = 200 },
]
[leaves.back]
animatables = [{ kind = "timeline_marker", delay_ms = 150 }]

[[leaves]]
[leaves.front]
animatables = []
[leaves.back]
animatables = []

[[leaves]]
[leaves.front]
animatables = [{ kind = "effect", effect = "pop" }]
[leaves.back]
animatables = [{ kind = "effect", effect = "line", delay_ms = 50 }]
"#;

fn session() -> FlipBook<RecordingView> {
    let layout = BookLayout::from_toml_str(LAYOUT).expect("layout parses");
    FlipBook::new(&layout, BookConfig::default(), RecordingView::new()).expect("valid layout")
}

fn at(face: FaceId, index: usize) -> AnimatableRef {
    AnimatableRef { face, index }
}

fn flipped(book: &FlipBook<RecordingView>) -> Vec<bool> {
    book.controller()
        .book()
        .leaves()
        .iter()
        .map(|l| l.is_flipped())
        .collect()
}

#[test]
fn setup_publishes_split_text_offsets() {
    let book = session();
    let delays = book
        .controller()
        .view()
        .char_delays(at(FaceId::front(0), 0))
        .expect("split text offsets published");
    assert_eq!(delays.len(), "Portfolio".len());
    assert_eq!(delays[0], ms(0));
    assert_eq!(delays[8], ms(400));
}

#[test]
fn zero_frame_interval_is_rejected_at_setup() {
    let layout = BookLayout::from_toml_str(LAYOUT).expect("layout parses");
    let mut config = BookConfig::default();
    config.timing.frame_interval_ms = 0;
    assert!(FlipBook::new(&layout, config, RecordingView::new()).is_err());
}

#[test]
fn intro_reveals_cover_after_delay() {
    let mut book = session();
    let t0 = Instant::now();
    book.start(t0);

    book.tick(t0 + ms(499));
    assert!(!book.controller().view().is_active(at(FaceId::front(0), 0)));

    // Intro at 500ms, split text 100ms later, fade 300ms later.
    book.tick(t0 + ms(600));
    assert!(book.controller().view().is_active(at(FaceId::front(0), 0)));
    assert!(!book.controller().view().is_active(at(FaceId::front(0), 1)));
    book.tick(t0 + ms(800));
    assert!(book.controller().view().is_active(at(FaceId::front(0), 1)));
    assert!(!book.controller().is_busy());
}

#[test]
fn next_from_start_flips_leaf_zero() {
    let mut book = session();
    let t0 = Instant::now();
    book.handle_input(&InputEvent::Key(KeyCode::Right), t0);
    assert_eq!(book.controller().position(), 2);
    assert_eq!(flipped(&book), vec![true, false, false, false]);
}

#[test]
fn next_at_end_changes_nothing() {
    let mut book = session();
    let t0 = Instant::now();
    book.handle_input(&InputEvent::Click(ClickTarget::Indicator(4)), t0);
    book.tick(t0 + SETTLE);
    assert_eq!(book.controller().position(), 8);

    let before = book.controller().view().calls().len();
    let r = book.handle_input(&InputEvent::Key(KeyCode::Down), t0 + SETTLE);
    assert!(!r.navigated);
    assert_eq!(book.controller().position(), 8);
    assert_eq!(book.controller().view().calls().len(), before);
}

#[test]
fn jump_back_to_zero_unflips_descending() {
    let mut book = session();
    let t0 = Instant::now();
    book.controller_mut().navigate(4, t0);
    book.tick(t0 + SETTLE);
    book.controller_mut().view_mut().clear_calls();

    assert!(book.controller_mut().navigate(0, t0 + SETTLE));
    assert_eq!(book.controller().view().flips(), vec![(1, false), (0, false)]);
    assert_eq!(book.controller().position(), 0);
    assert_eq!(flipped(&book), vec![false; 4]);
}

#[test]
fn indicator_click_jumps_regardless_of_position() {
    let mut book = session();
    let t0 = Instant::now();
    let r = book.handle_input(&InputEvent::Click(ClickTarget::Indicator(3)), t0);
    assert!(r.navigated);
    assert_eq!(book.controller().position(), 6);
    assert_eq!(flipped(&book), vec![true, true, true, false]);
    assert_eq!(book.controller().view().indicator(), Some(3));
}

#[test]
fn transition_swaps_active_faces() {
    let mut book = session();
    let t0 = Instant::now();
    book.start(t0);
    book.tick(t0 + ms(1_000));
    assert!(book.controller().view().is_active(at(FaceId::front(0), 1)));

    let t1 = t0 + ms(1_000);
    book.handle_input(&InputEvent::Wheel { delta_y: 60.0 }, t1);
    // Old face reset synchronously.
    assert!(!book.controller().view().is_active(at(FaceId::front(0), 0)));
    assert!(!book.controller().view().is_active(at(FaceId::front(0), 1)));

    // New faces wait for the settle delay.
    book.tick(t1 + SETTLE - ms(1));
    assert!(!book.controller().view().is_active(at(FaceId::back(0), 0)));
    book.tick(t1 + SETTLE + ms(100));
    assert!(book.controller().view().is_active(at(FaceId::back(0), 0)));

    book.tick(t1 + SETTLE + ms(2_000));
    let view = book.controller().view();
    assert_eq!(view.fill(at(FaceId::front(1), 0)), Some(90.0));
    assert_eq!(view.counter_text(at(FaceId::front(1), 1)), Some("90%"));
}

#[test]
fn counter_cannot_repaint_after_leaving_face() {
    let mut book = session();
    let t0 = Instant::now();
    let counter = at(FaceId::front(1), 1);

    book.controller_mut().navigate(2, t0);
    // Settle at 800, counter starts at 1000; leave mid-run.
    let t1 = t0 + ms(1_300);
    book.tick(t1);
    assert!(book.controller().view().counter_values(counter).last().is_some_and(|v| *v < 90));

    book.controller_mut().navigate(4, t1);
    assert_eq!(book.controller().view().counter_text(counter), Some("0%"));

    book.controller_mut().view_mut().clear_calls();
    book.tick(t1 + ms(5_000));
    let repaint = book
        .controller()
        .view()
        .calls()
        .iter()
        .any(|call| matches!(call, ViewCall::CounterText { target, .. } if *target == counter));
    assert!(!repaint, "stale counter frame reached the view");
    assert_eq!(book.controller().view().counter_text(counter), Some("0%"));
}

#[test]
fn revisiting_face_restarts_counter_cleanly() {
    let mut book = session();
    let t0 = Instant::now();
    let counter = at(FaceId::front(1), 1);

    book.controller_mut().navigate(2, t0);
    let t1 = t0 + ms(1_300);
    book.tick(t1);
    book.controller_mut().navigate(4, t1);
    let t2 = t1 + SETTLE;
    book.tick(t2);
    book.controller_mut().navigate(2, t2);
    book.controller_mut().view_mut().clear_calls();
    book.tick(t2 + ms(5_000));

    let values = book.controller().view().counter_values(counter);
    assert!(!values.is_empty());
    assert!(values.windows(2).all(|w| w[0] <= w[1]), "{values:?}");
    assert_eq!(values.last().copied(), Some(90));
}

#[test]
fn swipe_and_wheel_ignored_while_busy() {
    let mut book = session();
    let t0 = Instant::now();
    book.handle_input(&InputEvent::Key(KeyCode::Char(' ')), t0);
    assert!(book.controller().is_busy());

    book.handle_input(&InputEvent::TouchStart { x: 400.0, y: 0.0 }, t0);
    let r = book.handle_input(
        &InputEvent::TouchEnd {
            x: 0.0,
            y: 0.0,
            viewport: Viewport::new(1280.0, 720.0),
        },
        t0,
    );
    assert_eq!(r.command, None);

    let r = book.handle_input(&InputEvent::Wheel { delta_y: 400.0 }, t0);
    assert_eq!(r.command, None);
    assert!(r.prevent_default);
    assert_eq!(book.input().wheel_accumulator(), 0.0);
    assert_eq!(book.controller().position(), 2);
}

#[test]
fn nav_controls_track_boundaries() {
    let mut book = session();
    let t0 = Instant::now();
    assert_eq!(book.controller().view().nav_enabled(), Some((false, true)));
    book.handle_input(&InputEvent::Click(ClickTarget::Next), t0);
    assert_eq!(book.controller().view().nav_enabled(), Some((true, true)));
    book.tick(t0 + SETTLE);
    book.handle_input(&InputEvent::Click(ClickTarget::Indicator(4)), t0 + SETTLE);
    assert_eq!(book.controller().view().nav_enabled(), Some((true, false)));
}

#[test]
fn missing_faces_are_skipped_not_fatal() {
    let mut layout = BookLayout::blank(2);
    layout.leaves[0].back = None;
    layout.leaves[1].front = Some(leafbook_core::FaceLayout::new(vec![Animatable::effect(
        EffectKind::Scale,
        ms(0),
    )]));
    let mut book =
        FlipBook::new(&layout, BookConfig::default(), RecordingView::new()).expect("valid");
    let t0 = Instant::now();
    assert!(book.controller_mut().next(t0));
    book.tick(t0 + SETTLE);
    assert!(book.controller().view().is_active(at(FaceId::front(1), 0)));
    assert!(!book.controller().is_busy());
}
