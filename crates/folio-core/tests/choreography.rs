use std::time::Duration;

use folio_core::animation::{ElementId, Property, PropertyTimeline, TriggerSpec};
use folio_core::scroll::{NativeInput, SmoothScrollDriver};
use folio_core::section::{SectionBounds, SectionDescriptor};
use folio_core::{AppConfig, ScrollConfig, Stage};

const FRAME: Duration = Duration::from_millis(16);

fn three_sections() -> Stage {
    let mut stage = Stage::new(&AppConfig::default());
    stage.resize(400.0, 100.0);
    let page = stage.mount("page");
    stage
        .register_section(page, SectionDescriptor::fixed("a", SectionBounds::new(0.0, 100.0)))
        .unwrap();
    stage
        .register_section(page, SectionDescriptor::fixed("b", SectionBounds::new(100.0, 300.0)))
        .unwrap();
    stage
        .register_section(page, SectionDescriptor::fixed("c", SectionBounds::new(300.0, 400.0)))
        .unwrap();
    stage.finish_mount(page).unwrap();
    stage
}

fn fade(ms: u64) -> PropertyTimeline {
    PropertyTimeline::new(Duration::from_millis(ms)).track(Property::Opacity, 0.0, 1.0)
}

#[test]
fn smoothed_offset_converges_without_overshoot() {
    let mut driver = SmoothScrollDriver::new(ScrollConfig::default());
    driver.set_max_extent(1000.0);
    driver.on_native_delta(500.0);

    let frames = [16u64, 8, 33, 16, 50, 16, 4, 16];
    let mut previous = driver.smoothed_offset();
    let mut steps = 0;
    while driver.needs_frame() {
        let dt = Duration::from_millis(frames[steps % frames.len()]);
        let offset = driver.step(dt);
        assert!(offset >= previous, "moved backwards: {previous} -> {offset}");
        assert!(offset <= 500.0, "overshot: {offset}");
        previous = offset;
        steps += 1;
        assert!(steps < 10_000, "never settled");
    }
    assert_eq!(driver.smoothed_offset(), 500.0);
}

#[test]
fn teardown_is_idempotent() {
    let mut stage = three_sections();
    let owner = stage.mount("hero");
    let element = stage.binding_mut().create_element(owner, "title").unwrap();
    stage.finish_mount(owner).unwrap();
    let handle = stage
        .binding_mut()
        .bind(element, TriggerSpec::Mount, fade(500))
        .unwrap();

    assert!(stage.binding_mut().unbind(handle));
    assert!(!stage.binding_mut().unbind(handle));

    let first = stage.unmount(owner).unwrap();
    let second = stage.unmount(owner).unwrap();
    assert_eq!(first.removed_elements, 1);
    assert_eq!(second.removed_elements, 0);
    assert_eq!(second.released_handles, 0);

    stage.destroy();
    stage.destroy();
    assert!(stage.is_destroyed());
    assert!(stage.driver().is_destroyed());
}

#[test]
fn no_writes_after_unmount() {
    let mut stage = three_sections();

    let doomed = stage.mount("skills");
    let bars: Vec<ElementId> = (0..3)
        .map(|i| stage.binding_mut().create_element(doomed, format!("bar-{i}")).unwrap())
        .collect();
    stage.finish_mount(doomed).unwrap();
    stage.binding_mut().bind_group(
        &bars,
        TriggerSpec::Mount,
        &fade(1000).yoyo(),
        Duration::from_millis(100),
    );

    let survivor = stage.mount("marquee");
    let text = stage.binding_mut().create_element(survivor, "text").unwrap();
    stage.finish_mount(survivor).unwrap();
    let survivor_handle = stage
        .binding_mut()
        .bind(text, TriggerSpec::Mount, fade(5000))
        .unwrap();

    for _ in 0..10 {
        stage.tick(FRAME);
    }
    let teardown = stage.unmount(doomed).unwrap();
    assert_eq!(teardown.released_handles, 3);
    stage.drain_events();

    let survivor_writes = stage.binding().element(text).unwrap().writes();
    for _ in 0..50 {
        stage.tick(FRAME);
    }

    for bar in &bars {
        assert!(stage.binding().element(*bar).is_none());
    }
    assert_eq!(stage.binding().live_handles(), 1);
    assert!(stage
        .drain_events()
        .iter()
        .all(|event| event.handle() == survivor_handle));
    assert!(stage.binding().element(text).unwrap().writes() > survivor_writes);
}

#[test]
fn no_writes_after_unbind() {
    let mut stage = three_sections();
    let owner = stage.mount("contact");
    let button = stage.binding_mut().create_element(owner, "button").unwrap();
    stage.finish_mount(owner).unwrap();
    let handle = stage
        .binding_mut()
        .bind(button, TriggerSpec::Mount, fade(1000).yoyo())
        .unwrap();

    for _ in 0..5 {
        stage.tick(FRAME);
    }
    stage.binding_mut().unbind(handle);
    let writes = stage.binding().element(button).unwrap().writes();

    for _ in 0..50 {
        stage.tick(FRAME);
    }
    assert_eq!(stage.binding().element(button).unwrap().writes(), writes);
}

#[test]
fn active_section_follows_band_crossings() {
    let mut stage = three_sections();
    // line = offset + 40
    let expectations = [
        (0.0, "a"),
        (59.0, "a"),
        (60.0, "b"),
        (259.0, "b"),
        (260.0, "c"),
        (100.0, "b"),
        (0.0, "a"),
    ];
    for (offset, expected) in expectations {
        stage.jump_to(offset);
        let state = stage.tick(FRAME);
        assert_eq!(
            state.active_section_id.as_deref(),
            Some(expected),
            "offset {offset}"
        );
    }
}

#[test]
fn last_navigation_wins() {
    let mut stage = three_sections();
    stage.tick(FRAME);

    assert!(stage.go_to("c"));
    for _ in 0..10 {
        stage.tick(FRAME);
    }
    assert!(stage.go_to("b"));
    // unknown targets leave the in-flight scroll alone
    assert!(!stage.go_to("missing"));

    for _ in 0..200 {
        stage.tick(FRAME);
    }
    assert_eq!(stage.state().smoothed_offset, 100.0);
    assert_eq!(stage.state().active_section_id.as_deref(), Some("b"));
    assert!(!stage.driver().is_animating());
}

#[test]
fn stagger_offsets_group_members() {
    let mut stage = three_sections();
    let owner = stage.mount("grid");
    let cards: Vec<ElementId> = (0..5)
        .map(|i| stage.binding_mut().create_element(owner, format!("card-{i}")).unwrap())
        .collect();
    stage.finish_mount(owner).unwrap();

    let group = stage
        .binding_mut()
        .bind_group(&cards, TriggerSpec::Mount, &fade(1000), Duration::from_millis(100))
        .unwrap();
    assert_eq!(group.total_duration, Duration::from_millis(1400));
    assert_eq!(group.starts[4], Duration::from_millis(400));

    let step = Duration::from_millis(10);
    for tick in 1..=150u64 {
        stage.tick(step);
        for (i, card) in cards.iter().enumerate() {
            // a card is still at its starting value until its offset has passed
            if tick * 10 + 10 <= i as u64 * 100 {
                assert_eq!(stage.binding().element(*card).unwrap().props().opacity, 0.0);
            }
        }
    }
    for card in &cards {
        assert_eq!(stage.binding().element(*card).unwrap().props().opacity, 1.0);
    }
}

#[test]
fn wheel_input_moves_progress() {
    let mut stage = three_sections();
    stage.on_input(NativeInput::Wheel(10.0));
    let mut last = 0.0;
    for _ in 0..300 {
        last = stage.tick(FRAME).progress;
    }
    assert!((last - 0.1).abs() < 1e-9);
}
