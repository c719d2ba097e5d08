use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use serde_json::json;
use tracing::info;

use folio_core::content::PortfolioContent;
use folio_core::AppConfig;
use folio_tui::{app::App, input::Action};

/// One scripted input
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Wheel notches, positive scrolls down
    Wheel(f64),
    GoTo(String),
    Next,
    Connect,
    Top,
    /// Advance this many frames
    Wait(u32),
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };
        match (name, arg) {
            ("wheel", Some(n)) => n
                .parse()
                .map(Step::Wheel)
                .map_err(|_| format!("invalid wheel amount: {n}")),
            ("goto", Some(id)) if !id.is_empty() => Ok(Step::GoTo(id.to_string())),
            ("wait", Some(n)) => n
                .parse()
                .map(Step::Wait)
                .map_err(|_| format!("invalid frame count: {n}")),
            ("next", None) => Ok(Step::Next),
            ("connect", None) => Ok(Step::Connect),
            ("top", None) => Ok(Step::Top),
            _ => Err(format!(
                "unknown step `{s}` (wheel:N, goto:ID, next, connect, top, wait:N)"
            )),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Wheel(n) => write!(f, "wheel:{n}"),
            Step::GoTo(id) => write!(f, "goto:{id}"),
            Step::Next => write!(f, "next"),
            Step::Connect => write!(f, "connect"),
            Step::Top => write!(f, "top"),
            Step::Wait(n) => write!(f, "wait:{n}"),
        }
    }
}

pub fn default_script() -> Vec<Step> {
    vec![
        Step::Wait(60),
        Step::Wheel(5.0),
        Step::Wait(90),
        Step::GoTo("skills".into()),
        Step::Wait(150),
        Step::Next,
        Step::Wait(150),
        Step::Top,
        Step::Wait(150),
    ]
}

pub struct ReplayOptions {
    pub width: u16,
    pub height: u16,
    pub frame_ms: u64,
    pub json: bool,
}

/// Active section change seen while replaying
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub frame: u64,
    pub from: Option<String>,
    pub to: Option<String>,
    pub offset: f64,
}

pub fn run(
    config: &AppConfig,
    content: PortfolioContent,
    steps: &[Step],
    options: &ReplayOptions,
) -> Result<()> {
    let mut app = App::new(config, content, options.width, options.height)?;
    info!(
        steps = steps.len(),
        width = options.width,
        height = options.height,
        "Replaying"
    );

    let frame = Duration::from_millis(options.frame_ms.max(1));
    let mut replay = Replay::default();
    for step in steps {
        let transitions = replay.apply(&mut app, step, frame);
        let state = app.stage.state();
        if options.json {
            let line = json!({
                "step": step.to_string(),
                "frame": replay.frame,
                "state": state,
            });
            println!("{line}");
            continue;
        }
        for t in transitions {
            println!(
                "frame {:>5}  {:>8} -> {:<8}  offset {:>7.1}",
                t.frame,
                t.from.as_deref().unwrap_or("-"),
                t.to.as_deref().unwrap_or("-"),
                t.offset
            );
        }
        println!(
            "  {:<12} progress {:>3}%  active {}",
            step.to_string(),
            state.percent(),
            state.active_section_id.as_deref().unwrap_or("-")
        );
    }

    app.shutdown();
    Ok(())
}

#[derive(Default)]
struct Replay {
    frame: u64,
    active: Option<String>,
}

impl Replay {
    fn apply(&mut self, app: &mut App, step: &Step, frame: Duration) -> Vec<Transition> {
        match step {
            Step::Wheel(notches) => app.on_wheel(*notches),
            Step::GoTo(id) => {
                if !app.stage.go_to(id) {
                    println!("  unknown section `{id}`, skipped");
                }
            }
            Step::Next => app.handle_action(Action::NextSection),
            Step::Connect => app.handle_action(Action::Connect),
            Step::Top => app.handle_action(Action::JumpToTop),
            Step::Wait(frames) => return self.advance(app, *frames, frame),
        }
        Vec::new()
    }

    fn advance(&mut self, app: &mut App, frames: u32, frame: Duration) -> Vec<Transition> {
        let mut transitions = Vec::new();
        for _ in 0..frames {
            app.tick_by(frame);
            self.frame += 1;
            let state = app.stage.state();
            if state.active_section_id != self.active {
                transitions.push(Transition {
                    frame: self.frame,
                    from: self.active.take(),
                    to: state.active_section_id.clone(),
                    offset: state.smoothed_offset,
                });
                self.active = state.active_section_id.clone();
            }
        }
        transitions
    }
}
