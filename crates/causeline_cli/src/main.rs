//! CLI demo entry point.
//!
//! # Responsibility
//! - Drive `causeline_core` through the sample timeline and one scripted drag.
//! - Keep output deterministic for quick local sanity checks.
//! - Write rolling logs when `CAUSELINE_LOG_DIR` names an absolute directory.

use causeline_core::{
    default_log_level, init_logging, Frame, InputOutcome, PointerInput, Renderer, Timeline,
};
use kurbo::{Line, Point, Size};
use std::process::ExitCode;

const CANVAS_WIDTH: f64 = 800.0;
const CANVAS_HEIGHT: f64 = 600.0;
const LOG_DIR_ENV: &str = "CAUSELINE_LOG_DIR";

/// Prints frames as plain text lines.
struct TextRenderer;

impl Renderer for TextRenderer {
    fn draw(&mut self, frame: &Frame) {
        println!("axis x={}", frame.axis.p0.x);
        for label in &frame.date_labels {
            println!("row label=\"{}\" y={}", label.text, label.origin.y);
        }
        for event in &frame.events {
            println!(
                "event text=\"{}\" x={} y={} w={}",
                event.text,
                event.rect.x0,
                event.rect.y0,
                event.rect.width()
            );
        }
        for connector in &frame.connectors {
            println!(
                "edge same_row={} center=({}, {}) radius={}",
                connector.same_row,
                connector.arc.center.x,
                connector.arc.center.y,
                connector.arc.radii.x
            );
        }
    }

    fn segment(&mut self, line: Line) {
        println!(
            "segment from=({}, {}) to=({}, {})",
            line.p0.x, line.p0.y, line.p1.x, line.p1.y
        );
    }
}

/// Drags across the first and third markers, forwarding feedback segments.
fn scripted_drag(timeline: &mut Timeline, renderer: &mut dyn Renderer) -> InputOutcome {
    let path: Vec<Point> = [0, 2]
        .iter()
        .filter_map(|index| timeline.layout().placements.get(*index))
        .map(|placement| placement.bounds().center())
        .collect();
    timeline.dispatch(PointerInput::Down(Point::ZERO));
    for point in path {
        if let InputOutcome::Segment(line) = timeline.dispatch(PointerInput::Move(point)) {
            renderer.segment(line);
        }
    }
    timeline.dispatch(PointerInput::Up)
}

fn main() -> ExitCode {
    println!("causeline_core version={}", causeline_core::core_version());

    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let mut timeline = match Timeline::demo(Size::new(CANVAS_WIDTH, CANVAS_HEIGHT)) {
        Ok(timeline) => timeline,
        Err(err) => {
            eprintln!("failed to build demo timeline: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut renderer = TextRenderer;
    let outcome = scripted_drag(&mut timeline, &mut renderer);
    println!("gesture outcome={outcome:?}");

    timeline.render(&mut renderer);
    ExitCode::SUCCESS
}
