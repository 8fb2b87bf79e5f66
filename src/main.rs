//! Headless demo: drives a shared editor from a logic thread and a render
//! thread, replaying a scripted session into a recording surface.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wireboard::debounce::SystemClock;
use wireboard::geometry::Vec2;
use wireboard::input::{Button, PolledInput};
use wireboard::perf::{DriverStats, TARGET_FRAME_MS};
use wireboard::render::RecordingSurface;
use wireboard::{Editor, EditorSettings, SharedEditor};

/// One scripted step, applied at the start of a logic tick.
enum Step {
    Cursor(f32, f32),
    Press(Button),
    Release(Button),
    Click { shift: bool },
    Wait,
}

fn script() -> Vec<Step> {
    use Step::*;
    vec![
        Cursor(40.0, 40.0),
        Press(Button::CreateNode),
        Release(Button::CreateNode),
        Cursor(240.0, 80.0),
        Wait,
        Wait,
        Wait,
        Press(Button::CreateNode),
        Release(Button::CreateNode),
        // drag a wire from the first node to the second
        Cursor(50.0, 50.0),
        Press(Button::Connect),
        Release(Button::Connect),
        Cursor(150.0, 70.0),
        Cursor(250.0, 90.0),
        Click { shift: false },
        // box-select both and nudge them
        Cursor(0.0, 0.0),
        Wait,
        Wait,
        Press(Button::BoxSelect),
        Release(Button::BoxSelect),
        Cursor(600.0, 400.0),
        Click { shift: false },
        Wait,
        Wait,
        Wait,
        Wait,
    ]
}

fn apply(editor: &SharedEditor<PolledInput>, step: &Step) {
    let mut editor = editor.lock();
    match step {
        Step::Cursor(x, y) => editor.set_cursor(Vec2::new(*x, *y)),
        Step::Press(button) => editor.input_mut().press(*button),
        Step::Release(button) => editor.input_mut().release(*button),
        Step::Click { shift } => editor.click(*shift),
        Step::Wait => {}
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wireboard=info")),
        )
        .init();

    let settings = EditorSettings::load();
    let tick_interval = settings.tick_interval();
    let frame_interval = Duration::from_secs_f64(TARGET_FRAME_MS / 1000.0);

    let editor = Editor::new(&settings, PolledInput::new(), SystemClock::new()).into_shared();
    let running = Arc::new(AtomicBool::new(true));

    let renderer = {
        let editor = Arc::clone(&editor);
        let running = Arc::clone(&running);
        thread::Builder::new()
            .name("render".into())
            .spawn(move || {
                let mut surface = RecordingSurface::new();
                let mut stats = DriverStats::new("render", frame_interval);
                while running.load(Ordering::Relaxed) {
                    surface.clear();
                    stats.measure(|| editor.lock().render(&mut surface));
                    thread::sleep(frame_interval);
                }
                stats.log_summary();
                (stats.total(), surface.commands().len())
            })
            .context("failed to spawn render thread")?
    };

    let mut tick_stats = DriverStats::new("tick", tick_interval);
    for step in script() {
        apply(&editor, &step);
        tick_stats.measure(|| editor.lock().tick());
        thread::sleep(tick_interval);
    }
    tick_stats.log_summary();

    running.store(false, Ordering::Relaxed);
    let (frames, last_frame_commands) = renderer
        .join()
        .map_err(|_| anyhow::anyhow!("render thread panicked"))?;

    let editor = editor.lock();
    info!(
        ticks = tick_stats.total(),
        frames,
        last_frame_commands,
        nodes = editor.nodes().len(),
        connections = editor.connections().len(),
        mode = %editor.current_mode(),
        "session finished"
    );
    Ok(())
}
