use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Local;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use sob_tally::action::Action;
use sob_tally::analysis::{analyze, Report};
use sob_tally::app::App;
use sob_tally::chart::ChartData;
use sob_tally::config::AnalysisConfig;
use sob_tally::export::load_messages;
use sob_tally::tui::{self, Tui};

fn main() -> Result<()> {
    init_logging();

    // Optional single argument: path to config.yaml
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AnalysisConfig::discover(config_path.as_deref())?;

    let paths = config.input_paths()?;
    let messages = load_messages(&paths).context("Failed to load chat exports")?;

    let matcher = config.matcher();
    let analysis = analyze(&messages, &matcher)?;

    println!(
        "Beginning analysis of {}'s {} emoji use...",
        config.labels.subject, config.labels.marker_name
    );
    let report = Report::build(&analysis, &config.labels, &Local)?;
    println!("{report}");

    println!("Now plotting out data on graph...");
    let charts = ChartData::build(&analysis, &config.chart, &Local);
    let app = App::new(report, charts, config.labels.clone(), &matcher);

    let mut terminal = tui::init()?;
    let result = run(&mut terminal, app);
    tui::restore()?;

    result
}

/// Logs go to stderr; quiet unless RUST_LOG asks for more
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

/// Main event loop
fn run(terminal: &mut Tui, mut app: App) -> Result<()> {
    let frame_rate = Duration::from_millis(16);
    let tick_rate = Duration::from_millis(250);
    let mut last_frame = Instant::now();

    loop {
        let elapsed = last_frame.elapsed();
        last_frame = Instant::now();
        terminal.draw(|frame| app.render_with_effects(frame, elapsed))?;

        // Redraw quickly only while an effect is playing
        let timeout = if app.effects.is_animating() { frame_rate } else { tick_rate };

        let action = if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.action_for_key(key),
                _ => Action::None,
            }
        } else {
            Action::Tick
        };
        app.handle_action(action);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
