use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::MissedTickBehavior;
use tracing::info;

use moana_insights::{events, logging, ui, App, DashboardData, Settings, ThemeChoice};
use moana_types::{LoadingFlags, Region};

#[derive(Parser, Debug)]
#[command(name = "moana")]
#[command(about = "Terminal dashboard for coral reef monitoring stations")]
struct Args {
    /// Configuration file (default: moana.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Delay before the station map appears (e.g. "1500ms", "1.5s")
    #[arg(long)]
    map_delay: Option<String>,

    /// Delay before the sidebar widgets appear
    #[arg(long)]
    widgets_delay: Option<String>,

    /// Delay before the charts appear
    #[arg(long)]
    charts_delay: Option<String>,

    /// Color theme
    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,

    /// Redraw interval in milliseconds
    #[arg(long)]
    tick: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Export dashboard data to JSON file and exit
    #[arg(short, long)]
    export: Option<PathBuf>,
}

impl Args {
    /// Resolve file and environment settings, then apply flags on top.
    fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::load(self.config.as_deref())?;

        let delays = [
            (Region::Map, &self.map_delay),
            (Region::Widgets, &self.widgets_delay),
            (Region::Charts, &self.charts_delay),
        ];
        for (region, value) in delays {
            if let Some(value) = value {
                settings.override_delay(region, value)?;
            }
        }
        if let Some(theme) = self.theme {
            settings.ui.theme = theme;
        }
        if let Some(tick) = self.tick {
            settings.ui.tick_ms = tick;
        }
        if let Some(path) = &self.log_file {
            settings.logging.file = Some(path.clone());
        }
        Ok(settings)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = args.settings()?;
    logging::init_logging(&settings.logging)?;

    // Handle export mode (non-interactive)
    if let Some(export_path) = args.export {
        return export_to_file(&export_path);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_tui(settings))
}

/// Run the TUI until the user quits
async fn run_tui(settings: Settings) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    // Mount the dashboard; the reveal starts with the first frame
    let mut app = App::new(settings.delays, ui::Theme::from_choice(settings.ui.theme));
    info!(delays = ?settings.delays, "dashboard starting");

    let result = run_app(&mut terminal, &mut app, &settings).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// What woke the run loop.
enum Wake {
    Reveal(LoadingFlags),
    Tick,
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    settings: &Settings,
) -> Result<()> {
    let mut ticker = tokio::time::interval(settings.ui.tick());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    app.start_reveal();

    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        let wake = tokio::select! {
            Some(flags) = app.next_update() => Wake::Reveal(flags),
            _ = ticker.tick() => Wake::Tick,
        };

        match wake {
            Wake::Reveal(flags) => app.apply_flags(flags),
            Wake::Tick => {
                // Drain input without blocking the runtime
                while let Some(event) = events::poll_event(std::time::Duration::ZERO)? {
                    events::handle_event(app, event);
                    if !app.running {
                        break;
                    }
                }
                app.on_tick();
            }
        }

        // Transitions that landed together show up in the same frame
        app.drain_updates();
    }

    Ok(())
}

/// Export dashboard data, with every region loaded, to a JSON file
fn export_to_file(export_path: &std::path::Path) -> Result<()> {
    let mut flags = LoadingFlags::new();
    for region in Region::ALL {
        flags.mark_ready(region);
    }
    DashboardData::load().export(flags, export_path)?;

    println!("Exported dashboard data to: {}", export_path.display());
    Ok(())
}
