use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

use taskdeck::api;
use taskdeck::app::App;
use taskdeck::config::{self, Config};
use taskdeck::error::TaskdeckError;

/// Terminal client for the Taskdeck task manager
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Terminal client for the Taskdeck task manager with live notifications and Slack integration setup"
)]
struct Args {
    /// Server URL (overrides the config file)
    #[arg(long)]
    server: Option<String>,
}

fn main() -> Result<()> {
    // Writes to /tmp/taskdeck-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        if let Ok(log_file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/taskdeck-debug.log")
        {
            env_logger::Builder::new()
                .filter_level(log::LevelFilter::Debug)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .format(|buf, record| {
                    use std::time::SystemTime;
                    let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                    writeln!(
                        buf,
                        "[{}] [{}] {}",
                        datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                        record.level(),
                        record.args()
                    )
                })
                .init();

            log::debug!("=== TASKDECK DEBUG SESSION STARTED ===");
        }
    }

    color_eyre::install()?;

    // Load config early so the server URL can be validated before the
    // terminal is touched
    let config_result = config::load_config();

    let args = Args::parse();

    let base_url = resolve_server_url(args.server.as_deref(), &config_result.config)?;

    let terminal = init_terminal()?;

    let app = App::new(base_url, &config_result.config);
    let result = run(terminal, app, config_result);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== TASKDECK DEBUG SESSION ENDED ===");

    Ok(())
}

/// CLI flag wins over the config file; either way the URL must parse.
fn resolve_server_url(cli: Option<&str>, config: &Config) -> Result<reqwest::Url, TaskdeckError> {
    let raw = cli.unwrap_or(&config.server.url);
    reqwest::Url::parse(raw).map_err(|_| TaskdeckError::InvalidServerUrl(raw.to_string()))
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    config_result: config::ConfigResult,
) -> Result<()> {
    if let Some(warning) = config_result.warning {
        app.toast.show_warning(&warning);
    }

    setup_api_worker(&mut app);

    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Set up the API worker thread and channels
fn setup_api_worker(app: &mut App) {
    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    app.api.set_channels(request_tx, response_rx);

    api::spawn_worker(app.base_url.clone(), request_rx, response_tx);
}
