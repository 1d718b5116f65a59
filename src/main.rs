use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use vidq::api::ApiClient;
use vidq::app::App;
use vidq::cli::{Cli, Command};
use vidq::config::{ConfigResult, load_config, load_config_from_path};

/// Longest the loop sleeps when nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(&cli)?;

    let ConfigResult {
        mut config,
        warning,
    } = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };
    cli.apply_overrides(&mut config);

    let client = ApiClient::new(&config.api)?;

    if let Some(Command::Probe { endpoint, arg }) = &cli.command {
        return probe(&client, *endpoint, arg.as_deref());
    }

    let mut app = App::new(&config, client, cli.start_page());
    app.status_message = warning;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        // Wake up in time for the next debounced lookup
        let timeout = app.poll_timeout(Instant::now(), IDLE_POLL);
        if event::poll(timeout)? {
            let event = event::read()?;
            app.handle_event(event, Instant::now());
        }

        app.tick(Instant::now());

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Send `log` output to a file when asked to; the terminal belongs to the UI
fn init_logging(cli: &Cli) -> Result<()> {
    let path = cli
        .log_file
        .clone()
        .or_else(|| std::env::var_os("VIDQ_LOG").map(PathBuf::from));
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(&path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    log::info!("vidq {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
    Ok(())
}

fn probe(client: &ApiClient, endpoint: vidq::cli::ProbeEndpoint, arg: Option<&str>) -> Result<()> {
    let request = endpoint.request(arg)?;
    let query: Vec<(&str, &str)> = request
        .query
        .iter()
        .map(|(key, value)| (*key, value.as_str()))
        .collect();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let json = runtime.block_on(client.raw(&request.path, &query))?;
    println!("{}", json);
    Ok(())
}
