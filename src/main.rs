mod input;
mod ui;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use hexquest::build_info;
use hexquest::core::config::{GameConfig, LaunchOptions};
use hexquest::core::constants::{DEFAULT_HEX_RADIUS, FRAME_MS, MOVE_SPEED_PX};
use hexquest::hex::ViewportFit;
use hexquest::session::{frame, GameSession, LoopMode, SessionEvent, SessionSettings};
use hexquest::utils::logging;
use input::{handle_key, handle_mouse, InputResult, InputState};
use ratatui::layout::Rect;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use ui::board_scene::viewport_for;
use ui::game_common::game_layout;
use ui::sprites::Sprites;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("--version") | Some("-v") => {
            println!("{}", build_info::version_line());
            std::process::exit(0);
        }
        Some("--help") | Some("-h") => {
            println!("HexQuest - hex-grid learning adventure\n");
            println!("Usage: hexquest [options]\n");
            println!("Options:");
            println!("  -g, --grade <K|1-5>    Grade level for questions");
            println!("  -s, --subject <name>   addition, subtraction, multiplication, division,");
            println!("                         math-mixed, reading, science, vocabulary, music");
            println!("      --seed <n>         Reproducible grid generation");
            println!("  -v, --version          Show version information");
            println!("  -h, --help             Show this help message");
            std::process::exit(0);
        }
        _ => {}
    }

    let options = match LaunchOptions::parse(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'hexquest --help' for usage.");
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }
    log::info!("{}", build_info::version_line());

    let mut config = GameConfig::load();
    options.apply(&mut config);

    let sprites = Sprites::load();
    let mut session = GameSession::new(config, SessionSettings::default(), options.seed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session, &sprites);

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("terminal loop failed: {}", e);
    }
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut GameSession,
    sprites: &Sprites,
) -> io::Result<()> {
    let clock = Instant::now();
    let mut input = InputState::new();
    let mut board = Rect::default();

    loop {
        let now_ms = clock.elapsed().as_millis() as u64;

        // Refit the grid when the board area changes size.
        let layout = game_layout(terminal.size()?);
        if layout.content != board {
            board = layout.content;
            let (width, height) = viewport_for(board);
            session.resize(width, height, ViewportFit::compact());
            let scale = session.layout().radius / DEFAULT_HEX_RADIUS;
            session.set_move_speed((MOVE_SPEED_PX * scale).max(0.25));
            log::debug!("board resized to {}x{} cells", board.width, board.height);
        }

        if let Some(snapshot) = frame(session, LoopMode::Continuous, now_ms) {
            terminal.draw(|f| ui::draw_ui(f, &*session, &snapshot, sprites, &input))?;
        }

        for event in session.drain_events() {
            match event {
                SessionEvent::QuestionIssued { .. } | SessionEvent::Restarted => input.answer.clear(),
                SessionEvent::Victory | SessionEvent::Defeat => {
                    log::info!("run over: {:?}, score {}", event, session.score())
                }
                _ => {}
            }
        }

        if event::poll(Duration::from_millis(FRAME_MS))? {
            let now_ms = clock.elapsed().as_millis() as u64;
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match handle_key(key, session, &mut input, now_ms) {
                        InputResult::Quit => return Ok(()),
                        InputResult::Started => {
                            if let Err(e) = session.config().save() {
                                log::warn!("could not save config: {}", e);
                            }
                        }
                        InputResult::Continue => {}
                    }
                }
                Event::Mouse(mouse) => {
                    handle_mouse(mouse, session, board, now_ms);
                }
                _ => {}
            }
        }
    }
}
