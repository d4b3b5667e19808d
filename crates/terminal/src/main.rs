//! Terminal front end
//!
//! Plays reduced-rules chess from stdin: type moves like `e2e4`, and in
//! human-vs-ai mode the engine answers as Black.

mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use chess_core::{Difficulty, GlyphSet, Move, Square};
use game::{
    EngineOutcome, EngineReply, GameConfig, GameMode, GameStatus, MoveError, TurnController,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::{JoinError, JoinHandle};

use crate::render::BoardView;

fn print_usage() {
    println!("Reduced-rules chess");
    println!();
    println!("Usage:");
    println!("  chess_terminal [--config FILE] [--mode MODE] [--difficulty LEVEL]");
    println!("                 [--glyphs SET] [--delay-ms MS]");
    println!();
    println!("Modes:        human-vs-ai (default), human-vs-human");
    println!("Difficulty:   beginner (default), intermediate, expert");
    println!("Glyph sets:   classic, modern, medieval, fantasy, geometric, animals");
    println!();
    println!("Commands while playing:");
    println!("  e2e4 | e2 e4  - move a piece");
    println!("  moves e2      - show where the piece on e2 can go");
    println!("  board         - redraw the board");
    println!("  new           - start a new game");
    println!("  help          - show this text");
    println!("  quit          - leave");
}

/// Command-line overrides on top of the settings file.
#[derive(Debug, Default)]
struct Options {
    config: Option<PathBuf>,
    mode: Option<GameMode>,
    difficulty: Option<Difficulty>,
    glyphs: Option<GlyphSet>,
    delay_ms: Option<u64>,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut opts = Options::default();

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        if flag == "--help" || flag == "-h" {
            opts.help = true;
            i += 1;
            continue;
        }
        let value = args
            .get(i + 1)
            .ok_or_else(|| format!("{flag} needs a value"))?;
        match flag {
            "--config" | "-c" => opts.config = Some(PathBuf::from(value)),
            "--mode" | "-m" => opts.mode = Some(value.parse()?),
            "--difficulty" | "-d" => {
                opts.difficulty = Some(value.parse().map_err(|e| format!("{e}"))?)
            }
            "--glyphs" | "-g" => opts.glyphs = Some(value.parse().map_err(|e| format!("{e}"))?),
            "--delay-ms" => {
                opts.delay_ms = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid delay: {value}"))?,
                )
            }
            _ => return Err(format!("unknown option: {flag}")),
        }
        i += 2;
    }
    Ok(opts)
}

fn build_config(opts: &Options) -> Result<GameConfig, String> {
    let mut config = match &opts.config {
        Some(path) => GameConfig::load(path).map_err(|e| e.to_string())?,
        None => GameConfig::default(),
    };
    if let Some(mode) = opts.mode {
        config.mode = mode;
    }
    if let Some(difficulty) = opts.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(glyphs) = opts.glyphs {
        config.glyphs = glyphs;
    }
    if let Some(ms) = opts.delay_ms {
        config.thinking_delay_ms = ms;
    }
    Ok(config)
}

/// One line of player input.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Play(Move),
    Hints(Square),
    Board,
    NewGame,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let mut words = line.split_whitespace();
    match words.next() {
        Some("quit" | "exit" | "q") => Ok(Command::Quit),
        Some("new") => Ok(Command::NewGame),
        Some("board") => Ok(Command::Board),
        Some("help" | "?") => Ok(Command::Help),
        Some("moves") => {
            let sq = words.next().ok_or("usage: moves <square>")?;
            Square::from_algebraic(sq)
                .map(Command::Hints)
                .map_err(|e| e.to_string())
        }
        Some(_) => line
            .parse::<Move>()
            .map(Command::Play)
            .map_err(|e| e.to_string()),
        None => Err("empty input".to_string()),
    }
}

fn show(ctl: &TurnController) {
    let session = ctl.session();
    print!("{}", BoardView::new(session, ctl.config().glyphs).render());
    match session.status() {
        GameStatus::AwaitingMove(side) => println!("{side} to move"),
        GameStatus::Won(winner) => {
            println!("{winner} captured the king and wins. Type `new` to play again.")
        }
        GameStatus::Drawn => {
            println!("No moves left, the game is drawn. Type `new` to play again.")
        }
    }
}

/// The search running in the background, if any.
type Thinking = Option<JoinHandle<EngineReply>>;

/// Resolves when the background search finishes; never resolves while idle.
async fn engine_reply(thinking: &mut Thinking) -> Result<EngineReply, JoinError> {
    match thinking {
        Some(handle) => handle.await,
        None => std::future::pending().await,
    }
}

/// Start a search if the engine owns the turn and none is running.
fn start_engine(ctl: &mut TurnController, thinking: &mut Thinking) {
    if thinking.is_some() {
        return;
    }
    if let Some(job) = ctl.take_engine_job() {
        println!("Engine is thinking...");
        *thinking = Some(tokio::spawn(job.run()));
    }
}

fn report_engine(ctl: &TurnController, outcome: EngineOutcome) {
    match outcome {
        EngineOutcome::Played(applied) => println!("Engine plays {}", applied.mv),
        EngineOutcome::NoMove => println!("Engine has no move"),
        EngineOutcome::Failed => println!("Engine failed to move, try `new`"),
        // a search from before the last `new`
        EngineOutcome::Stale => return,
    }
    show(ctl);
}

/// Apply one command. Returns false when the player wants to leave.
fn handle_command(ctl: &mut TurnController, command: Command) -> bool {
    match command {
        Command::Quit => return false,
        Command::Help => print_usage(),
        Command::Board => show(ctl),
        Command::NewGame => {
            ctl.reset();
            show(ctl);
        }
        Command::Hints(sq) => {
            let hints = ctl.legal_destinations(sq);
            if hints.is_empty() {
                println!("Nothing can move from {sq}");
            } else {
                let text = BoardView::new(ctl.session(), ctl.config().glyphs)
                    .with_hints(&hints)
                    .render();
                print!("{text}");
            }
        }
        Command::Play(mv) => match ctl.submit_move(mv.from, mv.to) {
            Ok(_) => show(ctl),
            Err(e @ MoveError::GameOver) => println!("{e}. Type `new` to play again."),
            Err(e @ MoveError::EngineTurn) => println!("{e}"),
            Err(e) => println!("Illegal move: {e}"),
        },
    }
    true
}

async fn run(config: GameConfig) -> std::io::Result<()> {
    tracing::info!(
        mode = %config.mode,
        difficulty = %config.difficulty,
        glyphs = %config.glyphs,
        "starting"
    );
    let mut ctl = TurnController::new(config);
    show(&ctl);

    let mut thinking: Thinking = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        // input stays live while the engine searches, so `new` can cut a search short
        tokio::select! {
            joined = engine_reply(&mut thinking) => {
                thinking = None;
                let reply = joined.unwrap_or_else(|e| {
                    tracing::error!(error = %e, "engine task failed");
                    EngineReply { generation: ctl.generation(), result: None }
                });
                let outcome = ctl.finish_engine_job(reply);
                report_engine(&ctl, outcome);
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line) {
                    Ok(command) => {
                        if !handle_command(&mut ctl, command) {
                            break;
                        }
                    }
                    Err(e) => println!("{e}"),
                }
            }
        }
        start_engine(&mut ctl, &mut thinking);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chess_terminal=info,game=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };
    if opts.help {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let config = match build_config(&opts) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "stdin closed unexpectedly");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn flags_override_defaults() {
        let opts = parse_args(&args(&[
            "--mode",
            "human-vs-human",
            "-d",
            "expert",
            "--glyphs",
            "animals",
            "--delay-ms",
            "0",
        ]))
        .unwrap();
        let config = build_config(&opts).unwrap();
        assert_eq!(config.mode, GameMode::HumanVsHuman);
        assert_eq!(config.difficulty, Difficulty::Expert);
        assert_eq!(config.glyphs, GlyphSet::Animals);
        assert_eq!(config.thinking_delay_ms, 0);
    }

    #[test]
    fn bad_flags_are_reported() {
        assert!(parse_args(&args(&["--difficulty"])).is_err());
        assert!(parse_args(&args(&["--difficulty", "godlike"])).is_err());
        assert!(parse_args(&args(&["--delay-ms", "soon"])).is_err());
        assert!(parse_args(&args(&["--colour", "red"])).is_err());
        assert!(parse_args(&args(&["-h"])).unwrap().help);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let opts = parse_args(&args(&["--config", "/nonexistent/chess.toml"])).unwrap();
        assert!(build_config(&opts).is_err());
    }

    fn quick_game() -> TurnController {
        TurnController::new(GameConfig {
            thinking_delay_ms: 0,
            ..GameConfig::default()
        })
    }

    fn play(ctl: &mut TurnController, text: &str) {
        let command = parse_command(text).unwrap();
        assert!(handle_command(ctl, command));
    }

    #[tokio::test]
    async fn idle_engine_never_replies() {
        let mut thinking: Thinking = None;
        let waited =
            tokio::time::timeout(std::time::Duration::from_millis(20), engine_reply(&mut thinking))
                .await;
        assert!(waited.is_err());
    }

    #[tokio::test]
    async fn engine_answers_in_the_background() {
        let mut ctl = quick_game();
        let mut thinking: Thinking = None;
        play(&mut ctl, "e2e4");
        start_engine(&mut ctl, &mut thinking);
        assert!(thinking.is_some());

        // input is still handled while the search runs
        play(&mut ctl, "board");
        assert_eq!(ctl.submit_move(sq("d2"), sq("d4")), Err(MoveError::EngineTurn));

        let reply = engine_reply(&mut thinking).await.unwrap();
        assert!(matches!(ctl.finish_engine_job(reply), EngineOutcome::Played(_)));
        assert_eq!(ctl.session().history().len(), 2);
    }

    #[tokio::test]
    async fn new_game_mid_search_drops_the_reply() {
        let mut ctl = quick_game();
        let mut thinking: Thinking = None;
        play(&mut ctl, "e2e4");
        start_engine(&mut ctl, &mut thinking);

        play(&mut ctl, "new");
        let reply = engine_reply(&mut thinking).await.unwrap();
        assert_eq!(ctl.finish_engine_job(reply), EngineOutcome::Stale);
        assert_eq!(ctl.session().board(), &chess_core::Board::startpos());
        assert!(ctl.session().history().is_empty());
    }

    #[test]
    fn commands() {
        let e2 = Square::from_algebraic("e2").unwrap();
        let e4 = Square::from_algebraic("e4").unwrap();
        assert_eq!(parse_command("e2e4"), Ok(Command::Play(Move::new(e2, e4))));
        assert_eq!(parse_command(" e2 e4 "), Ok(Command::Play(Move::new(e2, e4))));
        assert_eq!(parse_command("moves e2"), Ok(Command::Hints(e2)));
        assert_eq!(parse_command("new"), Ok(Command::NewGame));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert!(parse_command("moves").is_err());
        assert!(parse_command("e9e4").is_err());
    }
}
