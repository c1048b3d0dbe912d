use std::io::{self, BufRead, Write};

use duo_chess::engines::engine_cpu::{play_engine_move, CpuEngine};
use duo_chess::game_config::{GameConfig, ENV_LOG};
use duo_chess::move_generation::legal_move_apply::try_apply_move;
use duo_chess::move_generation::legal_move_generator::legal_moves_for_with_policy;
use duo_chess::utils::algebraic::{algebraic_to_position, position_to_algebraic};
use duo_chess::utils::notation::move_history_text;
use duo_chess::utils::render_game_state::render_game_state;
use duo_chess::{ChessErrors, Color, GameState, GameStatus};

const HELP: &str = "commands: <from> <to> (e.g. e2 e4), moves <square>, board, history, json, reset, help, quit";

fn main() {
    let logger_env = env_logger::Env::default().filter_or(ENV_LOG, "info");
    env_logger::Builder::from_env(logger_env)
        .format_timestamp_millis()
        .init();

    let config = GameConfig::from_env();
    log::debug!("config: {config:?}");

    let mut engine = match config.seed {
        Some(seed) => CpuEngine::with_seed(config.cpu_difficulty, seed),
        None => CpuEngine::new(config.cpu_difficulty),
    }
    .with_castling_policy(config.castling_policy);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--cpu-vs-cpu") {
        self_play(&config, &mut engine);
        return;
    }
    let cpu_plays_black = args.iter().any(|a| a == "--vs-cpu");

    if let Err(e) = interactive(&config, &mut engine, cpu_plays_black) {
        log::error!("input error: {e}");
    }
}

fn self_play(config: &GameConfig, engine: &mut CpuEngine) {
    let mut game = GameState::new_game();
    for _ in 0..config.max_plies {
        match play_engine_move(&game, engine) {
            Ok(next) if next.move_history.len() == game.move_history.len() => break,
            Ok(next) => game = next,
            Err(e) => {
                log::error!("engine failed: {e}");
                break;
            }
        }
        if game.is_checkmate {
            break;
        }
    }
    println!("{}", render_game_state(&game));
    println!("{}", move_history_text(&game.move_history));
    println!("{}", status_line(&game));
}

fn interactive(config: &GameConfig, engine: &mut CpuEngine, cpu_plays_black: bool) -> io::Result<()> {
    let mut game = GameState::new_game();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", render_game_state(&game));
    println!("{HELP}");

    for line in stdin.lock().lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["help"] => println!("{HELP}"),
            ["board"] => println!("{}", render_game_state(&game)),
            ["history"] => println!("{}", move_history_text(&game.move_history)),
            ["reset"] => {
                game = GameState::new_game();
                println!("{}", render_game_state(&game));
            }
            ["json"] => match game.to_json() {
                Ok(json) => println!("{json}"),
                Err(e) => println!("error: {e}"),
            },
            ["moves", square] => match describe_moves(&game, square, config) {
                Ok(text) => println!("{text}"),
                Err(e) => println!("error: {e}"),
            },
            [from, to] => match play(&game, from, to, config) {
                Ok(next) => {
                    game = next;
                    if cpu_plays_black && game.current_turn == Color::Black && !game.is_checkmate {
                        match play_engine_move(&game, engine) {
                            Ok(next) => game = next,
                            Err(e) => log::error!("engine failed: {e}"),
                        }
                    }
                    println!("{}", render_game_state(&game));
                    println!("{}", status_line(&game));
                }
                Err(e) => println!("error: {e}"),
            },
            _ => println!("{HELP}"),
        }
        stdout.flush()?;
    }
    Ok(())
}

fn play(game: &GameState, from: &str, to: &str, config: &GameConfig) -> Result<GameState, ChessErrors> {
    let from = algebraic_to_position(from)?;
    let to = algebraic_to_position(to)?;
    try_apply_move(game, from, to, config.castling_policy)
}

fn describe_moves(game: &GameState, square: &str, config: &GameConfig) -> Result<String, ChessErrors> {
    let position = algebraic_to_position(square)?;
    let piece = game
        .piece_at(position)
        .ok_or(ChessErrors::NoPieceOnSquare(position))?;
    let targets = legal_moves_for_with_policy(game, piece, config.castling_policy)
        .into_iter()
        .map(position_to_algebraic)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(if targets.is_empty() {
        "no legal moves".to_owned()
    } else {
        targets.join(" ")
    })
}

fn status_line(game: &GameState) -> String {
    match game.status() {
        GameStatus::InProgress => format!("{} to move", game.current_turn),
        GameStatus::Check(color) => format!("{color} is in check"),
        GameStatus::Checkmate { winner } => format!("checkmate, {winner} wins"),
    }
}
