//! Terminal chess against the random engine.
//!
//! Run with:
//! `cargo run -- [--no-ai] [--ai-white] [--seed N] [--delay-ms N]`
//!
//! Enter moves as coordinates (`e2e4`, or `e7e8n` to pick the promotion
//! piece up front). Other commands: `reset`, `fen`, `quit`.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use pawnshop_chess::engines::engine_random::RandomEngine;
use pawnshop_chess::engines::engine_trait::Engine;
use pawnshop_chess::game_state::game_config::GameConfig;
use pawnshop_chess::game_state::game_state::GameState;
use pawnshop_chess::move_generation::promotion::{FixedChoice, PromotionChoice};
use pawnshop_chess::utils::algebraic::{move_to_long_algebraic, parse_long_algebraic};
use pawnshop_chess::utils::logging::init_tracing;
use pawnshop_chess::utils::render_game_state::render_game_state;

fn main() -> Result<(), String> {
    init_tracing();

    let config = GameConfig::from_args(std::env::args().skip(1))?;
    let mut engine = match config.ai_seed {
        Some(seed) => RandomEngine::with_seed(seed),
        None => RandomEngine::new(),
    };

    let mut game = GameState::new_game();
    let mut ai_stalled = false;

    println!(
        "New game started {}",
        game.started_at().format("%Y-%m-%d %H:%M:%S")
    );

    loop {
        println!("\n{}", render_game_state(&game));

        if config.ai_side == Some(game.side_to_move()) && !ai_stalled {
            thread::sleep(Duration::from_millis(config.ai_delay_ms));
            match game.play_ai_move(&mut engine).map_err(|e| e.to_string())? {
                Some(record) => {
                    let text = move_to_long_algebraic(record.mv).map_err(|e| e.to_string())?;
                    println!("{} plays {text}", engine.name());
                }
                None => {
                    println!("Engine has no move. Type `reset` or `quit`.");
                    ai_stalled = true;
                }
            }
            continue;
        }

        let Some(line) = prompt("> ")? else {
            return Ok(());
        };

        match line.as_str() {
            "" => continue,
            "quit" | "exit" => return Ok(()),
            "reset" => {
                game.reset();
                ai_stalled = false;
                continue;
            }
            "fen" => {
                println!("{}", game.get_fen());
                continue;
            }
            _ => {}
        }

        let (mv, preset) = match parse_long_algebraic(&line) {
            Ok(parsed) => parsed,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        let result = match preset {
            Some(choice) => game.play_human_move(mv.from, mv.to, &mut FixedChoice(choice)),
            None => game.play_human_move(mv.from, mv.to, &mut ask_promotion),
        };

        if let Err(e) = result {
            println!("{e}");
        }
    }
}

fn ask_promotion(_default_choice: PromotionChoice) -> Option<PromotionChoice> {
    match prompt("Promote to (Q, R, B, N): ") {
        Ok(Some(answer)) => PromotionChoice::from_input(&answer),
        _ => None,
    }
}

/// Reads one trimmed line; `None` on end of input.
fn prompt(label: &str) -> Result<Option<String>, String> {
    print!("{label}");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_owned()))
}
