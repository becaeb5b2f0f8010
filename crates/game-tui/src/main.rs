use std::io;

use anyhow::{Result, ensure};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use twenty48_core::{Game, Move};

#[derive(Debug, Parser)]
#[command(about = "Play 2048 in the terminal")]
struct Cli {
    /// Board edge length (minimum 2)
    #[arg(long, default_value_t = 4)]
    size: usize,

    /// RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    ensure!(
        cli.size >= 2,
        "board size must be at least 2, got {}",
        cli.size
    );

    let mut game = match cli.seed {
        Some(seed) => Game::with_seed(cli.size, seed),
        None => Game::new(cli.size),
    };

    println!("2048");
    println!("Move with the arrow keys or W/A/S/D. Press q or Esc to quit.");
    println!();

    loop {
        println!("{game}");
        let key = read_key()?;
        if is_quit(&key) {
            println!("Final score: {}", game.score());
            break;
        }
        let Some(direction) = direction_for(key.code) else {
            continue;
        };
        game.apply_move(direction);
        if game.is_game_over() {
            println!("{game}");
            println!("No more moves possible. Final score: {}", game.score());
            break;
        }
    }
    Ok(())
}

/// Wait for the next key press with the terminal in raw mode.
///
/// Raw mode is held only while waiting, so the board still renders with
/// ordinary line discipline, and it is dropped before any error propagates.
fn read_key() -> Result<KeyEvent> {
    enable_raw_mode()?;
    let key = wait_for_press();
    disable_raw_mode()?;
    Ok(key?)
}

fn wait_for_press() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            // release/repeat events arrive on some terminals; act on press only
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn direction_for(code: KeyCode) -> Option<Move> {
    match code {
        KeyCode::Up => Some(Move::Up),
        KeyCode::Down => Some(Move::Down),
        KeyCode::Left => Some(Move::Left),
        KeyCode::Right => Some(Move::Right),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Some(Move::Up),
            's' => Some(Move::Down),
            'a' => Some(Move::Left),
            'd' => Some(Move::Right),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_directions() {
        assert_eq!(direction_for(KeyCode::Up), Some(Move::Up));
        assert_eq!(direction_for(KeyCode::Down), Some(Move::Down));
        assert_eq!(direction_for(KeyCode::Left), Some(Move::Left));
        assert_eq!(direction_for(KeyCode::Right), Some(Move::Right));
        for (key, direction) in [('w', Move::Up), ('s', Move::Down), ('a', Move::Left), ('d', Move::Right)] {
            assert_eq!(direction_for(KeyCode::Char(key)), Some(direction));
            assert_eq!(
                direction_for(KeyCode::Char(key.to_ascii_uppercase())),
                Some(direction)
            );
        }
        assert_eq!(direction_for(KeyCode::Char('x')), None);
        assert_eq!(direction_for(KeyCode::Enter), None);
    }

    #[test]
    fn quit_keys_are_recognized() {
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::NONE)));
        assert!(is_quit(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)));
    }
}
