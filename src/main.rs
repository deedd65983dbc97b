// src/main.rs
//
// Interactive terminal front end for the fog-of-war engine. Each turn the
// side to move is shown their own fogged projection; the full board is only
// printed for the observer perspective or once the game has ended.
use std::error::Error;
use std::fmt;
use std::io::{self, Write};

use lazy_static::lazy_static;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use regex::Regex;

use fog_chess::{square_to_algebraic, Color, Game, GameState, Perspective};

lazy_static! {
    // Two algebraic squares, optionally separated by whitespace: "e2e4" or "e2 e4".
    static ref MOVE_RE: Regex =
        Regex::new(r"^([a-h][1-8])\s*([a-h][1-8])$").expect("move pattern compiles");
}

// --- Input Parsing ---

#[derive(Debug)]
enum UserInput {
    Move(String, String),
    Command(Command),
}

#[derive(Debug)]
enum Command {
    View(Perspective),
    Json(Perspective),
    Random,
    Help,
    Quit,
}

#[derive(Debug)]
enum CommandError {
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidPerspective(String),
    Json(serde_json::Error),
    Io(io::Error),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnknownCommand(cmd) => write!(f, "Unknown command: '{}'. Type 'help' for commands.", cmd),
            CommandError::MissingArgument(what) => write!(f, "Missing argument: expected {}.", what),
            CommandError::InvalidPerspective(arg) => write!(f, "Invalid perspective: '{}'. Choose white, black or observer.", arg),
            CommandError::Json(e) => write!(f, "JSON encoding error: {}", e),
            CommandError::Io(e) => write!(f, "Input/Output error: {}", e),
        }
    }
}

impl Error for CommandError {}

impl From<io::Error> for CommandError {
    fn from(e: io::Error) -> Self { CommandError::Io(e) }
}

impl From<serde_json::Error> for CommandError {
    fn from(e: serde_json::Error) -> Self { CommandError::Json(e) }
}

fn parse_perspective(arg: &str) -> Result<Perspective, CommandError> {
    match arg {
        "white" => Ok(Perspective::White),
        "black" => Ok(Perspective::Black),
        "observer" | "audience" => Ok(Perspective::Observer),
        _ => Err(CommandError::InvalidPerspective(arg.to_string())),
    }
}

/// Parses one input line into a UserInput variant or returns a CommandError.
fn parse_user_input(input: &str) -> Result<UserInput, CommandError> {
    let lower = input.trim().to_lowercase();

    if let Some(caps) = MOVE_RE.captures(&lower) {
        return Ok(UserInput::Move(caps[1].to_string(), caps[2].to_string()));
    }

    let mut parts = lower.splitn(2, char::is_whitespace);
    let command_word = parts.next().unwrap_or("");
    let argument = parts.next().unwrap_or("").trim();

    match command_word {
        "view" | "json" => {
            if argument.is_empty() {
                return Err(CommandError::MissingArgument("a perspective (white, black or observer)"));
            }
            let perspective = parse_perspective(argument)?;
            if command_word == "view" {
                Ok(UserInput::Command(Command::View(perspective)))
            } else {
                Ok(UserInput::Command(Command::Json(perspective)))
            }
        }
        "random" => Ok(UserInput::Command(Command::Random)),
        "help" | "?" => Ok(UserInput::Command(Command::Help)),
        "quit" | "exit" => Ok(UserInput::Command(Command::Quit)),
        _ => Err(CommandError::UnknownCommand(input.trim().to_string())),
    }
}

fn print_help() {
    println!("\nAvailable Commands:");
    println!("  <move>              Move for the side to move, as two squares (e.g. e2e4 or e2 e4)");
    println!("  view <perspective>  Show the board as white, black or observer");
    println!("  json <perspective>  Print that projection as JSON");
    println!("  random              Play a random legal move for the side to move");
    println!("  help                Show this message");
    println!("  quit                Exit the game");
    println!("Fogged squares print as '*', known-empty squares as '.'.");
}

// --- Main Game Loop ---

fn main() -> Result<(), Box<dyn Error>> {
    println!("==============================");
    println!("|      Fog of War Chess      |");
    println!("==============================");
    print_help();

    let mut game = Game::new();
    let mut rng = StdRng::from_os_rng();

    'game_loop: loop {
        // 1. Terminal state: show the true board and the result, then stop.
        let winner = match game.game_state() {
            GameState::WhiteWon => Some(Color::White),
            GameState::BlackWon => Some(Color::Black),
            GameState::InProgress => None,
        };
        if let Some(winner) = winner {
            println!("------------------------------------------");
            println!("{}", game);
            println!("\n=== GAME OVER: {:?} wins by king capture. ===", winner);
            break 'game_loop;
        }

        // 2. The side to move sees only their own projection.
        let mover = game.turn();
        let perspective = match mover {
            Color::White => Perspective::White,
            Color::Black => Perspective::Black,
        };
        println!("------------------------------------------");
        println!("{}", game.view(perspective));

        print!("\n{:?}'s turn. Enter move (e.g. e2e4) or command: ", mover);
        io::stdout().flush()?;

        // 3. Read input.
        let mut input_line = String::new();
        match io::stdin().read_line(&mut input_line) {
            Ok(0) => {
                println!("\nEnd of input detected. Quitting game.");
                break 'game_loop;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {}. Try again or use 'quit'/'exit'.", e);
                continue 'game_loop;
            }
        }

        let input_trimmed = input_line.trim();
        if input_trimmed.is_empty() { continue 'game_loop; }

        // 4. Process input.
        match parse_user_input(input_trimmed) {
            Ok(UserInput::Move(from, to)) => {
                if !game.make_move(&from, &to) {
                    println!("Illegal move '{}{}': rejected.", from, to);
                }
            }
            Ok(UserInput::Command(Command::View(perspective))) => {
                println!("{}", game.view(perspective));
            }
            Ok(UserInput::Command(Command::Json(perspective))) => {
                match serde_json::to_string_pretty(&game.view(perspective)) {
                    Ok(text) => println!("{}", text),
                    Err(e) => println!("Error: {}", CommandError::from(e)),
                }
            }
            Ok(UserInput::Command(Command::Random)) => {
                let moves = game.legal_moves();
                if moves.is_empty() {
                    println!("No legal moves available.");
                } else {
                    let (from, to) = moves[(rng.next_u64() as usize) % moves.len()];
                    let (from_s, to_s) = (square_to_algebraic(from), square_to_algebraic(to));
                    if game.make_move(&from_s, &to_s) {
                        println!("Random move played: {}{}", from_s, to_s);
                    } else {
                        eprintln!("Internal error: generated move {}{} was rejected.", from_s, to_s);
                    }
                }
            }
            Ok(UserInput::Command(Command::Help)) => print_help(),
            Ok(UserInput::Command(Command::Quit)) => {
                println!("Exiting game.");
                break 'game_loop;
            }
            Err(e) => println!("Input Error: {}", e),
        }
    }

    println!("\nGame session finished.");
    Ok(())
}
