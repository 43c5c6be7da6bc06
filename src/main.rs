//! Wordle Solver CLI
//!
//! Drives one assistant session: suggests a word, reads the color row the
//! real game produced for it, and repeats until solved or out of candidates.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process::ExitCode;

use wordle_solver::{
    FeedbackPattern, FormatError, Lexicon, SessionState, Solver, SolverError, MIN_WORD_LENGTH,
};

const DEFAULT_WEIGHTS_PATH: &str = "word_weights.json";

fn print_instructions() {
    println!("Wordle Solver");
    println!();
    println!("1. Open any traditional Wordle app or site");
    println!("2. Enter the length of the word");
    println!("3. Enter the word suggested by the solver into the game");
    println!("4. Enter the result as a row of colors: b (black), y (yellow), or g (green)");
    println!("   e.g. 'ybgyy' if the second letter came back green and the rest yellow/black");
    println!("5. Repeat steps 3 and 4 until you find the solution");
    println!();
}

fn load_lexicon(path: &str) -> Result<Lexicon, FormatError> {
    let file = File::open(path)?;
    Lexicon::from_reader(BufReader::new(file))
}

fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_word_length(max: usize) -> io::Result<Option<usize>> {
    loop {
        let line = match read_line(&format!("Word length ({}-{}): ", MIN_WORD_LENGTH, max))? {
            Some(line) => line,
            None => return Ok(None),
        };
        match line.parse::<usize>() {
            Ok(n) if (MIN_WORD_LENGTH..=max).contains(&n) => return Ok(Some(n)),
            _ => println!("Please enter a number between {} and {}.", MIN_WORD_LENGTH, max),
        }
    }
}

fn run_session(lexicon: &Lexicon) -> io::Result<()> {
    let max_length = lexicon.max_word_length();
    if max_length < MIN_WORD_LENGTH {
        println!("The lexicon has no usable words.");
        return Ok(());
    }

    let length = match prompt_word_length(max_length)? {
        Some(length) => length,
        None => return Ok(()),
    };
    let mut solver = Solver::new(lexicon, length);
    if solver.state() == SessionState::Exhausted {
        println!("The lexicon has no words of length {}.", length);
        return Ok(());
    }

    while solver.state() == SessionState::InProgress {
        let guess = match solver.propose_guess() {
            Ok(guess) => guess.to_string(),
            Err(_) => break,
        };

        println!();
        println!("Attempt: {}", solver.attempt());
        println!("Enter: {}", guess.to_uppercase());

        let line = match read_line("Result colors: ")? {
            Some(line) => line,
            None => return Ok(()),
        };

        let pattern = match FeedbackPattern::parse(&line) {
            Ok(pattern) => pattern,
            Err(err) => {
                println!("{}. Please correct the results.", err);
                continue;
            }
        };

        match solver.submit_feedback(&guess, &pattern) {
            Ok(status) => match status.state {
                SessionState::Solved => {
                    println!();
                    println!("Solved in {} attempts!", status.attempt);
                }
                SessionState::Exhausted => {
                    println!();
                    println!(
                        "We cannot seem to find a solution. \
                         Are you sure the results entered are correct?"
                    );
                }
                SessionState::InProgress => {
                    println!("{} candidates remaining.", status.remaining);
                }
            },
            // Validation failures leave the round unplayed; re-prompt.
            Err(SolverError::Validation(err)) => {
                println!("{}. Please correct the results.", err);
            }
            Err(err) => {
                println!("{}", err);
                break;
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let path = match args.get(1).map(String::as_str) {
        Some("--help") | Some("-h") => {
            println!("Usage: wordle-solver [WEIGHTS_JSON]");
            println!();
            println!("WEIGHTS_JSON is a JSON object mapping words to weights");
            println!("(default: {}).", DEFAULT_WEIGHTS_PATH);
            return ExitCode::SUCCESS;
        }
        Some(path) => path,
        None => DEFAULT_WEIGHTS_PATH,
    };

    let lexicon = match load_lexicon(path) {
        Ok(lexicon) => lexicon,
        Err(err) => {
            eprintln!("Failed to load lexicon from {}: {}", path, err);
            return ExitCode::FAILURE;
        }
    };

    print_instructions();
    println!("Loaded {} words.", lexicon.len());

    if let Err(err) = run_session(&lexicon) {
        eprintln!("IO error: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
