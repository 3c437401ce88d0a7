use std::time::{Duration, Instant};

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use pagesim::api::sim::{SimulationSet, render_step};
use pagesim::common::types::Algorithm;
use pagesim::debugger::{DebugLevel, set_debug_level};
use pagesim::playback::cursor::TraceCursor;
use pagesim::playback::player::Autoplay;
use pagesim::sim_debug;

const DEFAULT_PLAY_DELAY_MS: u64 = 800;

struct Session {
    set: SimulationSet<u32>,
    cursor: TraceCursor,
}

impl Session {
    fn show_current(&self) {
        show_step(&self.set, self.cursor.position());
    }
}

fn show_step(set: &SimulationSet<u32>, step: usize) {
    for algorithm in Algorithm::ALL {
        println!(
            "{:<8} {}",
            algorithm.to_string(),
            render_step(set.trace(algorithm), step)
        );
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let debug_level = args
        .iter()
        .find(|arg| arg.starts_with("--debug="))
        .and_then(|arg| arg.strip_prefix("--debug="))
        .and_then(|level| level.parse::<u8>().ok())
        .map(DebugLevel::from_u8)
        .unwrap_or(DebugLevel::Off);

    set_debug_level(debug_level);

    println!("pagesim CLI — FIFO / LRU / Optimal page replacement");
    println!("Type 'help' for commands. Ctrl+C to exit");

    let mut editor = DefaultEditor::new()?;
    let mut session: Option<Session> = None;

    loop {
        let line = match editor.readline("pagesim> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(error) => return Err(error.into()),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        editor.add_history_entry(line)?;

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "run" => match run_command(rest) {
                Ok(new_session) => {
                    println!("{}", new_session.set.summary());
                    new_session.show_current();
                    session = Some(new_session);
                }
                Err(error) => println!("{error}"),
            },

            "show" => with_session(&session, |s| s.show_current()),

            "next" => with_session_mut(&mut session, |s| {
                if s.cursor.next() {
                    s.show_current();
                } else {
                    println!("already at the last step");
                }
            }),

            "prev" => with_session_mut(&mut session, |s| {
                if s.cursor.prev() {
                    s.show_current();
                } else {
                    println!("already at the first step");
                }
            }),

            "goto" => with_session_mut(&mut session, |s| {
                let target = rest.parse::<usize>().ok().filter(|&step| step >= 1);
                match target {
                    Some(step) if step <= s.cursor.len() => {
                        s.cursor.jump(step - 1);
                        s.show_current();
                    }
                    _ => println!("usage: goto <step> (1..={})", s.cursor.len()),
                }
            }),

            "play" => {
                if let Some(s) = session.as_mut() {
                    let delay_ms = rest.parse::<u64>().unwrap_or(DEFAULT_PLAY_DELAY_MS);
                    play_command(s, &mut editor, Duration::from_millis(delay_ms))?;
                } else {
                    println!("run a simulation first");
                }
            }

            "totals" => with_session(&session, |s| println!("{}", s.set.summary())),

            "reset" => {
                session = None;
                println!("reset done");
            }

            "help" => print_help(),

            "quit" | "exit" => break,

            other => println!("unknown command '{other}' (try 'help')"),
        }
    }

    Ok(())
}

fn run_command(rest: &str) -> Result<Session, String> {
    let (frame_text, reference_text) = match rest.split_once(char::is_whitespace) {
        Some(parts) => parts,
        None => return Err("usage: run <frame count> <page request string>".to_string()),
    };

    let start = Instant::now();
    let set =
        SimulationSet::from_input(frame_text, reference_text).map_err(|e| e.to_string())?;
    let elapsed = start.elapsed().as_micros();

    sim_debug!(
        DebugLevel::Info,
        "simulated {} references x 3 algorithms in {}µs",
        set.len(),
        elapsed
    );
    println!(
        "simulation ready: {} references, {} frames",
        set.len(),
        set.frame_count
    );

    let cursor = TraceCursor::new(set.len());
    Ok(Session { set, cursor })
}

/// Advance from the current step to the end on a background thread,
/// printing each step, until done or the user presses Enter.
fn play_command(
    session: &mut Session,
    editor: &mut DefaultEditor,
    delay: Duration,
) -> Result<()> {
    if session.cursor.at_end() {
        println!("already at the last step");
        return Ok(());
    }

    let set = session.set.clone();

    let mut player = Autoplay::spawn(
        session.cursor.len(),
        session.cursor.position(),
        delay,
        move |step| show_step(&set, step),
    );

    // Block until playback finishes or the user interrupts it; either
    // way the cursor picks up wherever the player got to.
    match editor.readline("(playing — press Enter to pause) ") {
        Ok(_) => player.stop(),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => player.stop(),
        Err(error) => {
            player.stop();
            return Err(error.into());
        }
    }

    session.cursor.jump(player.position());
    println!("paused at step {} / {}", player.position() + 1, session.cursor.len());
    Ok(())
}

fn with_session(session: &Option<Session>, f: impl FnOnce(&Session)) {
    match session {
        Some(s) => f(s),
        None => println!("run a simulation first"),
    }
}

fn with_session_mut(session: &mut Option<Session>, f: impl FnOnce(&mut Session)) {
    match session {
        Some(s) => f(s),
        None => println!("run a simulation first"),
    }
}

fn print_help() {
    println!("commands:");
    println!("  run <frames> <pages>   simulate, e.g. run 3 7 0 1 2 0 3 0 4 2 3 0 3 2");
    println!("  show                   print the current step for all three algorithms");
    println!("  next / prev            step forward / backward");
    println!("  goto <step>            jump to a step (1-based)");
    println!("  play [delay_ms]        auto-advance to the end (Enter pauses)");
    println!("  totals                 total faults per algorithm");
    println!("  reset                  discard the current simulation");
    println!("  quit                   leave");
}
