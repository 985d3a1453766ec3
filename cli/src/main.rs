use std::{fs, io, io::Write as _, path::PathBuf};

use clap::Parser;
use color_eyre::{eyre::eyre, owo_colors::OwoColorize};
use cube_core::scramble::DEFAULT_SCRAMBLE_LENGTH;
use cube_core::topology::FACES;
use cube_core::{Color, CubeState, Mode, SequenceCursor, Session, Turn, parse_sequence};
use log::info;
use itertools::Itertools;

/// Simulates the facelet state of a 3×3×3 cube
#[derive(Parser)]
#[command(version, about)]
enum Commands {
    /// Generate a random scramble and print the resulting state
    Scramble {
        /// How many moves to scramble with
        #[arg(long, default_value_t = DEFAULT_SCRAMBLE_LENGTH)]
        length: usize,
        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Apply a move sequence to the solved cube and print the state
    Apply {
        /// Moves in face-turn notation, e.g. R U' F2
        moves: Vec<String>,
    },
    /// Step forward and backward through a move sequence interactively
    Walk {
        /// Moves in face-turn notation, e.g. R U' F2
        moves: Vec<String>,
    },
    /// Print the solver request body for a scrambled cube and play back a
    /// solver response
    Solve {
        /// Scramble with this many moves before requesting the solve
        #[arg(long, default_value_t = DEFAULT_SCRAMBLE_LENGTH)]
        scramble: usize,
        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,
        /// File holding the solver's JSON response; stdin when omitted
        #[arg(long)]
        response: Option<PathBuf>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    match Commands::parse() {
        Commands::Scramble { length, seed } => {
            let mut session = Session::new();
            let sequence = match seed {
                Some(seed) => {
                    session.scramble_with(&mut fastrand::Rng::with_seed(seed), length)
                }
                None => session.scramble(length),
            }
            .to_vec();

            session.play_all();
            session.finish_scramble();

            println!("{}", sequence.iter().join(" "));
            print_state(session.state());
        }
        Commands::Apply { moves } => {
            let turns = parse_moves(&moves)?;

            let mut state = CubeState::solved();
            state.apply_all(&turns);
            print_state(&state);
        }
        Commands::Walk { moves } => walk(parse_moves(&moves)?)?,
        Commands::Solve {
            scramble,
            seed,
            response,
        } => solve(scramble, seed, response)?,
    }

    Ok(())
}

fn parse_moves(moves: &[String]) -> color_eyre::Result<Vec<Turn>> {
    if moves.is_empty() {
        return Err(eyre!("Expected at least one move, e.g. `R U' F2`."));
    }

    Ok(parse_sequence(&moves.join(" "))?)
}

fn walk(turns: Vec<Turn>) -> color_eyre::Result<()> {
    let mut state = CubeState::solved();
    let mut cursor = SequenceCursor::new(turns);

    print_state(&state);

    loop {
        print!(
            "[{}/{}] (n)ext (p)rev (r)eplay (q)uit > ",
            cursor.position(),
            cursor.sequence().len()
        );
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break Ok(());
        }

        match line.trim() {
            "n" => match cursor.step_forward(&mut state) {
                Some(turn) => {
                    println!("applied {turn}");
                    print_state(&state);
                }
                None => println!("already at the end"),
            },
            "p" => match cursor.step_backward(&mut state) {
                Some(turn) => {
                    println!("applied {turn}");
                    print_state(&state);
                }
                None => println!("already at the start"),
            },
            "r" => match cursor.replay_current() {
                Some(turn) => println!("replaying {turn}"),
                None => println!("nothing to replay yet"),
            },
            "q" => break Ok(()),
            other => println!("unknown command `{other}`"),
        }
    }
}

fn solve(scramble: usize, seed: Option<u64>, response: Option<PathBuf>) -> color_eyre::Result<()> {
    let mut session = Session::new();

    let sequence = match seed {
        Some(seed) => session.scramble_with(&mut fastrand::Rng::with_seed(seed), scramble),
        None => session.scramble(scramble),
    }
    .to_vec();

    session.play_all();
    session.finish_scramble();

    println!("scramble: {}", sequence.iter().join(" "));
    print_state(session.state());

    let body = session.request_solve()?;
    println!("request body:\n{body}");

    let raw = match response {
        Some(path) => {
            info!("reading solver response from {}", path.display());
            fs::read_to_string(path)?
        }
        None => {
            println!("paste the solver response:");
            let mut line = String::new();
            io::stdin().read_line(&mut line)?;
            line
        }
    };

    session.handle_solve_body(raw.trim())?;

    if session.mode() != Mode::Animation {
        return Err(eyre!(
            "Solver rejected the cube: {}",
            session.last_failure().unwrap_or("no message")
        ));
    }

    while let Some(notice) = session.step_forward() {
        println!("[{}] {}", notice.position, notice.turn);
    }

    print_state(session.state());

    if *session.state() == CubeState::solved() {
        println!("{}", "solved".green());
    } else {
        println!("{}", "sequence did not solve the cube".red());
    }

    Ok(())
}

/// Print one line per face: the center sticker followed by the face's four
/// edge and four corner stickers in cycle order.
fn print_state(state: &CubeState) {
    for face in FACES {
        let axis = face.axis();

        let edges = cube_core::topology::edge_cycle(face)
            .map(|slot| state.edges()[slot][axis]);
        let corners = cube_core::topology::corner_cycle(face)
            .map(|slot| state.corners()[slot][axis]);

        print!("{face}  {}", paint(CubeState::center_color(face)));
        for sticker in edges.iter().chain(corners.iter()) {
            print!(" {}", paint(*sticker));
        }
        println!();
    }
}

fn paint(color: Color) -> String {
    let letter = initial(color);

    match color {
        Color::Blue => letter.blue().to_string(),
        Color::Green => letter.green().to_string(),
        Color::Yellow => letter.yellow().to_string(),
        Color::White => letter.white().to_string(),
        Color::Red => letter.red().to_string(),
        Color::Orange => letter.truecolor(255, 140, 0).to_string(),
        Color::Black => letter.dimmed().to_string(),
    }
}

fn initial(color: Color) -> char {
    match color {
        Color::Blue => 'B',
        Color::Green => 'G',
        Color::Yellow => 'Y',
        Color::White => 'W',
        Color::Red => 'R',
        Color::Orange => 'O',
        Color::Black => '.',
    }
}
