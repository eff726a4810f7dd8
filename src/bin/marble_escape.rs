use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use marble_escape::search::replay::{replay, TiltRecord};
use marble_escape::{logging, scenarios, Board, Outcome, Solver, SolverConfig};

/// Find the fewest board tilts that drop the target marble but not the obstacle.
#[derive(Debug, Parser)]
#[command(name = "marble-escape", version)]
struct Cli {
    /// Board file (header line + grid rows). Use `-` or omit to read stdin.
    board: Option<PathBuf>,

    /// Solve a built-in scenario instead of a board file.
    #[arg(long, conflicts_with = "board")]
    scenario: Option<String>,

    /// JSON solver config.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a JSON report instead of the bare result.
    #[arg(long)]
    json: bool,

    /// Print the board after each tilt of the solution.
    #[arg(long)]
    trace: bool,

    /// List built-in scenarios and exit.
    #[arg(long)]
    list: bool,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    result: i32,
    #[serde(flatten)]
    outcome: &'a Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<Vec<TiltRecord>>,
}

fn read_board(cli: &Cli) -> Result<String, String> {
    if let Some(name) = &cli.scenario {
        return scenarios::by_name(name)
            .map(|s| s.text.to_string())
            .ok_or_else(|| {
                format!(
                    "unknown scenario: {name}\n\nAvailable scenarios:\n  - {}",
                    scenarios::names().join("\n  - ")
                )
            });
    }

    match cli.board.as_deref() {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .map_err(|e| format!("failed to read {}: {e}", p.display())),
        _ => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .map_err(|e| format!("failed to read stdin: {e}"))?;
            Ok(s)
        }
    }
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    if cli.list {
        for s in scenarios::all() {
            println!("{:<16} {:>3}", s.name, s.expected);
        }
        return ExitCode::SUCCESS;
    }

    let text = match read_board(&cli) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let config = match cli.config.as_deref().map(SolverConfig::from_path).transpose() {
        Ok(c) => c.unwrap_or_default(),
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(1);
        }
    };

    let solved = Board::parse(&text).and_then(|board| {
        let outcome = Solver::new(config)?.solve(&board)?;
        Ok((board, outcome))
    });
    let (board, outcome) = match solved {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(1);
        }
    };

    let steps = cli.trace.then(|| replay(&board, outcome.path()));

    if cli.json {
        let report = Report {
            result: outcome.code(),
            outcome: &outcome,
            steps,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::from(1);
            }
        }
        return ExitCode::SUCCESS;
    }

    if let Some(steps) = &steps {
        let path: String = outcome.path().iter().map(|d| d.symbol()).collect();
        println!("path: {path}");
        print!("{board}");
        for (i, step) in steps.iter().enumerate() {
            println!("\n{}. tilt {}", i + 1, step.direction);
            print!("{}", board.render(step.target, step.obstacle));
        }
        println!();
    }
    println!("{}", outcome.code());
    ExitCode::SUCCESS
}
