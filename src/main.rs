use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, ensure, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use console::{style, Term};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::info;
use puzzle_bfs::{
    bfs, ChessConfig, Configuration, HoppersConfig, MoveOutcome, Playable, Pos, SearchResult,
    Session, Step, StringsConfig,
};
use rayon::prelude::*;

#[derive(Parser)]
#[command(name = "puzzle-bfs")]
#[command(about = "Shortest-path solver for chess, hoppers and strings puzzles")]
#[command(version)]
struct Cli {
    /// Hide the progress spinner
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve capture-chess puzzle files
    Chess {
        #[command(flatten)]
        batch: Batch,
    },
    /// Solve hoppers puzzle files
    Hoppers {
        #[command(flatten)]
        batch: Batch,
    },
    /// Turn START into TARGET one letter step at a time
    Strings { start: String, target: String },
    /// Play a puzzle interactively, with hints
    Play {
        #[arg(value_enum)]
        kind: Kind,
        file: PathBuf,
    },
}

#[derive(clap::Args)]
struct Batch {
    /// Puzzle files, solved concurrently
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Worker threads (defaults to one per core)
    #[arg(short, long)]
    jobs: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Chess,
    Hoppers,
}

fn spinner(multi: &MultiProgress, quiet: bool, name: String) -> Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }
    let pb = multi.add(ProgressBar::new_spinner());
    pb.set_style(ProgressStyle::with_template(
        "{spinner} {msg}: {human_pos} configs ({per_sec})",
    )?);
    pb.set_message(name);
    Ok(pb)
}

fn load<C>(path: &Path) -> Result<C>
where
    C: FromStr<Err = anyhow::Error>,
{
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    data.parse::<C>()
        .with_context(|| format!("Failed to parse {}", path.display()))
}

fn solve_files<C>(batch: &Batch, quiet: bool) -> Result<()>
where
    C: Configuration + FromStr<Err = anyhow::Error> + Display + Send + Sync,
{
    let inits = batch
        .files
        .iter()
        .map(|path| load::<C>(path))
        .collect::<Result<Vec<_>>>()?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(batch.jobs.unwrap_or(0))
        .build()?;
    let multi = MultiProgress::new();
    let spinners = batch
        .files
        .iter()
        .map(|path| spinner(&multi, quiet, path.display().to_string()))
        .collect::<Result<Vec<_>>>()?;

    let results: Vec<SearchResult<C>> = pool.install(|| {
        inits
            .par_iter()
            .zip(&spinners)
            .map(|(init, pb)| {
                let result = bfs(init.clone(), || pb.inc(1));
                pb.finish_and_clear();
                result
            })
            .collect()
    });

    for ((path, init), result) in batch.files.iter().zip(&inits).zip(&results) {
        info!("{}: solved = {}", path.display(), result.is_solved());
        println!("File: {}", path.display());
        print!("{init}");
        print!("{}", result.report());
    }
    Ok(())
}

fn solve_strings(start: &str, target: &str, quiet: bool) -> Result<()> {
    let init = StringsConfig::new(start, target)?;
    println!("Start: {start}, End: {target}");
    let pb = spinner(&MultiProgress::new(), quiet, format!("{start} -> {target}"))?;
    let result = bfs(init, || pb.inc(1));
    pb.finish_and_clear();
    print!("{}", result.report());
    Ok(())
}

enum Action {
    Quit,
    Hint,
    Reset,
    Load(PathBuf),
    Select(Step),
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let cmd = words.next().context("Empty command")?;
        let args = words.collect::<Vec<_>>();
        Ok(match cmd {
            "q" | "quit" => Self::Quit,
            "h" | "hint" => Self::Hint,
            "r" | "reset" => Self::Reset,
            "l" | "load" => {
                let &[file] = args.as_slice() else {
                    bail!("Usage: l FILE");
                };
                Self::Load(file.into())
            }
            "s" | "select" => {
                ensure!(args.len() == 4, "Usage: s ROW COL ROW COL");
                let nums = args
                    .iter()
                    .map(|n| n.parse::<u8>().with_context(|| format!("Invalid coordinate: {n:?}")))
                    .collect::<Result<Vec<_>>>()?;
                Self::Select(Step {
                    from: Pos(nums[0], nums[1]),
                    to: Pos(nums[2], nums[3]),
                })
            }
            _ => bail!("Unknown command: {cmd:?}"),
        })
    }
}

fn print_board(term: &Term, board: &impl Display) -> Result<()> {
    for line in board.to_string().lines() {
        term.write_line(line)?;
    }
    term.write_line("")?;
    Ok(())
}

fn play<C>(path: PathBuf) -> Result<()>
where
    C: Playable<Move = Step> + FromStr<Err = anyhow::Error> + Display,
{
    let term = Term::stdout();
    let mut session = Session::new(load::<C>(&path)?);
    term.write_line(&format!("Loaded: {}", path.display()))?;
    term.write_line("Commands: s ROW COL ROW COL | h | r | l FILE | q")?;

    loop {
        print_board(&term, session.current())?;
        term.write_str("> ")?;
        let line = term.read_line()?;
        let action = match line.parse::<Action>() {
            Ok(action) => action,
            Err(err) => {
                term.write_line(&style(format!("{err:#}")).red().to_string())?;
                continue;
            }
        };

        let outcome = match action {
            Action::Quit => break,
            Action::Hint => session.hint(),
            Action::Reset => session.reset(),
            Action::Select(step) => session.try_move(&step),
            Action::Load(path) => {
                match load::<C>(&path) {
                    Ok(init) => {
                        session = Session::new(init);
                        term.write_line(&format!("Loaded: {}", path.display()))?;
                    }
                    Err(err) => {
                        term.write_line(&style(format!("{err:#}")).red().to_string())?;
                    }
                }
                continue;
            }
        };

        let msg = match outcome {
            MoveOutcome::Moved => style("Moved").green(),
            MoveOutcome::Solved => style("Solved!").green().bold(),
            MoveOutcome::Illegal => style("Illegal move").red(),
            MoveOutcome::AlreadySolved => style("Already solved").yellow(),
            MoveOutcome::NoSolution => style("No solution").red(),
            MoveOutcome::Reset => style("Puzzle reset").yellow(),
        };
        term.write_line(&msg.to_string())?;
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Chess { batch } => solve_files::<ChessConfig>(&batch, cli.quiet),
        Command::Hoppers { batch } => solve_files::<HoppersConfig>(&batch, cli.quiet),
        Command::Strings { start, target } => solve_strings(&start, &target, cli.quiet),
        Command::Play { kind, file } => match kind {
            Kind::Chess => play::<ChessConfig>(file),
            Kind::Hoppers => play::<HoppersConfig>(file),
        },
    }
}
