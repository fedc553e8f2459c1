use std::io::{self, BufRead};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Table};
use line_and_dot::{CellGame, DotGame, EnclosureRule, Engine, Outcome, Rules, Side};
use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Walls between cells, report enclosed cells
    Cells,
    /// Lines between dots, report closed cycles
    Dots,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Rule {
    /// Whole regions cut off from the board boundary
    Region,
    /// Single cells with four drawn walls
    Cell,
}

impl From<Rule> for EnclosureRule {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::Region => EnclosureRule::Region,
            Rule::Cell => EnclosureRule::Cell,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "line-and-dot",
    about = "Read `row col side` selections from stdin and report what each one closes"
)]
struct Args {
    /// Board width, in cells (or dots with `--mode dots`)
    #[arg(long, default_value_t = 5)]
    width: usize,

    /// Board height, in cells (or dots with `--mode dots`)
    #[arg(long, default_value_t = 5)]
    height: usize,

    #[arg(long, value_enum, default_value_t = Mode::Cells)]
    mode: Mode,

    /// Enclosure rule of the cell model
    #[arg(long, value_enum, default_value_t = Rule::Region)]
    rule: Rule,

    /// Print the board after every selection
    #[arg(long)]
    render: bool,
}

#[derive(Debug, Default)]
struct Summary {
    selections: usize,
    rejected: usize,
    closing: usize,
}

impl Summary {
    fn table(&self, args: &Args) -> Table {
        let closing_label = match args.mode {
            Mode::Cells => "Enclosing selections",
            Mode::Dots => "Cycles closed",
        };

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["", "Value"]);
        table.add_row(vec![
            "Mode".to_owned(),
            format!("{:?}", args.mode).to_lowercase(),
        ]);
        table.add_row(vec![
            "Board".to_owned(),
            format!("{}x{}", args.width, args.height),
        ]);
        table.add_row(vec!["Selections".to_owned(), self.selections.to_string()]);
        table.add_row(vec!["Rejected".to_owned(), self.rejected.to_string()]);
        table.add_row(vec![closing_label.to_owned(), self.closing.to_string()]);
        table
    }
}

fn parse_selection(line: &str) -> anyhow::Result<(usize, usize, Side)> {
    let mut parts = line.split_whitespace();
    let (Some(row), Some(col), Some(side), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        anyhow::bail!("expected `row col side`, got {line:?}");
    };

    let row = row.parse().with_context(|| format!("invalid row {row:?}"))?;
    let col = col.parse().with_context(|| format!("invalid col {col:?}"))?;
    Ok((row, col, side.parse()?))
}

fn run<E: Engine>(mut engine: E, args: &Args) -> anyhow::Result<Summary> {
    let mut summary = Summary::default();

    for (number, line) in io::stdin().lock().lines().enumerate() {
        let line = line.context("failed to read selection")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let outcome = parse_selection(line)
            .and_then(|(row, col, side)| Ok(engine.select_edge(row, col, side)?));
        match outcome {
            Ok(outcome) => {
                summary.selections += 1;
                if outcome.closes() {
                    summary.closing += 1;
                }
                println!("{line}: {outcome}");
                if args.render {
                    println!("{}\n", engine.render());
                }
            }
            Err(error) => {
                // A bad line is reported, the session goes on.
                summary.rejected += 1;
                warn!("Line {}: {error:#}", number + 1);
                println!("{line}: error: {error:#}");
            }
        }
    }

    if !args.render {
        println!("{}", engine.render());
    }
    Ok(summary)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    info!(
        "Starting {:?} session on a {}x{} board",
        args.mode, args.width, args.height
    );

    let summary = match args.mode {
        Mode::Cells => {
            let rules = Rules {
                enclosure: args.rule.into(),
            };
            let game = CellGame::with_rules(args.width, args.height, rules)
                .context("failed to create board")?;
            run(game, &args)?
        }
        Mode::Dots => {
            let game = DotGame::initialize(args.width, args.height)
                .context("failed to create lattice")?;
            run(game, &args)?
        }
    };

    println!("{}", summary.table(&args));
    Ok(())
}
