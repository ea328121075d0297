//! Terminal pathfinding demo using crossterm.
//!
//! Run: cargo run --bin pathviz -- [bfs|dfs|dijkstra|astar] [--seed N] [--delay MS]
//!
//! Press `q` or `Esc` to stop a run early, any key to exit once it is done.

use std::error::Error;
use std::io::{self, Stdout, Write};
use std::ops::ControlFlow;
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use rand::{RngExt, SeedableRng};

use pathviz_core::{Board, BoardConfig, Color, NORMAL, Point, TerrainRegistry, TerrainView};
use pathviz_paths::{Algorithm, Outcome, RunConfig, RunController, SearchEvent};

const WIDTH: i32 = 30;
const HEIGHT: i32 = 16;

const VISITED: Color = Color::from_rgb(70, 160, 220);
const PATH: Color = Color::YELLOW;
const START: Color = Color::from_rgb(40, 200, 80);
const END: Color = Color::MAGENTA;

struct Options {
    algorithm: Algorithm,
    seed: u64,
    delay: Duration,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options, Box<dyn Error>> {
    let mut opts = Options {
        algorithm: Algorithm::AStar,
        seed: 42,
        delay: RunConfig::default().step_delay,
    };
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                opts.seed = args.next().ok_or("--seed needs a value")?.parse()?;
            }
            "--delay" => {
                let ms: u64 = args.next().ok_or("--delay needs a value")?.parse()?;
                opts.delay = Duration::from_millis(ms);
            }
            name => opts.algorithm = name.parse()?,
        }
    }
    log::debug!(
        "algorithm {}, seed {}, delay {:?}",
        opts.algorithm,
        opts.seed,
        opts.delay
    );
    Ok(opts)
}

/// Scatter random terrain over a fresh board.
fn build_board(registry: &TerrainRegistry, seed: u64) -> Result<Board, Box<dyn Error>> {
    let mut board = Board::new(BoardConfig {
        width: WIDTH,
        height: HEIGHT,
        start: Point::new(1, HEIGHT / 2),
        end: Point::new(WIDTH - 2, HEIGHT / 2),
    })?;
    let names: Vec<&str> = registry.iter().map(|t| t.name.as_str()).collect();
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    for p in board.grid().cells() {
        // Roughly two thirds of the board stays open ground.
        let name = if rng.random_range(0..3) == 0 {
            names[rng.random_range(0..names.len())]
        } else {
            NORMAL
        };
        board.paint(p, name);
    }
    Ok(board)
}

/// Maps a [`pathviz_core::Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    CtColor::Rgb {
        r: c.r(),
        g: c.g(),
        b: c.b(),
    }
}

/// Raw-mode alternate screen, restored on drop.
struct Screen {
    out: Stdout,
}

impl Screen {
    fn open() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self { out })
    }

    /// Paint one board cell, two columns wide.
    fn cell(&mut self, p: Point, color: Color) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(2 * p.x as u16, p.y as u16),
            SetBackgroundColor(to_ct_color(color)),
            Print("  "),
            ResetColor
        )
    }

    fn board(&mut self, view: TerrainView<'_>) -> io::Result<()> {
        let board = view.board();
        for p in board.grid().cells() {
            let color = if p == board.start() {
                START
            } else if p == board.end() {
                END
            } else {
                view.terrain_at(p).map_or(Color::BLACK, |t| t.color)
            };
            self.cell(p, color)?;
        }
        self.out.flush()
    }

    fn status(&mut self, msg: &str) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, HEIGHT as u16 + 1),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(CtColor::White),
            Print(msg),
            ResetColor
        )?;
        self.out.flush()
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Whether a quit key is waiting, without blocking.
fn quit_pressed() -> io::Result<bool> {
    while event::poll(Duration::ZERO)? {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            if matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(_) = event::read()? {
            return Ok(());
        }
    }
}

fn run(opts: Options) -> Result<(), Box<dyn Error>> {
    let registry = TerrainRegistry::default();
    let board = build_board(&registry, opts.seed)?;
    let mut controller = RunController::new(RunConfig {
        step_delay: opts.delay,
    });

    let mut screen = Screen::open()?;
    screen.board(board.view(&registry))?;
    let ordering = if opts.algorithm.is_weighted() {
        "by cost"
    } else {
        "by hops"
    };
    screen.status(&format!("{} {ordering} (seed {})", opts.algorithm, opts.seed))?;

    let id = controller.start_on_board(opts.algorithm, &board, &registry)?;
    let mut visited = 0usize;
    let mut io_err = None;
    let outcome = controller.drive(
        |event| {
            let drawn = match event {
                SearchEvent::Visit(p) => {
                    visited += 1;
                    screen.cell(*p, VISITED)
                }
                SearchEvent::Path(p) => screen.cell(*p, PATH),
                SearchEvent::Done(_) => Ok(()),
            };
            match drawn.and_then(|_| screen.out.flush()).and_then(|_| quit_pressed()) {
                Ok(false) => ControlFlow::Continue(()),
                Ok(true) => ControlFlow::Break(()),
                Err(e) => {
                    io_err = Some(e);
                    ControlFlow::Break(())
                }
            }
        },
        thread::sleep,
    )?;
    if let Some(e) = io_err {
        return Err(e.into());
    }

    let summary = match outcome {
        Some(Outcome::Found { path, cost }) => format!(
            "{id}: {} found a path of {} steps, cost {cost:.2}, {visited} visited",
            opts.algorithm,
            path.len() - 1
        ),
        Some(Outcome::NotFound) => {
            format!("{id}: {} found no path, {visited} visited", opts.algorithm)
        }
        None => format!("{id}: canceled"),
    };
    log::info!("{summary}");
    screen.status(&format!("{summary}. Press any key."))?;
    wait_for_key()?;
    Ok(())
}

fn main() {
    let result = parse_args(std::env::args().skip(1)).and_then(run);
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
