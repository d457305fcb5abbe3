use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color as TermColor, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdin, stdout, Write};

use network_ai::*;

const SEARCH_DEPTH: u32 = 3;

fn main() -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Network\n");
    println!("White connects the left and right edges, Black the top and bottom.");
    println!("Enter moves as 'x y' to add a piece, or 'from_x from_y x y' to step.\n");

    // choose AI control of each side; White moves first
    let ai_white = ask_yes_no("Is White (first to move) AI controlled? y/n: ")?;
    let ai_black = ask_yes_no("Is Black AI controlled? y/n: ")?;

    let mut board = Board::new();
    let mut to_move = Color::White;

    // game loop
    loop {
        display(&board)?;

        let is_ai = match to_move {
            Color::White => ai_white,
            Color::Black => ai_black,
        };

        if is_ai {
            println!("AI is thinking...");
            stdout().flush()?;

            // slow down play if both players are AI
            if ai_white && ai_black {
                std::thread::sleep(std::time::Duration::new(1, 0));
            }

            let mut searcher = Searcher::new(to_move, SEARCH_DEPTH);
            let mv = searcher.best_move(&mut board);
            println!(
                "{:?} plays {} ({} nodes searched)",
                to_move, mv, searcher.node_count
            );
            if !board.apply_move(to_move, mv) {
                // the searcher only proposes legal moves; bail if it didn't
                return Err(anyhow!("search returned the illegal move {}", mv));
            }
        } else {
            print!("{:?} move > ", to_move);
            stdout().flush()?;
            let mut input = String::new();
            stdin.read_line(&mut input)?;

            let mv = match parse_move(&input) {
                Ok(mv) => mv,
                Err(err) => {
                    println!("{}", err);
                    continue;
                }
            };
            if !board.apply_move(to_move, mv) {
                println!("Illegal move: {}", mv);
                continue;
            }
        }

        // a step can complete either side's network, so check both
        for &color in [to_move, to_move.opponent()].iter() {
            if board.has_network(color) {
                display(&board)?;
                println!("{:?} wins!", color);
                return Ok(());
            }
        }

        to_move = to_move.opponent();
    }
}

fn ask_yes_no(prompt: &str) -> Result<bool> {
    let stdin = stdin();
    loop {
        print!("{}", prompt);
        stdout().flush()?;

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;

        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn parse_move(input: &str) -> Result<Move> {
    let fields = input
        .split_whitespace()
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| anyhow!("could not parse '{}' as a coordinate", token))
        })
        .collect::<Result<Vec<usize>>>()?;

    match fields[..] {
        [x, y] => Ok(Move::Add { x, y }),
        [from_x, from_y, x, y] => Ok(Move::Step { x, y, from_x, from_y }),
        _ => Err(anyhow!(
            "expected 'x y' to add a piece or 'from_x from_y x y' to step"
        )),
    }
}

fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let header: String = (0..SIZE).map(|x| format!(" {}", x)).collect();
    stdout.queue(PrintStyledContent(style(format!("  {}\n", header))))?;

    for y in 0..SIZE {
        stdout.queue(PrintStyledContent(style(format!("{} ", y))))?;
        for x in 0..SIZE {
            let content = match board.cell(x, y) {
                Cell::Black => style(" B").with(TermColor::Red).attribute(Attribute::Bold),
                Cell::White => style(" W")
                    .with(TermColor::White)
                    .attribute(Attribute::Bold),
                Cell::Empty => style(" .").with(TermColor::DarkGrey),
            };
            stdout.queue(PrintStyledContent(content))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
