//! Interactive terminal rounds: prompts, board display, and replay.
//!
//! Generic over the input and output streams so a whole session can be
//! driven from an in-memory script.

use std::io::{BufRead, Write};
use std::string::String;

use rand::Rng;

use crate::{Coordinate, Game, GameStatus, GuessResult, RowLabel, BOARD_COLS};

fn read_line<I: BufRead>(input: &mut I) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    text: &str,
) -> anyhow::Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;
    read_line(input)
}

/// Ask for a row label until one on the board is entered.
pub fn prompt_row<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
) -> anyhow::Result<Option<RowLabel>> {
    loop {
        let Some(line) = prompt(input, output, "Enter a row: ")? else {
            return Ok(None);
        };
        if let Some(row) = line.chars().next().and_then(RowLabel::from_char) {
            return Ok(Some(row));
        }
    }
}

/// Ask for a column until one in `[0, BOARD_COLS)` is entered.
pub fn prompt_col<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
) -> anyhow::Result<Option<usize>> {
    loop {
        let Some(line) = prompt(input, output, "Enter a column: ")? else {
            return Ok(None);
        };
        match line.parse::<usize>() {
            Ok(col) if col < BOARD_COLS => return Ok(Some(col)),
            _ => continue,
        }
    }
}

/// Ask "Play again (Y/N)?" until a yes or no is given.
pub fn prompt_play_again<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
) -> anyhow::Result<Option<bool>> {
    loop {
        let Some(line) = prompt(input, output, "Play again (Y/N)?")? else {
            return Ok(None);
        };
        match line.to_ascii_lowercase().as_str() {
            "y" => return Ok(Some(true)),
            "n" => return Ok(Some(false)),
            _ => continue,
        }
    }
}

fn display<O: Write>(output: &mut O, game: &Game) -> anyhow::Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", game.board())?;
    Ok(())
}

/// Play `game` to completion. Returns `None` if input ends mid-round.
pub fn play_round<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    game: &mut Game,
) -> anyhow::Result<Option<GameStatus>> {
    display(output, game)?;
    while !game.is_complete() {
        let Some(row) = prompt_row(input, output)? else {
            return Ok(None);
        };
        let Some(col) = prompt_col(input, output)? else {
            return Ok(None);
        };
        let coord = Coordinate::new(row, col).map_err(|e| anyhow::anyhow!(e))?;
        let result = game
            .resolve_guess(coord)
            .map_err(|e| anyhow::anyhow!(e))?;
        if let GuessResult::Sink(name) = result {
            writeln!(output, "You sunk the {}!", name)?;
        }
        game.apply_result(result.is_hit(), coord)
            .map_err(|e| anyhow::anyhow!(e))?;
        display(output, game)?;
    }
    let status = game.status();
    match status {
        GameStatus::Exhausted => writeln!(output, "SORRY! NO GUESSES LEFT.")?,
        GameStatus::Won => writeln!(output, "YOU WIN!")?,
        GameStatus::InProgress => {}
    }
    Ok(Some(status))
}

/// Run rounds until the player declines another or input ends.
pub fn run<I: BufRead, O: Write, R: Rng>(
    input: &mut I,
    output: &mut O,
    rng: &mut R,
    max_misses: usize,
) -> anyhow::Result<()> {
    writeln!(output, "Let's Play Battleship!\n")?;
    loop {
        let mut game = Game::new(max_misses, rng).map_err(|e| anyhow::anyhow!(e))?;
        if play_round(input, output, &mut game)?.is_none() {
            break;
        }
        if prompt_play_again(input, output)? != Some(true) {
            break;
        }
    }
    writeln!(output, "Goodbye.")?;
    Ok(())
}
