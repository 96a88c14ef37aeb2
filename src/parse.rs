use std::str::FromStr;

use anyhow::{bail, ensure, Context, Result};

use crate::{Cell, ChessConfig, Grid, HoppersConfig, Piece};

/// Parse `ROWS COLS` followed by ROWS lines of COLS whitespace-separated tokens.
fn parse_grid<T>(s: &str, mut parse_cell: impl FnMut(&str) -> Result<T>) -> Result<Grid<T>> {
    let mut lines = s
        .lines()
        .map(|line| line.trim())
        .zip(1..)
        .skip_while(|(line, _)| line.is_empty());

    let (dims, _) = lines.next().context("Missing dimensions")?;
    let dims = dims
        .split_whitespace()
        .map(|n| n.parse::<u8>().with_context(|| format!("Invalid dimension: {n:?}")))
        .collect::<Result<Vec<_>>>()?;
    let &[height, width] = dims.as_slice() else {
        bail!("Expecting 2 dimensions, got {}", dims.len());
    };
    ensure!(height > 0 && width > 0, "Empty grid {height}x{width}");

    let mut cells = Vec::with_capacity(height as usize * width as usize);
    for row in 0..height {
        let (line, lineno) = lines
            .next()
            .with_context(|| format!("Missing row {row}, expecting {height} rows"))?;
        let start = cells.len();
        for token in line.split_whitespace() {
            let cell = parse_cell(token).with_context(|| format!("Line {lineno}"))?;
            cells.push(cell);
        }
        ensure!(
            cells.len() - start == width as usize,
            "Width mismatch on line {lineno}, expecting {width} cells, got {}",
            cells.len() - start,
        );
    }

    if let Some((_, lineno)) = lines.find(|(line, _)| !line.is_empty()) {
        bail!("Unexpected content on line {lineno} after {height} rows");
    }

    Ok(Grid::new(height, width, cells))
}

fn single_char(token: &str) -> Result<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => bail!("Invalid cell: {token:?}"),
    }
}

impl FromStr for ChessConfig {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let board = parse_grid(s, |token| {
            Ok(match single_char(token)? {
                '.' => None,
                ch => Some(Piece::from_symbol(ch).with_context(|| format!("Invalid piece: {ch:?}"))?),
            })
        })?;
        Ok(ChessConfig::new(board))
    }
}

impl FromStr for HoppersConfig {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pond = parse_grid(s, |token| {
            Ok(match single_char(token)? {
                '*' => Cell::Water,
                '.' => Cell::LilyPad,
                'R' => Cell::Red,
                'G' => Cell::Green,
                ch => bail!("Invalid cell: {ch:?}"),
            })
        })?;
        Ok(HoppersConfig::new(pond))
    }
}

#[cfg(test)]
mod tests {
    use crate::{ChessConfig, HoppersConfig, Pos};

    #[test]
    fn chess_board() {
        let config = "\n2 3\nR . N\n. . Q\n\n".parse::<ChessConfig>().unwrap();
        assert_eq!((config.board().height(), config.board().width()), (2, 3));
        assert_eq!(config.pieces(), 3);
        assert_eq!(config.board()[Pos(1, 2)], Some(crate::Piece::Queen));
    }

    #[test]
    fn malformed() {
        for input in [
            "",
            "2\nR .",
            "1 2\nR",
            "1 2\nR . N",
            "2 2\nR .",
            "1 2\nR X",
            "1 2\nR .\nN .",
            "1 2\nRR .",
            "0 3\n",
            "300 1",
        ] {
            assert!(input.parse::<ChessConfig>().is_err(), "{input:?}");
        }
    }

    #[test]
    fn hoppers_pond() {
        let config = "3 3\nG * R\n* . *\nG * .".parse::<HoppersConfig>().unwrap();
        assert_eq!(config.greens(), 2);
        assert!("1 2\nG N".parse::<HoppersConfig>().is_err());
    }
}
