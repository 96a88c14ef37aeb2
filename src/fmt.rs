use std::fmt;

use crate::{Cell, ChessConfig, Grid, HoppersConfig, Piece, SearchResult, StringsConfig};

fn fmt_grid<T>(
    grid: &Grid<T>,
    f: &mut fmt::Formatter<'_>,
    mut fmt_cell: impl FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    for row in grid.rows() {
        for (cell, i) in row.iter().zip(0..) {
            if i != 0 {
                f.write_str(" ")?;
            }
            fmt_cell(cell, f)?;
        }
        f.write_str("\n")?;
    }
    Ok(())
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Water => f.write_str("*"),
            Cell::LilyPad => f.write_str("."),
            Cell::Red => f.write_str("R"),
            Cell::Green => f.write_str("G"),
        }
    }
}

impl fmt::Display for ChessConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_grid(self.board(), f, |cell, f| match cell {
            Some(piece) => write!(f, "{piece}"),
            None => f.write_str("."),
        })
    }
}

impl fmt::Display for HoppersConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_grid(self.pond(), f, |cell, f| write!(f, "{cell}"))
    }
}

impl fmt::Display for StringsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.current())
    }
}

/// Human-readable summary of a [`SearchResult`].
pub struct Report<'a, C>(&'a SearchResult<C>);

impl<C> SearchResult<C> {
    pub fn report(&self) -> Report<'_, C> {
        Report(self)
    }
}

impl<C: fmt::Display> fmt::Display for Report<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total configs: {}", self.0.total_configs)?;
        writeln!(f, "Unique configs: {}", self.0.unique_configs)?;
        let Some(path) = self.0.path() else {
            return writeln!(f, "No solution");
        };
        for (config, i) in path.iter().zip(0..) {
            let text = config.to_string();
            if text.contains('\n') {
                write!(f, "Step {i}:\n{text}")?;
            } else {
                writeln!(f, "Step {i}: {text}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{ChessConfig, StringsConfig};

    #[test]
    fn board_round_trips() {
        let text = "2 3\nR . N\n. . Q\n";
        let config = text.parse::<ChessConfig>().unwrap();
        assert_eq!(config.to_string(), "R . N\n. . Q\n");
    }

    #[test]
    fn strings_report() {
        let result = crate::solve(StringsConfig::new("AA", "AB").unwrap());
        assert_eq!(
            result.report().to_string(),
            "Total configs: 5\nUnique configs: 5\nStep 0: AA\nStep 1: AB\n",
        );
    }

    #[test]
    fn board_report() {
        let result = crate::solve("1 2\nN N".parse::<ChessConfig>().unwrap());
        assert_eq!(
            result.report().to_string(),
            "Total configs: 1\nUnique configs: 1\nNo solution\n",
        );

        let result = crate::solve("2 2\nR .\n. B".parse::<ChessConfig>().unwrap());
        assert_eq!(
            result.report().to_string(),
            "Total configs: 2\nUnique configs: 2\nStep 0:\nR .\n. B\nStep 1:\nB .\n. .\n",
        );
    }
}
