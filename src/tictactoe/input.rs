//! Move input parsing

/// Convert `"row,col"` (both 0-2) into a cell index `row * 3 + col`.
///
/// ```
/// use tutor::tictactoe::parse_move;
///
/// assert_eq!(parse_move("1,2")?, 5);
/// assert_eq!(parse_move(" 2 , 0 ")?, 6);
/// assert!(parse_move("3,0").is_err());
/// # Ok::<(), tutor::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`InvalidMoveInput`](crate::Error::InvalidMoveInput) if the input
/// is not two comma-separated integers in range.
pub fn parse_move(input: &str) -> Result<usize, crate::Error> {
    let invalid = || crate::Error::InvalidMoveInput {
        input: input.to_string(),
    };

    let (row, col) = input.trim().split_once(',').ok_or_else(invalid)?;
    let row: usize = row.trim().parse().map_err(|_| invalid())?;
    let col: usize = col.trim().parse().map_err(|_| invalid())?;
    if row > 2 || col > 2 {
        return Err(invalid());
    }
    Ok(row * 3 + col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_and_center() {
        assert_eq!(parse_move("0,0").unwrap(), 0);
        assert_eq!(parse_move("1,1").unwrap(), 4);
        assert_eq!(parse_move("2,2").unwrap(), 8);
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "1", "1,", "a,b", "1,2,3", "-1,0", "0,3"] {
            assert!(
                matches!(parse_move(input), Err(crate::Error::InvalidMoveInput { .. })),
                "expected rejection for {input:?}"
            );
        }
    }
}
