use crate::core::entities::Coords;

/// Column letters, skipping `I`. Also bounds the largest supported board.
pub const COLUMN_LABELS: [char; 19] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T',
];

pub const MAX_BOARD_SIZE: u8 = COLUMN_LABELS.len() as u8;

pub fn get_column_name(col: u8) -> char {
    COLUMN_LABELS.get(col as usize).copied().unwrap_or('?')
}

pub fn get_column_number(col: char) -> Option<u8> {
    let upper = col.to_ascii_uppercase();

    COLUMN_LABELS
        .iter()
        .position(|&label| label == upper)
        .map(|pos| pos as u8)
}

/// Human notation for an intersection, e.g. `(3, 15)` on 19x19 is `D4`.
pub fn to_notation(x: u8, y: u8, board_size: u8) -> String {
    format!("{}{}", get_column_name(x), board_size as i32 - y as i32)
}

/// Inverse of [`to_notation`]. `None` for malformed text or a vertex off the
/// board.
pub fn parse_notation(input: &str, board_size: u8) -> Option<Coords> {
    let mut chars = input.trim().chars();
    let x = get_column_number(chars.next()?)?;
    let digits = chars.as_str();

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let row: u8 = digits.parse().ok()?;

    if x >= board_size || row == 0 || row > board_size {
        return None;
    }

    Some(Coords::from(x, board_size - row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_column_name_number_mapping() {
        let char_table = [
            ('A', 0),
            ('B', 1),
            ('C', 2),
            ('D', 3),
            ('E', 4),
            ('F', 5),
            ('G', 6),
            ('H', 7),
            ('J', 8),
            ('K', 9),
            ('L', 10),
            ('M', 11),
            ('N', 12),
            ('O', 13),
            ('P', 14),
            ('Q', 15),
            ('R', 16),
            ('S', 17),
            ('T', 18),
        ];

        for (char_name, char_nr) in char_table {
            assert_eq!(char_name, get_column_name(char_nr));
            assert_eq!(Some(char_nr), get_column_number(char_name));
            assert_eq!(
                Some(char_nr),
                get_column_number(char_name.to_ascii_lowercase())
            );
        }
    }

    #[test]
    fn column_i_is_skipped() {
        assert_eq!(None, get_column_number('I'));
        assert_eq!('J', get_column_name(8));
    }

    #[test]
    fn rows_count_down_from_board_size() {
        assert_eq!("A19", to_notation(0, 0, 19));
        assert_eq!("T1", to_notation(18, 18, 19));
        assert_eq!("D4", to_notation(3, 15, 19));
        assert_eq!("E5", to_notation(4, 4, 9));
        assert_eq!("J1", to_notation(8, 8, 9));
    }

    #[test]
    fn parse_notation_inverts_to_notation() {
        for size in [5u8, 9, 13, 19] {
            for y in 0..size {
                for x in 0..size {
                    let text = to_notation(x, y, size);
                    assert_eq!(Some(Coords::from(x, y)), parse_notation(&text, size));
                }
            }
        }
    }

    #[test]
    fn parse_notation_rejects_bad_input() {
        assert_eq!(None, parse_notation("", 19));
        assert_eq!(None, parse_notation("D", 19));
        assert_eq!(None, parse_notation("D0", 19));
        assert_eq!(None, parse_notation("D20", 19));
        assert_eq!(None, parse_notation("I5", 19));
        assert_eq!(None, parse_notation("K5", 9));
        assert_eq!(None, parse_notation("4D", 19));
        assert_eq!(None, parse_notation("D+4", 19));
        assert_eq!(None, parse_notation("D 4", 19));
        assert_eq!(None, parse_notation("D-4", 19));
        assert_eq!(Some(Coords::from(3, 15)), parse_notation(" d4 ", 19));
    }
}
