//! Tests for direction offsets, opposites and the glyph table

#[cfg(test)]
mod tests {
    use originshift::spatial::direction::{Direction, SYMBOLS};

    #[test]
    fn test_discriminants_index_symbol_table() {
        for value in 0..5u8 {
            let direction = Direction::try_from(value).unwrap_or_else(|v| unreachable!("{v}"));
            assert_eq!(direction as u8, value);
            assert_eq!(Some(&direction.symbol()), SYMBOLS.get(usize::from(value)));
        }
        assert_eq!(Direction::try_from(5), Err(5));
    }

    #[test]
    fn test_symbol_table_contents() {
        assert_eq!(SYMBOLS, ['+', '>', 'v', '<', '^']);
    }

    #[test]
    fn test_symbols_parse_back() {
        for symbol in SYMBOLS {
            let direction = Direction::from_symbol(symbol);
            assert_eq!(direction.map(Direction::symbol), Some(symbol));
        }
        assert_eq!(Direction::from_symbol('x'), None);
    }

    // Tests opposite directions cancel out
    // Verified by swapping the Up and Down opposites
    #[test]
    fn test_opposite_offsets_cancel() {
        for direction in Direction::CARDINALS {
            let (dx, dy) = direction.offset();
            let (ox, oy) = direction.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
        assert_eq!(Direction::Origin.offset(), (0, 0));
    }

    #[test]
    fn test_offsets_follow_screen_axes() {
        assert_eq!(Direction::Right.offset(), (1, 0));
        assert_eq!(Direction::Down.offset(), (0, 1));
        assert_eq!(Direction::Left.offset(), (-1, 0));
        assert_eq!(Direction::Up.offset(), (0, -1));
    }

    #[test]
    fn test_only_origin_is_origin() {
        assert!(Direction::Origin.is_origin());
        assert!(Direction::CARDINALS.iter().all(|d| !d.is_origin()));
        assert_eq!(Direction::default(), Direction::Origin);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Origin.to_string(), "origin");
    }
}
