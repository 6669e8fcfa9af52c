//! Tests for node storage, default orientation and invariant-preserving edits

#[cfg(test)]
mod tests {
    use originshift::MazeError;
    use originshift::spatial::direction::Direction::{self, Down, Left, Origin, Right, Up};
    use originshift::spatial::grid::{Grid, Position};

    fn grid(width: usize, height: usize) -> Grid<u32> {
        Grid::new(width, height).unwrap_or_else(|error| unreachable!("{error}"))
    }

    fn row_major(grid: &Grid<u32>) -> Vec<Direction> {
        grid.directions().iter().copied().collect()
    }

    // Tests the pinned 3x2 default layout cell by cell
    // Verified by pointing the left column LEFT instead of UP
    #[test]
    fn test_default_orientation_3x2() {
        let grid = grid(3, 2);

        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.origin(), Position::new(0, 0));
        assert_eq!(row_major(&grid), vec![Origin, Left, Left, Up, Left, Left]);
    }

    #[test]
    fn test_default_orientation_single_column_and_row() {
        let column = grid(1, 3);
        assert_eq!(row_major(&column), vec![Origin, Up, Up]);

        let row = grid(3, 1);
        assert_eq!(row_major(&row), vec![Origin, Left, Left]);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Grid::<u32>::new(0, 3),
            Err(MazeError::InvalidParameter {
                parameter: "width",
                ..
            })
        ));
        assert!(matches!(
            Grid::<u32>::new(3, 0),
            Err(MazeError::InvalidParameter {
                parameter: "height",
                ..
            })
        ));
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        assert!(Grid::<u32>::new(10_001, 1).is_err());
    }

    #[test]
    fn test_neighbour_respects_bounds() {
        let grid = grid(3, 2);
        let corner = Position::new(0, 0);

        assert_eq!(grid.neighbour(corner, Right), Some(Position::new(1, 0)));
        assert_eq!(grid.neighbour(corner, Down), Some(Position::new(0, 1)));
        assert_eq!(grid.neighbour(corner, Left), None);
        assert_eq!(grid.neighbour(corner, Up), None);
        assert_eq!(grid.neighbour(corner, Origin), None);
        assert_eq!(grid.neighbour(Position::new(2, 1), Right), None);
    }

    #[test]
    fn test_node_out_of_bounds() {
        let grid = grid(3, 2);
        let result = grid.node(Position::new(3, 0));

        assert!(matches!(
            result,
            Err(MazeError::OutOfBounds {
                x: 3,
                y: 0,
                dimensions: (3, 2)
            })
        ));
    }

    // Tests a second origin is refused and nothing changes
    // Verified by removing the duplicate check in set_node
    #[test]
    fn test_duplicate_origin_rejected_without_change() {
        let mut grid = grid(3, 2);
        let before = grid.clone();

        let result = grid.set_node(Position::new(2, 1), Origin, Some(7));

        assert!(matches!(
            result,
            Err(MazeError::DuplicateOrigin { existing, requested })
                if existing == Position::new(0, 0) && requested == Position::new(2, 1)
        ));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_origin_on_origin_only_updates_payload() {
        let mut grid = grid(2, 2);

        assert!(grid.set_node(Position::new(0, 0), Origin, Some(5)).is_ok());
        assert_eq!(grid.origin(), Position::new(0, 0));
        assert_eq!(grid.payload(Position::new(0, 0)).ok().flatten(), Some(&5));
    }

    #[test]
    fn test_origin_cannot_gain_an_edge() {
        let mut grid = grid(2, 2);
        let before = grid.clone();

        let result = grid.set_node(Position::new(0, 0), Right, None);

        assert!(matches!(result, Err(MazeError::MissingOrigin { .. })));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_edge_pointing_outside_rejected() {
        let mut grid = grid(3, 2);
        let before = grid.clone();

        let result = grid.set_node(Position::new(2, 1), Right, None);

        assert!(matches!(result, Err(MazeError::OutOfBounds { x: 3, y: 1, .. })));
        assert_eq!(grid, before);
    }

    // Tests re-pointing a node into its own subtree is refused
    // Verified by skipping the root-path walk in set_node
    #[test]
    fn test_cycle_rejected() {
        let mut grid = grid(3, 2);
        let before = grid.clone();

        // (1,0) is reached from (2,0) which points left at it
        let result = grid.set_node(Position::new(1, 0), Right, None);

        assert!(matches!(
            result,
            Err(MazeError::Cycle { position }) if position == Position::new(1, 0)
        ));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_valid_rewire_applied() {
        let mut grid = grid(3, 2);

        // (1,1) can reach the root through (1,0) as well as (0,1)
        assert!(grid.set_node(Position::new(1, 1), Up, Some(9)).is_ok());
        assert_eq!(grid.direction(Position::new(1, 1)).ok(), Some(Up));
        assert_eq!(grid.payload(Position::new(1, 1)).ok().flatten(), Some(&9));
        assert_eq!(grid.origin(), Position::new(0, 0));
    }

    #[test]
    fn test_set_node_without_payload_keeps_existing() {
        let mut grid = grid(3, 2);
        let cell = Position::new(1, 1);

        assert!(grid.set_payload(cell, 3).is_ok());
        assert!(grid.set_node(cell, Up, None).is_ok());

        assert_eq!(grid.payload(cell).ok().flatten(), Some(&3));
    }

    #[test]
    fn test_payload_replace_and_take() {
        let mut grid = grid(2, 2);
        let cell = Position::new(1, 0);

        assert_eq!(grid.set_payload(cell, 1).ok(), Some(None));
        assert_eq!(grid.set_payload(cell, 2).ok(), Some(Some(1)));
        assert_eq!(grid.take_payload(cell).ok(), Some(Some(2)));
        assert_eq!(grid.payload(cell).ok(), Some(None));
        assert!(grid.set_payload(Position::new(5, 5), 1).is_err());
    }

    #[test]
    fn test_from_directions_round_trips_layout() {
        let layout = [Right, Down, Down, Right, Right, Origin];
        let grid: Grid<u32> = Grid::from_directions(3, 2, &layout)
            .unwrap_or_else(|error| unreachable!("{error}"));

        assert_eq!(grid.origin(), Position::new(2, 1));
        assert_eq!(row_major(&grid), layout.to_vec());
    }

    #[test]
    fn test_from_directions_rejects_bad_layouts() {
        let wrong_length = Grid::<u32>::from_directions(2, 2, &[Origin, Left, Up]);
        assert!(matches!(
            wrong_length,
            Err(MazeError::InvalidParameter {
                parameter: "directions",
                ..
            })
        ));

        let no_origin = Grid::<u32>::from_directions(2, 1, &[Right, Left]);
        assert!(matches!(no_origin, Err(MazeError::MissingOrigin { position: None })));

        let two_origins = Grid::<u32>::from_directions(2, 1, &[Origin, Origin]);
        assert!(matches!(two_origins, Err(MazeError::DuplicateOrigin { .. })));

        let loop_layout = Grid::<u32>::from_directions(2, 2, &[Right, Down, Origin, Up]);
        assert!(matches!(loop_layout, Err(MazeError::Cycle { .. })));

        let escaping = Grid::<u32>::from_directions(2, 1, &[Origin, Right]);
        assert!(matches!(escaping, Err(MazeError::OutOfBounds { .. })));
    }

    #[test]
    fn test_iter_visits_row_major() {
        let grid = grid(2, 2);
        let positions: Vec<Position> = grid.iter().map(|(position, _)| position).collect();

        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(4, 2).to_string(), "(4, 2)");
    }
}
