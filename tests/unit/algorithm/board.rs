//! Tests for board validation, ordering and successor generation

#[cfg(test)]
mod tests {
    use blockslide::algorithm::board::Board;
    use blockslide::algorithm::heuristic::DistanceHeuristic;
    use blockslide::io::configuration::{reference_board, reference_tiles};
    use blockslide::io::error::PuzzleError;
    use blockslide::spatial::{Color, Direction, Tile};
    use std::collections::BTreeSet;

    fn tile(x: i32, y: i32, width: i32, height: i32) -> Tile {
        Tile::new(x, y, width, height, Color::default())
            .unwrap_or_else(|error| panic!("valid tile rejected: {error}"))
    }

    fn colored(x: i32, y: i32, width: i32, height: i32, rgb: [u8; 3]) -> Tile {
        let [r, g, b] = rgb;
        Tile::new(x, y, width, height, Color::from_rgb8(r, g, b))
            .unwrap_or_else(|error| panic!("valid tile rejected: {error}"))
    }

    fn board(tiles: Vec<Tile>, width: i32, height: i32) -> Board {
        Board::new(tiles, width, height).unwrap_or_else(|error| panic!("valid board rejected: {error}"))
    }

    fn reference() -> Board {
        reference_board().unwrap_or_else(|error| panic!("reference board rejected: {error}"))
    }

    // Asserts no cell is covered twice and the grid matches the tile set
    fn assert_consistent(board: &Board) {
        let mut covered = BTreeSet::new();
        for placed in board.tiles() {
            for cell in placed.cells() {
                assert!(covered.insert(cell), "cell {cell:?} covered twice");
                assert!(board.occupancy().is_occupied(cell.0, cell.1));
            }
        }
        assert_eq!(covered.len(), board.occupancy().occupied_count());
    }

    // Tests the reference layout builds with the expected occupancy
    #[test]
    fn test_reference_board() {
        let board = reference();
        assert_eq!(board.tile_count(), 9);
        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 5);
        assert_eq!(board.occupancy().occupied_count(), 16);
        assert_eq!(board.distance(), 0);
        assert_consistent(&board);

        for (x, y) in [(0, 1), (1, 1), (3, 0), (3, 1)] {
            assert!(board.occupancy().is_free(x, y));
        }
    }

    // Tests out-of-bounds tiles fail fast
    #[test]
    fn test_rejects_out_of_bounds() {
        let result = Board::new(vec![tile(3, 0, 2, 1)], 4, 5);
        assert!(matches!(
            result,
            Err(PuzzleError::TileOutOfBounds {
                tile: (3, 0, 2, 1),
                grid: (4, 5)
            })
        ));
    }

    // Tests coordinates whose far edge overflows i32 are out of bounds
    #[test]
    fn test_rejects_overflowing_extent() {
        let result = Board::new(vec![tile(i32::MAX, 0, 1, 1)], 4, 5);
        assert!(matches!(
            result,
            Err(PuzzleError::TileOutOfBounds {
                tile: (i32::MAX, 0, 1, 1),
                grid: (4, 5)
            })
        ));

        let result = Board::new(vec![tile(0, 1, 1, i32::MAX)], 4, 5);
        assert!(matches!(result, Err(PuzzleError::TileOutOfBounds { .. })));
    }

    // Tests overlapping tiles fail fast and name a shared cell
    #[test]
    fn test_rejects_overlap() {
        let result = Board::new(vec![tile(0, 0, 2, 2), tile(1, 1, 1, 1)], 4, 5);
        match result {
            Err(PuzzleError::OverlappingTiles {
                first,
                second,
                cell,
            }) => {
                assert_eq!(first, (0, 0, 2, 2));
                assert_eq!(second, (1, 1, 1, 1));
                assert_eq!(cell, (1, 1));
            }
            other => unreachable!("expected overlap error, got {other:?}"),
        }
    }

    // Tests the same key supplied twice is reported as a duplicate
    #[test]
    fn test_rejects_duplicate() {
        let result = Board::new(vec![tile(1, 1, 1, 1), tile(1, 1, 1, 1)], 4, 5);
        assert!(matches!(
            result,
            Err(PuzzleError::DuplicateTile { tile: (1, 1, 1, 1) })
        ));
    }

    // Tests non-positive grid dimensions are rejected
    #[test]
    fn test_rejects_bad_dimensions() {
        assert!(matches!(
            Board::new(Vec::new(), 0, 5),
            Err(PuzzleError::InvalidDimensions { width: 0, height: 5 })
        ));
    }

    // Tests rebuilding a board from the same tiles yields identical occupancy
    #[test]
    fn test_occupancy_rebuild_idempotent() {
        let first = reference();
        let second = board(first.tiles().collect(), first.width(), first.height());
        assert_eq!(first.occupancy(), second.occupancy());
        assert_eq!(first, second);
    }

    // Tests insertion order does not affect identity or tile order
    #[test]
    fn test_insertion_order_irrelevant() {
        let mut tiles = reference_tiles();
        let forward = board(tiles.clone(), 4, 5);
        tiles.reverse();
        let backward = board(tiles, 4, 5);

        assert_eq!(forward, backward);
        assert_eq!(
            forward.keys().collect::<Vec<_>>(),
            backward.keys().collect::<Vec<_>>()
        );
    }

    // Tests boards differing only in color compare equal
    #[test]
    fn test_color_excluded_from_equality() {
        let red = board(vec![colored(0, 0, 1, 1, [255, 0, 0])], 2, 2);
        let blue = board(vec![colored(0, 0, 1, 1, [0, 0, 255])], 2, 2);
        assert_eq!(red, blue);
        assert_eq!(red.cmp(&blue), std::cmp::Ordering::Equal);
    }

    // Tests the heuristic distance dominates the tile-set order
    #[test]
    fn test_distance_dominates_ordering() {
        let near = board(vec![tile(2, 2, 2, 2), tile(0, 0, 1, 1)], 4, 5);
        let far = board(vec![tile(0, 2, 2, 2), tile(3, 0, 1, 1)], 4, 5);

        assert_eq!(near.distance(), 0);
        assert_eq!(far.distance(), 4);
        assert!(far > near);
    }

    // Tests a board without the tracked shape has distance zero
    #[test]
    fn test_zero_distance_without_tracked_shape() {
        let small = board(vec![tile(3, 4, 1, 1), tile(0, 0, 2, 1)], 4, 5);
        assert_eq!(small.distance(), 0);

        let custom = Board::with_heuristic(
            vec![tile(3, 4, 1, 1)],
            4,
            5,
            DistanceHeuristic::new((1, 1), (0, 0)),
        );
        assert!(matches!(custom, Ok(ref b) if b.distance() == 25));
    }

    // Tests the reference layout has exactly its four legal moves
    #[test]
    fn test_reference_moves() {
        let moves: Vec<_> = reference()
            .moves()
            .into_iter()
            .map(|(step, _)| (step.tile.key().as_tuple(), step.direction))
            .collect();

        assert_eq!(
            moves,
            vec![
                ((0, 0, 2, 1), Direction::Up),
                ((0, 2, 1, 1), Direction::Down),
                ((1, 2, 1, 1), Direction::Down),
                ((2, 0, 1, 2), Direction::Right),
            ]
        );
    }

    // Tests the tile at (0, 2) cannot move right into its neighbour
    #[test]
    fn test_blocked_tile_has_no_successor() {
        let board = reference();
        let blocked = board
            .moves()
            .into_iter()
            .any(|(step, _)| step.tile.key().as_tuple() == (0, 2, 1, 1) && step.direction == Direction::Right);
        assert!(!blocked);
    }

    // Tests each successor differs from its parent by one unit step of one tile
    #[test]
    fn test_successors_differ_by_one_step() {
        let parent = reference();
        let parent_tiles: Vec<Tile> = parent.tiles().collect();

        for (step, child) in parent.moves() {
            assert_eq!(child.tile_count(), parent.tile_count());
            assert_consistent(&child);

            let removed: Vec<&Tile> = parent_tiles
                .iter()
                .filter(|old| !child.keys().any(|key| key == old.key()))
                .collect();
            let added: Vec<Tile> = child
                .tiles()
                .filter(|new| !parent_tiles.iter().any(|old| old.key() == new.key()))
                .collect();

            assert_eq!(removed.len(), 1);
            assert_eq!(added.len(), 1);

            for (old, new) in removed.iter().zip(&added) {
                let (dx, dy) = step.direction.offset();
                assert_eq!(old.key(), step.tile.key());
                assert_eq!(new.key(), step.moved().key());
                assert_eq!((new.x() - old.x(), new.y() - old.y()), (dx, dy));
                assert_eq!(dx.abs() + dy.abs(), 1);
                assert_eq!(new.color(), old.color());
            }

            for old in &parent_tiles {
                if old.key() == step.tile.key() {
                    continue;
                }
                let kept = child.tiles().find(|new| new.key() == old.key());
                assert!(matches!(kept, Some(new) if new.color() == old.color()));
            }
        }
    }

    // Tests successor generation leaves the parent untouched
    #[test]
    fn test_parent_unchanged_by_successors() {
        let parent = reference();
        let snapshot = parent.clone();
        let successors = parent.successors();

        assert_eq!(successors.len(), 4);
        assert_eq!(parent, snapshot);
        assert_eq!(parent.occupancy(), snapshot.occupancy());
    }

    // Tests the color map is indexed by row then column
    #[test]
    fn test_color_map() {
        let board = reference();
        let map = board.color_map();
        assert_eq!(map.dim(), (5, 4));
        assert_eq!(map.get([2, 2]).copied().flatten(), Some(Color::from_rgb8(205, 181, 109)));
        assert_eq!(map.get([1, 0]).copied().flatten(), None);
        assert_eq!(map.get([0, 2]).copied().flatten(), Some(Color::from_rgb8(109, 126, 182)));
    }

    // Tests lookup of the tile covering a cell
    #[test]
    fn test_tile_at() {
        let board = reference();
        assert_eq!(board.tile_at(3, 3).map(|t| t.key().as_tuple()), Some((2, 2, 2, 2)));
        assert_eq!(board.tile_at(2, 1).map(|t| t.key().as_tuple()), Some((2, 0, 1, 2)));
        assert!(board.tile_at(3, 0).is_none());
        assert!(board.tile_at(9, 9).is_none());
    }
}
