//! Tests for GIF animation of board sequences

#[cfg(test)]
mod tests {
    use blockslide::algorithm::board::Board;
    use blockslide::io::configuration::reference_board;
    use blockslide::io::visualization::BoardAnimation;
    use blockslide::spatial::{Color, Tile};

    fn reference() -> Board {
        reference_board().unwrap_or_else(|error| panic!("reference board rejected: {error}"))
    }

    // Tests a new animation starts without frames
    #[test]
    fn test_new_animation_is_empty() {
        let animation = BoardAnimation::new(4, 5, 8);
        assert_eq!(animation.frame_count(), 0);
    }

    // Tests pushing boards adds one frame each
    #[test]
    fn test_push_board() {
        let seed = reference();
        let mut animation = BoardAnimation::new(4, 5, 8);

        assert!(animation.push_board(&seed).is_ok());
        for successor in seed.successors() {
            assert!(animation.push_board(&successor).is_ok());
        }
        assert_eq!(animation.frame_count(), 5);
    }

    // Tests boards of a different size are refused
    #[test]
    fn test_push_board_size_mismatch() {
        let Ok(tile) = Tile::new(0, 0, 1, 1, Color::default()) else {
            unreachable!("tile is valid");
        };
        let Ok(small) = Board::new(vec![tile], 2, 2) else {
            unreachable!("board is valid");
        };
        let mut animation = BoardAnimation::new(4, 5, 8);

        assert!(animation.push_board(&small).is_err());
        assert_eq!(animation.frame_count(), 0);
    }

    // Tests error when exporting an empty animation
    #[test]
    fn test_export_gif_no_frames() {
        let animation = BoardAnimation::new(4, 5, 8);
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory available");
        };
        let result = animation.export_gif(&dir.path().join("empty.gif"), 100);
        assert!(result.is_err());
    }

    // Tests a zero frame delay is rejected
    #[test]
    fn test_export_gif_zero_delay() {
        let mut animation = BoardAnimation::new(4, 5, 8);
        assert!(animation.push_board(&reference()).is_ok());

        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory available");
        };
        let result = animation.export_gif(&dir.path().join("zero.gif"), 0);
        assert!(result.is_err());
    }

    // Tests GIF export writes a file, including with frame skipping
    #[test]
    fn test_export_gif_creates_file() {
        let seed = reference();
        let mut animation = BoardAnimation::new(4, 5, 8);
        assert!(animation.push_board(&seed).is_ok());
        for successor in seed.successors() {
            assert!(animation.push_board(&successor).is_ok());
        }

        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory available");
        };
        for (name, delay) in [("slow.gif", 200), ("fast.gif", 10)] {
            let path = dir.path().join(name);
            let result = animation.export_gif(&path, delay);
            assert!(result.is_ok(), "GIF export should succeed: {result:?}");
            assert!(path.exists());
        }
    }

    // Tests unwritable destinations surface an error
    #[test]
    fn test_export_gif_bad_path() {
        let mut animation = BoardAnimation::new(4, 5, 8);
        assert!(animation.push_board(&reference()).is_ok());
        assert!(
            animation
                .export_gif(std::path::Path::new("/dev/null/test.gif"), 100)
                .is_err()
        );
    }
}
