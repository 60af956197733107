//! Tests for session lifecycle: load, dispatch, reduction and restart

#[cfg(test)]
mod tests {
    use blockreduce::ReduceError;
    use blockreduce::io::keys::Command;
    use blockreduce::partition::Phase;
    use blockreduce::raster::SourceImage;
    use blockreduce::workflow::{Session, SessionEvent};
    use image::RgbImage;

    fn loaded_session(width: u32, height: u32) -> Session {
        let mut session = Session::new();
        let Ok(image) = SourceImage::filled(width, height, [0, 128, 255]) else {
            unreachable!("test dimensions are non-zero");
        };
        session.load(image);
        session
    }

    // Tests input before any load is refused
    // Verified by creating a default engine on first input
    #[test]
    fn test_no_image_loaded() {
        let mut session = Session::new();

        assert!(matches!(
            session.submit_digit(1),
            Err(ReduceError::NoImageLoaded)
        ));
        assert!(matches!(session.undo(), Err(ReduceError::NoImageLoaded)));
        assert!(session.statistics().is_none());
        assert!(session.image().is_none());
    }

    // Tests an invalid buffer leaves the previous image and progress untouched
    // Verified by clearing the session before validating
    #[test]
    fn test_invalid_load_keeps_state() {
        let mut session = loaded_session(5, 5);
        assert!(session.submit_digit(2).is_ok());

        let result = session.load_rgb(RgbImage::new(0, 0));

        assert!(matches!(result, Err(ReduceError::InvalidImage { .. })));
        assert_eq!(session.image().map(SourceImage::width), Some(5));
        assert_eq!(session.engine().map(|e| e.pixels_done()), Some(2));
    }

    // Tests completing both axes yields one reduced image and restarts
    // Verified by not resetting the engine after reduction
    #[test]
    fn test_reduction_then_restart() {
        let mut session = loaded_session(3, 2);

        assert!(matches!(
            session.submit_digit(3),
            Ok(SessionEvent::PhaseChanged { to: Phase::Y, .. })
        ));
        assert!(matches!(
            session.submit_digit(1),
            Ok(SessionEvent::StatisticsChanged(_))
        ));
        let event = session.submit_digit(1);

        match event {
            Ok(SessionEvent::Reduced(reduced)) => {
                assert_eq!((reduced.width(), reduced.height()), (1, 2));
                assert_eq!(reduced.pixel(0, 1), Some([0, 128, 255]));
            }
            other => unreachable!("Expected Reduced, got {other:?}"),
        }
        assert_eq!(session.reductions(), 1);
        assert_eq!(session.engine().map(|e| e.phase()), Some(Phase::X));
        assert!(session.engine().is_some_and(|e| e.grid_x().is_empty()));
    }

    // Tests commands dispatch to digit and undo
    // Verified by mapping Undo to a digit of 1
    #[test]
    fn test_apply_commands() {
        let mut session = loaded_session(9, 9);

        assert!(session.apply(Command::Digit(4)).is_ok());
        assert!(session.apply(Command::Digit(4)).is_ok());
        assert!(session.apply(Command::Undo).is_ok());

        assert_eq!(
            session.engine().map(|e| e.grid_x().as_slice().to_vec()),
            Some(vec![4])
        );
        assert_eq!(
            session.statistics().map(|s| s.progress_label()),
            Some("1 of 2 - 4/9".to_string())
        );
    }

    // Tests empty undo surfaces as an event, not an error
    // Verified by returning an error for empty undo
    #[test]
    fn test_empty_undo_event() {
        let mut session = loaded_session(2, 2);

        assert!(matches!(session.undo(), Ok(SessionEvent::EmptyUndo)));
    }

    // Tests loading a new image discards progress
    // Verified by keeping the engine across loads
    #[test]
    fn test_load_discards_progress() {
        let mut session = loaded_session(6, 6);
        assert!(session.submit_digit(6).is_ok());

        let Ok(image) = SourceImage::filled(2, 3, [1, 1, 1]) else {
            unreachable!("2x3 image is valid");
        };
        let stats = session.load(image);

        assert_eq!(stats.phase, Phase::X);
        assert_eq!(stats.overall_total, 5);
        assert_eq!(session.engine().map(|e| e.dimensions()), Some((2, 3)));
    }
}
