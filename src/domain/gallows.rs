/// The seven gallows frames, indexed directly by wrong-attempt count.
///
/// Frame 0 is the empty gallows; frame 6 is the complete figure shown
/// on a loss. Each frame is 7 rows tall.

pub const FRAME_COUNT: usize = 7;

const FRAMES: [&str; FRAME_COUNT] = [
    r"  +---+
      |
      |
      |
      |
      |
=========",
    r"  +---+
  O   |
      |
      |
      |
      |
=========",
    r"  +---+
  O   |
  |   |
      |
      |
      |
=========",
    r"  +---+
  O   |
 /|   |
      |
      |
      |
=========",
    r"  +---+
  O   |
 /|\  |
      |
      |
      |
=========",
    r"  +---+
  O   |
 /|\  |
 /    |
      |
      |
=========",
    r"  +---+
  O   |
 /|\  |
 / \  |
      |
      |
=========",
];

/// Frame for the given wrong-attempt count, clamped to the last frame.
/// The clamp is unreachable in a normal round (the sixth wrong guess
/// ends it) but keeps the lookup total.
pub fn frame(wrong_attempts: u8) -> &'static str {
    FRAMES[(wrong_attempts as usize).min(FRAME_COUNT - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gallows_has_no_figure() {
        assert!(!frame(0).contains('O'));
        assert!(!frame(0).contains('\\'));
    }

    #[test]
    fn final_frame_has_full_figure() {
        let last = frame(6);
        assert!(last.contains('O'));
        assert!(last.contains(r"/|\"));
        assert!(last.contains(r"/ \"));
    }

    #[test]
    fn frames_gain_body_parts_monotonically() {
        for n in 1..FRAME_COUNT as u8 {
            let prev = frame(n - 1).chars().filter(|c| !c.is_whitespace()).count();
            let curr = frame(n).chars().filter(|c| !c.is_whitespace()).count();
            assert!(curr > prev, "frame {n} should add to frame {}", n - 1);
        }
    }

    #[test]
    fn out_of_range_clamps_to_last_frame() {
        assert_eq!(frame(7), frame(6));
        assert_eq!(frame(u8::MAX), frame(6));
    }

    #[test]
    fn all_frames_are_seven_rows() {
        for n in 0..FRAME_COUNT as u8 {
            assert_eq!(frame(n).lines().count(), 7);
        }
    }
}
