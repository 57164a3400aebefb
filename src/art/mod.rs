//! Gallows drawings
//!
//! One frame per wrong-guess count, from the empty gallows to the full figure.

/// Stage drawings indexed by the number of wrong guesses
pub const STAGES: [&str; 7] = [
    r"
     +---+
     |   |
         |
         |
         |
         |
    =======
",
    r"
     +---+
     |   |
     O   |
         |
         |
         |
    =======
",
    r"
     +---+
     |   |
     O   |
     |   |
         |
         |
    =======
",
    r"
     +---+
     |   |
     O   |
    /|   |
         |
         |
    =======
",
    r"
     +---+
     |   |
     O   |
    /|\  |
         |
         |
    =======
",
    r"
     +---+
     |   |
     O   |
    /|\  |
    /    |
         |
    =======
",
    r"
     +---+
     |   |
     O   |
    /|\  |
    / \  |
         |
    =======
",
];

/// Drawing for a stage index, clamped to the final frame
#[must_use]
pub fn stage(index: usize) -> &'static str {
    STAGES[index.min(STAGES.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_share_gallows() {
        for frame in STAGES {
            assert!(frame.contains("+---+"));
            assert!(frame.contains("======="));
        }
    }

    #[test]
    fn stages_are_distinct() {
        for (i, a) in STAGES.iter().enumerate() {
            for b in &STAGES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn stage_clamps_to_last_frame() {
        assert_eq!(stage(0), STAGES[0]);
        assert_eq!(stage(6), STAGES[6]);
        assert_eq!(stage(42), STAGES[6]);
    }
}
