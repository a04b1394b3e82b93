//! Guess feedback representation
//!
//! Feedback from one guess round is a vector of exactly five marks, one per
//! letter position:
//! - Correct ("green") - letter in the right position
//! - Present ("yellow") - letter in the word, wrong position
//! - Absent ("black") - letter not in the word

use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackMark {
    /// Letter is correct and in the correct position
    Correct,
    /// Letter occurs in the word but not at this position
    Present,
    /// Letter does not occur in the word
    Absent,
}

impl FeedbackMark {
    /// Parse a single feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for Correct
    /// - 'Y'/'y'/🟨 for Present
    /// - '-'/'_'/'b'/'B'/⬛/⬜ for Absent
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | 'b' | 'B' | '⬛' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback vector for one guess round
///
/// Always exactly five marks, ordered by letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marks([FeedbackMark; 5]);

/// Error type for invalid feedback vectors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarksError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for MarksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback must be exactly 5 marks, got {len}")
            }
            Self::InvalidSymbol(ch) => write!(f, "Invalid feedback symbol: {ch}"),
        }
    }
}

impl std::error::Error for MarksError {}

impl Marks {
    /// All greens (solved)
    pub const PERFECT: Self = Self([FeedbackMark::Correct; 5]);

    /// Create a marks vector from five explicit marks
    #[inline]
    #[must_use]
    pub const fn new(marks: [FeedbackMark; 5]) -> Self {
        Self(marks)
    }

    /// Parse a feedback string like "g-y-g" or "🟩⬛🟨⬛🟩"
    ///
    /// # Errors
    /// Returns `MarksError` if the string is not exactly five symbols or
    /// contains a symbol outside the three-mark alphabet.
    ///
    /// # Examples
    /// ```
    /// use termo_solver::core::Marks;
    ///
    /// let m1 = Marks::parse("gy--g").unwrap();
    /// let m2 = Marks::parse("🟩🟨⬛⬛🟩").unwrap();
    /// assert_eq!(m1, m2);
    /// ```
    pub fn parse(s: &str) -> Result<Self, MarksError> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != 5 {
            return Err(MarksError::InvalidLength(chars.len()));
        }

        let mut marks = [FeedbackMark::Absent; 5];
        for (i, &ch) in chars.iter().enumerate() {
            marks[i] = FeedbackMark::from_symbol(ch).ok_or(MarksError::InvalidSymbol(ch))?;
        }

        Ok(Self(marks))
    }

    /// Get the mark at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> FeedbackMark {
        self.0[position]
    }

    /// Iterate over (position, mark) pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, FeedbackMark)> + '_ {
        self.0.iter().copied().enumerate()
    }

    /// Check if this is a solved round (all Correct)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&m| m == FeedbackMark::Correct)
    }

    /// Check if any position is marked Present
    #[inline]
    #[must_use]
    pub fn has_present(&self) -> bool {
        self.0.contains(&FeedbackMark::Present)
    }

    /// Convert to an emoji string like "🟩🟨⬛⬛🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|m| match m {
                FeedbackMark::Correct => '🟩',
                FeedbackMark::Present => '🟨',
                FeedbackMark::Absent => '⬛',
            })
            .collect()
    }
}

impl std::str::FromStr for Marks {
    type Err = MarksError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
