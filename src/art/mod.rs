//! Display assets: the title banner and the gallows drawings
//!
//! Stages are indexed by remaining lives, so `stage(0)` is the finished figure
//! and the highest index is the empty gallows.

/// Title banner shown when a round starts
pub const LOGO: &str = r"
 _
| |__   __ _ _ __   __ _ _ __ ___   __ _ _ __
| '_ \ / _` | '_ \ / _` | '_ ` _ \ / _` | '_ \
| | | | (_| | | | | (_| | | | | | | (_| | | | |
|_| |_|\__,_|_| |_|\__, |_| |_| |_|\__,_|_| |_|
                   |___/
";

/// Gallows drawings for 6 down to 0 remaining lives, stored by lives index
pub const STAGES: [&str; 7] = [
    r"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"
  +---+
  |   |
      |
      |
      |
      |
=========",
];

/// Art indexed by remaining lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeArt {
    stages: Vec<String>,
}

impl LifeArt {
    /// Build art from stages ordered by remaining lives (index 0 = no lives left)
    ///
    /// Returns `None` when no stage is given.
    #[must_use]
    pub fn new(stages: Vec<String>) -> Option<Self> {
        if stages.is_empty() {
            None
        } else {
            Some(Self { stages })
        }
    }

    /// Stage for the given remaining lives
    ///
    /// Lives above the highest drawn stage clamp to the empty gallows.
    ///
    /// # Examples
    /// ```
    /// use hangman::art::LifeArt;
    ///
    /// let art = LifeArt::default();
    /// assert_eq!(art.stage(6), art.stage(60));
    /// ```
    #[must_use]
    pub fn stage(&self, lives: u32) -> &str {
        let index = (lives as usize).min(self.stages.len() - 1);
        &self.stages[index]
    }

    /// Stage for `lives` out of `initial_lives`, spread over the drawings
    ///
    /// A round with fewer or more lives than drawings still opens on the
    /// empty gallows and ends on the full figure. While at least one life is
    /// left the full figure is never shown.
    ///
    /// # Examples
    /// ```
    /// use hangman::art::LifeArt;
    ///
    /// let art = LifeArt::default();
    /// assert_eq!(art.stage_for(3, 3), art.stage(6));
    /// assert_eq!(art.stage_for(0, 3), art.stage(0));
    /// assert_eq!(art.stage_for(4, 6), art.stage(4));
    /// ```
    #[must_use]
    pub fn stage_for(&self, lives: u32, initial_lives: u32) -> &str {
        let top = u64::from(self.max_lives());
        if lives == 0 || top == 0 || initial_lives == 0 {
            return self.stage(lives);
        }
        if lives >= initial_lives {
            return self.stage(self.max_lives());
        }

        let (lives, initial) = (u64::from(lives), u64::from(initial_lives));
        let scaled = ((lives * top * 2 + initial) / (initial * 2)).clamp(1, top);
        &self.stages[scaled as usize]
    }

    /// Highest lives count with its own drawing
    #[must_use]
    pub fn max_lives(&self) -> u32 {
        (self.stages.len() - 1) as u32
    }
}

impl Default for LifeArt {
    fn default() -> Self {
        Self {
            stages: STAGES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}
