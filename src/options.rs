//! Match configuration options.

use core::time::Duration;

/// Configuration options for a match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardclash::MatchOptions;
///
/// let options = MatchOptions::default()
///     .with_starting_life(60)
///     .with_hand_limit(4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Life each side starts with.
    pub starting_life: i32,
    /// Mana each side starts with.
    pub starting_mana: i32,
    /// Cards each side draws before the first turn.
    pub opening_hand: usize,
    /// Maximum number of cards held. The oldest card is discarded when a
    /// draw goes past the limit.
    pub hand_limit: usize,
    /// Shield lost by the defending side at each end of turn.
    pub shield_decay: i32,
    /// Poison shed by the acting side at each end of turn.
    pub poison_decay: i32,
    /// Mana paid for an extra draw during a turn.
    pub draw_cost: i32,
    /// Pause between the opponent's reveal, select and apply stages.
    pub stage_delay: Duration,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            starting_life: 100,
            starting_mana: 1,
            opening_hand: 3,
            hand_limit: 5,
            shield_decay: 2,
            poison_decay: 2,
            draw_cost: 1,
            stage_delay: Duration::from_millis(750),
        }
    }
}

impl MatchOptions {
    /// Sets the starting life.
    ///
    /// # Example
    ///
    /// ```
    /// use cardclash::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_starting_life(40);
    /// assert_eq!(options.starting_life, 40);
    /// ```
    #[must_use]
    pub const fn with_starting_life(mut self, life: i32) -> Self {
        self.starting_life = life;
        self
    }

    /// Sets the starting mana.
    #[must_use]
    pub const fn with_starting_mana(mut self, mana: i32) -> Self {
        self.starting_mana = mana;
        self
    }

    /// Sets the opening hand size.
    #[must_use]
    pub const fn with_opening_hand(mut self, cards: usize) -> Self {
        self.opening_hand = cards;
        self
    }

    /// Sets the hand limit.
    ///
    /// # Example
    ///
    /// ```
    /// use cardclash::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_hand_limit(7);
    /// assert_eq!(options.hand_limit, 7);
    /// ```
    #[must_use]
    pub const fn with_hand_limit(mut self, limit: usize) -> Self {
        self.hand_limit = limit;
        self
    }

    /// Sets the shield decay per end of turn.
    #[must_use]
    pub const fn with_shield_decay(mut self, decay: i32) -> Self {
        self.shield_decay = decay;
        self
    }

    /// Sets the poison decay per end of turn.
    #[must_use]
    pub const fn with_poison_decay(mut self, decay: i32) -> Self {
        self.poison_decay = decay;
        self
    }

    /// Sets the mana cost of an extra draw.
    ///
    /// Values below 1 are raised to 1 so that drawing always moves a turn
    /// toward its end.
    #[must_use]
    pub const fn with_draw_cost(mut self, cost: i32) -> Self {
        self.draw_cost = if cost < 1 { 1 } else { cost };
        self
    }

    /// Sets the pause between opponent stages.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use cardclash::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_stage_delay(Duration::ZERO);
    /// assert_eq!(options.stage_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_stage_delay(mut self, delay: Duration) -> Self {
        self.stage_delay = delay;
        self
    }
}
