//! `NdS+B` dice rolls with advantage and a floor.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::EngineError;

/// Whether a roll is made twice, keeping the better or worse result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Advantage {
    /// Roll twice, keep the lower total.
    Disadvantage,
    /// Roll once.
    #[default]
    Normal,
    /// Roll twice, keep the higher total.
    Advantage,
}

impl Advantage {
    fn step_up(self) -> Self {
        match self {
            Self::Disadvantage => Self::Normal,
            Self::Normal | Self::Advantage => Self::Advantage,
        }
    }

    fn step_down(self) -> Self {
        match self {
            Self::Advantage => Self::Normal,
            Self::Normal | Self::Disadvantage => Self::Disadvantage,
        }
    }
}

/// A pool of identical dice plus a flat bonus.
///
/// A negative bonus can never push the result below `minimum`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roll {
    count: u32,
    sides: u32,
    bonus: i64,
    advantage: Advantage,
    minimum: i64,
}

impl Default for Roll {
    fn default() -> Self {
        Self::new(1, 20)
    }
}

impl Roll {
    /// `count` dice with `sides` sides. At least one die of two sides.
    pub fn new(count: u32, sides: u32) -> Self {
        Self {
            count: count.max(1),
            sides: sides.max(2),
            bonus: 0,
            advantage: Advantage::Normal,
            minimum: 0,
        }
    }

    /// Set the flat bonus.
    pub fn with_bonus(mut self, bonus: i64) -> Self {
        self.bonus = bonus;
        self
    }

    /// Set advantage or disadvantage.
    pub fn with_advantage(mut self, advantage: Advantage) -> Self {
        self.advantage = advantage;
        self
    }

    /// Set the floor applied when the bonus is negative.
    pub fn with_minimum(mut self, minimum: i64) -> Self {
        self.minimum = minimum;
        self
    }

    /// Number of dice.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Sides per die.
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Flat bonus added to the dice.
    pub fn bonus(&self) -> i64 {
        self.bonus
    }

    /// Advantage state.
    pub fn advantage(&self) -> Advantage {
        self.advantage
    }

    /// Floor applied when the bonus is negative.
    pub fn minimum(&self) -> i64 {
        self.minimum
    }

    /// Add to the bonus.
    pub fn add_bonus(&mut self, amount: i64) {
        self.bonus = self.bonus.saturating_add(amount);
    }

    /// Add (or with a negative `n`, remove) dice, keeping at least one.
    pub fn add_dice(&mut self, n: i64) {
        let count = i64::from(self.count)
            .saturating_add(n)
            .clamp(1, i64::from(u32::MAX));
        self.count = u32::try_from(count).unwrap_or(1);
    }

    /// Disadvantage becomes normal, normal becomes advantage.
    pub fn grant_advantage(&mut self) {
        self.advantage = self.advantage.step_up();
    }

    /// Advantage becomes normal, normal becomes disadvantage.
    pub fn grant_disadvantage(&mut self) {
        self.advantage = self.advantage.step_down();
    }

    /// Set the number of dice, at least one.
    pub fn set_count(&mut self, count: u32) {
        self.count = count.max(1);
    }

    /// Set the sides per die, at least two.
    pub fn set_sides(&mut self, sides: u32) {
        self.sides = sides.max(2);
    }

    /// Replace the flat bonus.
    pub fn set_bonus(&mut self, bonus: i64) {
        self.bonus = bonus;
    }

    /// Replace the floor.
    pub fn set_minimum(&mut self, minimum: i64) {
        self.minimum = minimum;
    }

    /// Replace the advantage state.
    pub fn set_advantage(&mut self, advantage: Advantage) {
        self.advantage = advantage;
    }

    /// True when even the highest possible roll ends at or below `minimum`.
    pub fn minimum_forces_constant(&self) -> bool {
        self.bonus < 0
            && i64::from(self.count)
                .saturating_mul(i64::from(self.sides))
                .saturating_add(self.bonus)
                <= self.minimum
    }

    /// Sum of one throw of the pool, without bonus or advantage.
    pub fn roll_raw<R: Rng>(&self, rng: &mut R) -> i64 {
        (0..self.count).fold(0i64, |total, _| {
            total.saturating_add(i64::from(rng.random_range(1..=self.sides)))
        })
    }

    /// Roll the pool, applying advantage, bonus and minimum.
    pub fn roll<R: Rng>(&self, rng: &mut R) -> i64 {
        if self.minimum_forces_constant() {
            return self.minimum;
        }
        let result = match self.advantage {
            Advantage::Normal => self.roll_raw(rng),
            Advantage::Advantage => {
                let first = self.roll_raw(rng);
                first.max(self.roll_raw(rng))
            }
            Advantage::Disadvantage => {
                let first = self.roll_raw(rng);
                first.min(self.roll_raw(rng))
            }
        };
        if self.bonus >= 0 {
            result.saturating_add(self.bonus)
        } else {
            result.saturating_add(self.bonus).max(self.minimum)
        }
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minimum_forces_constant() {
            return write!(f, "{}", self.minimum);
        }
        write!(f, "{}d{}", self.count, self.sides)?;
        if self.bonus > 0 {
            write!(f, "+{}", self.bonus)?;
        } else if self.bonus < 0 {
            write!(f, "{}", self.bonus)?;
        }
        match self.advantage {
            Advantage::Advantage => write!(f, " with advantage")?,
            Advantage::Disadvantage => write!(f, " with disadvantage")?,
            Advantage::Normal => {}
        }
        if self.bonus < 0 && i64::from(self.count).saturating_add(self.bonus) < self.minimum {
            write!(f, " (min. {})", self.minimum)?;
        }
        Ok(())
    }
}

/// Parses `NdS`, `dS`, `NdS+B` and `NdS-B`.
impl FromStr for Roll {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidRoll(s.to_string());
        let text = s.trim().to_lowercase();
        let (count, rest) = text.split_once('d').ok_or_else(invalid)?;
        let count = if count.is_empty() {
            1
        } else {
            count.parse::<u32>().map_err(|_| invalid())?
        };
        let (sides, bonus) = match rest.find(['+', '-']) {
            Some(i) => {
                let digits = &rest[i + 1..];
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                let magnitude = digits.parse::<i64>().map_err(|_| invalid())?;
                let bonus = if rest[i..].starts_with('-') {
                    -magnitude
                } else {
                    magnitude
                };
                (&rest[..i], bonus)
            }
            None => (rest, 0),
        };
        let sides = sides.parse::<u32>().map_err(|_| invalid())?;
        if count == 0 || sides < 2 {
            return Err(invalid());
        }
        Ok(Self::new(count, sides).with_bonus(bonus))
    }
}
