use std::ops::Neg;
use crate::utils::prelude::*;

pub const MIN_DIMENSION: usize = 1;

// A seat at the table.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Player {
    First = 0,
    Second = 1,
}

impl Player {
    /// Notates the player.
    pub fn notate(&self) -> String {
        match self {
            Player::First  => "first",
            Player::Second => "second"
        }.into()
    }

    /// The index of this player into per-player tallies.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parses into a player.
    pub fn parse(s: &str) -> Result<Player> {
        match s {
            "1" | "first" | "First"   => Ok(Player::First),
            "2" | "second" | "Second" => Ok(Player::Second),
            _                         => Err(anyhow!("invalid notation {s} for player"))
        }
    }
}

impl Neg for Player {
    type Output = Player;
    fn neg(self) -> Self::Output {
        match self {
            Player::First  => Player::Second,
            Player::Second => Player::First
        }
    }
}

/// Who sits in the second chair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    /// Two humans alternate; the engine only keeps the books.
    HumanVsHuman,
    /// The computer plays in the given seat.
    HumanVsComputer { computer: Player },
}

impl std::str::FromStr for GameMode {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pvp" | "human"    => Ok(GameMode::HumanVsHuman),
            "c"                => Ok(GameMode::HumanVsComputer { computer: Player::First }),
            "h"                => Ok(GameMode::HumanVsComputer { computer: Player::Second }),
            _                  => Player::parse(s)
                .map(|computer| GameMode::HumanVsComputer { computer })
                .with_context(|| format!("invalid game mode {s}; expected pvp, first or second"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_alternates() {
        assert_eq!(-Player::First, Player::Second);
        assert_eq!(-(-Player::Second), Player::Second);
    }

    #[test]
    fn parses_modes() {
        assert_eq!("pvp".parse::<GameMode>().unwrap(), GameMode::HumanVsHuman);
        assert_eq!("first".parse::<GameMode>().unwrap(), GameMode::HumanVsComputer { computer: Player::First });
        assert!("third".parse::<GameMode>().is_err());
    }

    #[test]
    fn modes_name_the_computer_seat() {
        assert_eq!("second".parse::<GameMode>().unwrap(), GameMode::HumanVsComputer { computer: Player::Second });
        assert_eq!("2".parse::<GameMode>().unwrap(), GameMode::HumanVsComputer { computer: Player::Second });
        assert_eq!("First".parse::<GameMode>().unwrap(), GameMode::HumanVsComputer { computer: Player::First });
        assert_eq!("c".parse::<GameMode>().unwrap(), GameMode::HumanVsComputer { computer: Player::First });
        assert_eq!(Player::parse("1").unwrap(), Player::First);
        assert!(Player::parse("0").is_err());
    }
}
