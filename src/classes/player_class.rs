//! Playable classes and their index bucket keys

use std::fmt;
use std::str::FromStr;

use crate::config::CLASSES;
use crate::error::ExtractError;

/// The 16 playable classes, in class column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlayerClass {
    Warrior,
    Cleric,
    Paladin,
    Ranger,
    ShadowKnight,
    Druid,
    Monk,
    Bard,
    Rogue,
    Shaman,
    Necromancer,
    Wizard,
    Magician,
    Enchanter,
    Beastlord,
    Berserker,
}

impl PlayerClass {
    pub const ALL: [PlayerClass; 16] = [
        PlayerClass::Warrior,
        PlayerClass::Cleric,
        PlayerClass::Paladin,
        PlayerClass::Ranger,
        PlayerClass::ShadowKnight,
        PlayerClass::Druid,
        PlayerClass::Monk,
        PlayerClass::Bard,
        PlayerClass::Rogue,
        PlayerClass::Shaman,
        PlayerClass::Necromancer,
        PlayerClass::Wizard,
        PlayerClass::Magician,
        PlayerClass::Enchanter,
        PlayerClass::Beastlord,
        PlayerClass::Berserker,
    ];

    /// Column slot of this class in the level table
    pub fn slot(self) -> usize {
        self as usize
    }

    /// Bit this class sets in a record's class mask
    pub fn mask_bit(self) -> u32 {
        1 << (self.slot() + 1)
    }

    /// Key of this class in the output index
    ///
    /// Berserker's key is the legacy `65535`, which no class mask covers.
    pub fn index_key(self) -> u32 {
        CLASSES[self.slot()]
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            PlayerClass::Warrior => "WAR",
            PlayerClass::Cleric => "CLR",
            PlayerClass::Paladin => "PAL",
            PlayerClass::Ranger => "RNG",
            PlayerClass::ShadowKnight => "SHD",
            PlayerClass::Druid => "DRU",
            PlayerClass::Monk => "MNK",
            PlayerClass::Bard => "BRD",
            PlayerClass::Rogue => "ROG",
            PlayerClass::Shaman => "SHM",
            PlayerClass::Necromancer => "NEC",
            PlayerClass::Wizard => "WIZ",
            PlayerClass::Magician => "MAG",
            PlayerClass::Enchanter => "ENC",
            PlayerClass::Beastlord => "BST",
            PlayerClass::Berserker => "BER",
        }
    }
}

impl fmt::Display for PlayerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for PlayerClass {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        PlayerClass::ALL
            .into_iter()
            .find(|class| class.abbreviation() == wanted)
            .ok_or_else(|| ExtractError::UnknownClass(s.to_string()))
    }
}
