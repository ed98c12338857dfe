//! Register definitions for the 8-bit delay-loop target (PicoBlaze register bank)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of registers in the bank
pub const NUM_REGISTERS: usize = 16;

/// Register (s0-sF), each 8 bits wide
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Register {
    S0 = 0,
    S1 = 1,
    S2 = 2,
    S3 = 3,
    S4 = 4,
    S5 = 5,
    S6 = 6,
    S7 = 7,
    S8 = 8,
    S9 = 9,
    SA = 10,
    SB = 11,
    SC = 12,
    SD = 13,
    SE = 14,
    SF = 15,
}

impl Register {
    /// All registers in index order
    pub const ALL: [Register; NUM_REGISTERS] = [
        Self::S0, Self::S1, Self::S2, Self::S3,
        Self::S4, Self::S5, Self::S6, Self::S7,
        Self::S8, Self::S9, Self::SA, Self::SB,
        Self::SC, Self::SD, Self::SE, Self::SF,
    ];

    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Assembly name: `S` followed by the lowercase hex index
    pub fn name(self) -> &'static str {
        match self {
            Self::S0 => "S0",
            Self::S1 => "S1",
            Self::S2 => "S2",
            Self::S3 => "S3",
            Self::S4 => "S4",
            Self::S5 => "S5",
            Self::S6 => "S6",
            Self::S7 => "S7",
            Self::S8 => "S8",
            Self::S9 => "S9",
            Self::SA => "Sa",
            Self::SB => "Sb",
            Self::SC => "Sc",
            Self::SD => "Sd",
            Self::SE => "Se",
            Self::SF => "Sf",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
