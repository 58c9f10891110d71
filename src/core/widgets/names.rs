//! Display names for the engine's closed enumerations.
//!
//! The engine hands these around as plain indices. Lookups go through each
//! kind's `ALL` table and fall back to an empty name for indices the table
//! does not cover, so a stale or unknown index blanks its label instead of
//! failing.

use tracing::debug;

fn lookup<T: Copy>(table: &[T], index: i32) -> Option<T> {
    usize::try_from(index)
        .ok()
        .and_then(|index| table.get(index).copied())
}

/// Non-polynomial iteration functions, selected by negative powers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKinds {
    OpalVein,
}

impl FunctionKinds {
    pub const ALL: &'static [Self] = &[Self::OpalVein];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::OpalVein => "z * (sin(Re(z)), cos(Im(z))) + c",
        }
    }

    /// Functions are numbered from 1; 0 is the plain polynomial.
    #[must_use]
    pub fn from_index(index: i32) -> Option<Self> {
        index.checked_sub(1).and_then(|index| lookup(Self::ALL, index))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKinds {
    EscapeTime,
    Potential,
}

impl AlgorithmKinds {
    pub const ALL: &'static [Self] = &[Self::EscapeTime, Self::Potential];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::EscapeTime => "Escape Time",
            Self::Potential => "Potential",
        }
    }

    #[must_use]
    pub fn from_index(index: i32) -> Option<Self> {
        lookup(Self::ALL, index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourSchemeKinds {
    Linear,
    Hyperbolic,
    Logarithmic,
    Circular,
}

impl ColourSchemeKinds {
    pub const ALL: &'static [Self] = &[
        Self::Linear,
        Self::Hyperbolic,
        Self::Logarithmic,
        Self::Circular,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Hyperbolic => "Hyperbolic",
            Self::Logarithmic => "Logarithmic",
            Self::Circular => "Circular",
        }
    }

    #[must_use]
    pub fn from_index(index: i32) -> Option<Self> {
        lookup(Self::ALL, index)
    }
}

#[must_use]
pub fn function_name(index: i32) -> &'static str {
    FunctionKinds::from_index(index).map_or_else(
        || {
            debug!(index, "no function name for index");
            ""
        },
        FunctionKinds::display_name,
    )
}

#[must_use]
pub fn algorithm_name(index: i32) -> &'static str {
    AlgorithmKinds::from_index(index).map_or_else(
        || {
            debug!(index, "no algorithm name for index");
            ""
        },
        AlgorithmKinds::display_name,
    )
}

#[must_use]
pub fn colour_scheme_name(index: i32) -> &'static str {
    ColourSchemeKinds::from_index(index).map_or_else(
        || {
            debug!(index, "no colour scheme name for index");
            ""
        },
        ColourSchemeKinds::display_name,
    )
}
