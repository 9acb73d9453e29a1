//! Socionics taxonomy: TIM codes and quadras
//!
//! Fixed mapping of the 16 type codes (TIMs) onto the 4 quadras, 4 codes
//! per quadra. The mapping is total over the known codes and partitions
//! them; anything else resolves to nothing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One of the 16 socionics type codes (TIMs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocType {
    ILE,
    SEI,
    ESE,
    LII,
    SLE,
    IEI,
    EIE,
    LSI,
    SEE,
    ESI,
    LIE,
    ILI,
    IEE,
    EII,
    LSE,
    SLI,
}

/// One of the 4 quadras (affinity groups)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quadra {
    Alpha,
    Beta,
    Gamma,
    Delta,
}

impl SocType {
    /// All 16 TIMs, in quadra order
    pub const ALL: [SocType; 16] = [
        SocType::ILE,
        SocType::SEI,
        SocType::ESE,
        SocType::LII,
        SocType::SLE,
        SocType::IEI,
        SocType::EIE,
        SocType::LSI,
        SocType::SEE,
        SocType::ESI,
        SocType::LIE,
        SocType::ILI,
        SocType::IEE,
        SocType::EII,
        SocType::LSE,
        SocType::SLI,
    ];

    /// The quadra this TIM belongs to (total: every TIM has exactly one)
    pub fn quadra(self) -> Quadra {
        match self {
            SocType::ILE | SocType::SEI | SocType::ESE | SocType::LII => Quadra::Alpha,
            SocType::SLE | SocType::IEI | SocType::EIE | SocType::LSI => Quadra::Beta,
            SocType::SEE | SocType::ESI | SocType::LIE | SocType::ILI => Quadra::Gamma,
            SocType::IEE | SocType::EII | SocType::LSE | SocType::SLI => Quadra::Delta,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SocType::ILE => "ILE",
            SocType::SEI => "SEI",
            SocType::ESE => "ESE",
            SocType::LII => "LII",
            SocType::SLE => "SLE",
            SocType::IEI => "IEI",
            SocType::EIE => "EIE",
            SocType::LSI => "LSI",
            SocType::SEE => "SEE",
            SocType::ESI => "ESI",
            SocType::LIE => "LIE",
            SocType::ILI => "ILI",
            SocType::IEE => "IEE",
            SocType::EII => "EII",
            SocType::LSE => "LSE",
            SocType::SLI => "SLI",
        }
    }
}

impl Quadra {
    /// The 4 TIMs that make up a complete cluster of this quadra
    pub fn members(self) -> [SocType; 4] {
        match self {
            Quadra::Alpha => [SocType::ILE, SocType::SEI, SocType::ESE, SocType::LII],
            Quadra::Beta => [SocType::SLE, SocType::IEI, SocType::EIE, SocType::LSI],
            Quadra::Gamma => [SocType::SEE, SocType::ESI, SocType::LIE, SocType::ILI],
            Quadra::Delta => [SocType::IEE, SocType::EII, SocType::LSE, SocType::SLI],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Quadra::Alpha => "alpha",
            Quadra::Beta => "beta",
            Quadra::Gamma => "gamma",
            Quadra::Delta => "delta",
        }
    }
}

/// Resolve the quadra for a raw type-code string.
///
/// Returns `None` for anything outside the 16 known codes (including
/// malformed input) — callers treat that as a user-correctable condition,
/// never a fatal one. Matching is exact; codes are stored uppercase.
pub fn resolve_quadra(code: &str) -> Option<Quadra> {
    code.parse::<SocType>().ok().map(SocType::quadra)
}

impl fmt::Display for SocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Quadra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SocType::ALL
            .into_iter()
            .find(|tim| tim.as_str() == s)
            .ok_or_else(|| Error::InvalidInput(format!("unknown socionics type: {s}")))
    }
}

impl FromStr for Quadra {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alpha" => Ok(Quadra::Alpha),
            "beta" => Ok(Quadra::Beta),
            "gamma" => Ok(Quadra::Gamma),
            "delta" => Ok(Quadra::Delta),
            _ => Err(Error::InvalidInput(format!("unknown quadra: {s}"))),
        }
    }
}
