use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of human autosomes.
pub const AUTOSOME_COUNT: u8 = 22;

///
/// A human chromosome identifier: autosomes 1-22 or one of the sex chromosomes.
///
/// Serializes as an integer for autosomes and as `"X"`/`"Y"` for sex chromosomes.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawChromosome", into = "RawChromosome")]
pub enum Chromosome {
    Autosome(u8),
    X,
    Y,
}

impl Chromosome {
    ///
    /// Build an autosome identifier, `None` if `n` is not in 1-22.
    ///
    pub fn autosome(n: u8) -> Option<Self> {
        (1..=AUTOSOME_COUNT)
            .contains(&n)
            .then_some(Chromosome::Autosome(n))
    }

    pub fn is_sex_chromosome(&self) -> bool {
        matches!(self, Chromosome::X | Chromosome::Y)
    }
}

impl Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chromosome::Autosome(n) => write!(f, "{}", n),
            Chromosome::X => write!(f, "X"),
            Chromosome::Y => write!(f, "Y"),
        }
    }
}

impl FromStr for Chromosome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "X" | "x" => Ok(Chromosome::X),
            "Y" | "y" => Ok(Chromosome::Y),
            _ => s
                .parse::<u8>()
                .ok()
                .and_then(Chromosome::autosome)
                .ok_or_else(|| format!("'{}' is not a human chromosome (1-22, X or Y)", s)),
        }
    }
}

///
/// Chromosome identifier as it arrives from an upstream source: either a bare
/// number (`21`) or a name (`"X"`, `"21"`).
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawChromosome {
    Number(i64),
    Name(String),
}

impl TryFrom<RawChromosome> for Chromosome {
    type Error = String;

    fn try_from(value: RawChromosome) -> Result<Self, Self::Error> {
        Chromosome::try_from(&value)
    }
}

impl TryFrom<&RawChromosome> for Chromosome {
    type Error = String;

    fn try_from(value: &RawChromosome) -> Result<Self, Self::Error> {
        match value {
            RawChromosome::Number(n) => u8::try_from(*n)
                .ok()
                .and_then(Chromosome::autosome)
                .ok_or_else(|| format!("{} is not an autosome number (1-22)", n)),
            RawChromosome::Name(name) => name.parse(),
        }
    }
}

impl From<Chromosome> for RawChromosome {
    fn from(value: Chromosome) -> Self {
        match value {
            Chromosome::Autosome(n) => RawChromosome::Number(n as i64),
            other => RawChromosome::Name(other.to_string()),
        }
    }
}

impl From<i64> for RawChromosome {
    fn from(value: i64) -> Self {
        RawChromosome::Number(value)
    }
}

impl From<i32> for RawChromosome {
    fn from(value: i32) -> Self {
        RawChromosome::Number(value as i64)
    }
}

impl From<&str> for RawChromosome {
    fn from(value: &str) -> Self {
        RawChromosome::Name(value.to_string())
    }
}

///
/// Sex-chromosome complement of a karyotype.
///
/// `X` is the degenerate single-X form left by a monosomy X.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SexChromosomes {
    XX,
    XY,
    X,
}

impl SexChromosomes {
    pub fn as_str(&self) -> &'static str {
        match self {
            SexChromosomes::XX => "XX",
            SexChromosomes::XY => "XY",
            SexChromosomes::X => "X",
        }
    }
}

impl Display for SexChromosomes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SexChromosomes {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "XX" => Ok(SexChromosomes::XX),
            "XY" => Ok(SexChromosomes::XY),
            "X" => Ok(SexChromosomes::X),
            _ => Err(format!(
                "unrecognized sex-chromosome code '{}', expected XX, XY or X",
                s
            )),
        }
    }
}
