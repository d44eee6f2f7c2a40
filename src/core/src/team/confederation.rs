use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Confederation {
    #[serde(rename = "AFC")]
    Afc,
    #[serde(rename = "CAF")]
    Caf,
    #[serde(rename = "CONCACAF")]
    Concacaf,
    #[serde(rename = "CONMEBOL")]
    Conmebol,
    #[serde(rename = "OFC")]
    Ofc,
    #[serde(rename = "UEFA")]
    Uefa,
}

impl Confederation {
    pub const ALL: [Confederation; 6] = [
        Confederation::Afc,
        Confederation::Caf,
        Confederation::Concacaf,
        Confederation::Conmebol,
        Confederation::Ofc,
        Confederation::Uefa,
    ];

    /// Maximum number of teams of this confederation a single group may hold.
    pub fn group_cap(self) -> usize {
        match self {
            Confederation::Uefa => 2,
            Confederation::Afc
            | Confederation::Caf
            | Confederation::Concacaf
            | Confederation::Conmebol
            | Confederation::Ofc => 1,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Confederation::Afc => "AFC",
            Confederation::Caf => "CAF",
            Confederation::Concacaf => "CONCACAF",
            Confederation::Conmebol => "CONMEBOL",
            Confederation::Ofc => "OFC",
            Confederation::Uefa => "UEFA",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl FromStr for Confederation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AFC" => Ok(Confederation::Afc),
            "CAF" => Ok(Confederation::Caf),
            "CONCACAF" => Ok(Confederation::Concacaf),
            "CONMEBOL" => Ok(Confederation::Conmebol),
            "OFC" => Ok(Confederation::Ofc),
            "UEFA" => Ok(Confederation::Uefa),
            _ => Err(format!("unknown confederation: {}", s)),
        }
    }
}

impl Display for Confederation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Set of confederations packed into a bitmask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ConfederationSet(u8);

impl ConfederationSet {
    pub fn new() -> Self {
        ConfederationSet(0)
    }

    pub fn insert(&mut self, confederation: Confederation) {
        self.0 |= confederation.bit();
    }

    pub fn contains(&self, confederation: Confederation) -> bool {
        self.0 & confederation.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Confederation> + '_ {
        Confederation::ALL
            .into_iter()
            .filter(move |confederation| self.contains(*confederation))
    }
}

impl FromIterator<Confederation> for ConfederationSet {
    fn from_iter<I: IntoIterator<Item = Confederation>>(iter: I) -> Self {
        let mut set = ConfederationSet::new();
        for confederation in iter {
            set.insert(confederation);
        }
        set
    }
}

impl Serialize for ConfederationSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
