use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Human = 0,
    Computer = 1,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Human, Side::Computer];

    pub fn opposite(&self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    /// The computer is always the maximizing side of the search.
    pub fn maximize_score(&self) -> bool {
        match self {
            Side::Computer => true,
            Side::Human => false,
        }
    }

    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Side::Human)
    }

    /// Single character used by the position notation and the board display.
    pub fn to_char(&self) -> char {
        match self {
            Side::Human => 'X',
            Side::Computer => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' => Some(Side::Human),
            'O' => Some(Side::Computer),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side_str = match self {
            Side::Human => "human",
            Side::Computer => "computer",
        };
        write!(f, "{}", side_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Side {
    type Err = ParseError;
    fn from_str(side: &str) -> Result<Self, Self::Err> {
        match side {
            "human" => Ok(Side::Human),
            "computer" => Ok(Side::Computer),
            "random" => Ok(Side::random()),
            _ => Err("invalid side; options are: human, computer, random"),
        }
    }
}
