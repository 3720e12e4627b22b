use std::fmt;

use serde::{Deserialize, Serialize};

/// Growth stage of the pet, derived from lifetime EXP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    Egg,
    Baby,
    Teen,
    Adult,
}

impl Stage {
    pub const BABY_EXP: u64 = 30;
    pub const TEEN_EXP: u64 = 90;
    pub const ADULT_EXP: u64 = 180;

    pub fn from_exp(exp: u64) -> Self {
        if exp >= Self::ADULT_EXP {
            Self::Adult
        } else if exp >= Self::TEEN_EXP {
            Self::Teen
        } else if exp >= Self::BABY_EXP {
            Self::Baby
        } else {
            Self::Egg
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Egg => "Egg",
            Self::Baby => "Baby",
            Self::Teen => "Teen",
            Self::Adult => "Adult",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
