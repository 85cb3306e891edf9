use serde::Serialize;

use crate::{EngineError, EngineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ExpenseCategory {
    Savings,
    Rent,
    Utilities,
    Grocery,
    Food,
    Shop,
    RecEnt,
    Transportation,
    HealthWell,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [Self; 10] = [
        Self::Savings,
        Self::Rent,
        Self::Utilities,
        Self::Grocery,
        Self::Food,
        Self::Shop,
        Self::RecEnt,
        Self::Transportation,
        Self::HealthWell,
        Self::Other,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Savings => "Savings",
            Self::Rent => "Rent",
            Self::Utilities => "Utilities",
            Self::Grocery => "Grocery",
            Self::Food => "Food",
            Self::Shop => "Shop",
            Self::RecEnt => "RecEnt",
            Self::Transportation => "Transportation",
            Self::HealthWell => "HealthWell",
            Self::Other => "Other",
        }
    }

    pub fn from_source(value: &str) -> Option<Self> {
        match value {
            "Savings" => Some(Self::Savings),
            "Rent" => Some(Self::Rent),
            "Utilities" => Some(Self::Utilities),
            "Grocery" => Some(Self::Grocery),
            "Food" => Some(Self::Food),
            "Shop" => Some(Self::Shop),
            "RecEnt" => Some(Self::RecEnt),
            // Legacy spelling kept by the source spreadsheets.
            "Transportation" | "TransportationT" => Some(Self::Transportation),
            "HealthWell" => Some(Self::HealthWell),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }

    pub const fn classification(self) -> Classification {
        match self {
            Self::Rent | Self::Utilities | Self::Grocery | Self::Food | Self::HealthWell => {
                Classification::Needs
            }
            Self::Savings => Classification::Savings,
            Self::Shop | Self::RecEnt | Self::Transportation | Self::Other => Classification::Wants,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Classification {
    Needs,
    Wants,
    Savings,
}

impl Classification {
    pub const ALL: [Self; 3] = [Self::Needs, Self::Wants, Self::Savings];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Needs => "Needs",
            Self::Wants => "Wants",
            Self::Savings => "Savings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum WorthCategory {
    Cash,
    Asset,
    Senex,
    Liability,
}

impl WorthCategory {
    pub const ALL: [Self; 4] = [Self::Cash, Self::Asset, Self::Senex, Self::Liability];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Asset => "Asset",
            Self::Senex => "Senex",
            Self::Liability => "Liability",
        }
    }

    pub fn from_source(value: &str) -> Option<Self> {
        match value {
            "Cash" => Some(Self::Cash),
            "Asset" => Some(Self::Asset),
            "Senex" => Some(Self::Senex),
            "Liability" => Some(Self::Liability),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Monthly,
    Yearly,
    Weekly,
}

impl Frequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Weekly => "weekly",
        }
    }

    pub fn parse(value: &str) -> EngineResult<Self> {
        let normalized = value.trim();
        if normalized.eq_ignore_ascii_case("monthly") {
            return Ok(Self::Monthly);
        }
        if normalized.eq_ignore_ascii_case("yearly") {
            return Ok(Self::Yearly);
        }
        if normalized.eq_ignore_ascii_case("weekly") {
            return Ok(Self::Weekly);
        }
        Err(EngineError::unknown_frequency(value))
    }
}
