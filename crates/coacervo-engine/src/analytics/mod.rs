pub(crate) mod breakdown;
pub mod category;
pub(crate) mod coverage;
pub mod date;
pub(crate) mod group;
pub(crate) mod series;
pub(crate) mod totals;
pub mod types;
pub(crate) mod worth;
