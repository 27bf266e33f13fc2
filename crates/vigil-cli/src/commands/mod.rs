pub mod conditions;
pub mod initiative;
pub mod roll;
