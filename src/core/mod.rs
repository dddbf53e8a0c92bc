pub mod currency;
pub mod date;
pub mod id;
