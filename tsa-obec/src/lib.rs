pub mod coordinate;
pub mod feed;
pub mod province;
