pub mod finalist;
pub mod staff;
