mod individual;
mod last_change;
mod region;
mod staff;

pub use individual::Individual;
pub use last_change::LastChange;
pub use region::Region;
pub use staff::Staff;
