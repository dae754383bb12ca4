mod cell;
mod last_tab;
mod storage;

pub use cell::*;
pub use last_tab::*;
pub use storage::*;
