mod event;
mod execom;
mod leaderboard;
mod loaded;
mod student;

pub use event::*;
pub use execom::*;
pub use leaderboard::*;
pub use loaded::*;
pub use student::*;
