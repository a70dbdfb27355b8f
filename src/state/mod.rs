mod persistence;
mod store;

pub use persistence::{add_to_library, library_or_builtin, load_library, save_library};
pub use store::{GoalStore, JsonGoalStore, MemoryGoalStore};
