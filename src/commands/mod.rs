pub mod add;
pub mod categories;
pub mod delete;
pub mod edit;
pub mod list;
pub mod seed;
pub mod show;

pub use add::*;
pub use categories::*;
pub use delete::*;
pub use edit::*;
pub use list::*;
pub use seed::*;
pub use show::*;
