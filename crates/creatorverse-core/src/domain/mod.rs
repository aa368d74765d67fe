pub mod creator;
pub mod ids;
pub mod platform;

pub use creator::{Creator, CreatorChanges};
pub use ids::CreatorId;
pub use platform::Platform;
