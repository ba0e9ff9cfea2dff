mod landing;
pub use landing::Landing;

mod not_found;
pub use not_found::{attempted_path, NotFound};
