mod error;
mod platform;
mod result;

pub use error::{SongbridgeError, SongbridgeResult};
pub use platform::Platform;
pub use result::{ConvertRequest, ConvertResponse, ConvertStatus};
