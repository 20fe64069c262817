mod archive;
mod unzip;

pub use archive::{install, InstallOutcome};
pub use unzip::unzip_into;
