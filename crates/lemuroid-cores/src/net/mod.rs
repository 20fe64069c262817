mod download;

pub use download::{core_url, download_to_path, http_client};
