mod license_resolution;

pub use license_resolution::{LicenseResolution, UNKNOWN_LICENSE};
