//! Configuration module

mod site;

pub use site::BuildConfig;
pub use site::NavLink;
pub use site::SiteConfig;
pub use site::CONFIG_FILE;
