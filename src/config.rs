//! Site-wide constants: identity, contact details and timings.

pub const SITE_NAME: &str = "RCCG 360 Degrees Youth Church";
pub const SHORT_NAME: &str = "360 DYC";
pub const TAGLINE: &str = "A full-circle experience of God's love, power, and purpose.";

pub const LOGO_URL: &str =
    "https://res.cloudinary.com/dph4emzfu/image/upload/v1751022640/rccg_logo_tosbsv.jpg";

pub const SERVICE_TIME: &str = "Sundays, 10:00 AM";
pub const SERVICE_BANNER: &str = "Sunday Service: 10:00 AM";
pub const LOCATION_SHORT: &str = "The Youth Place, Lekki Phase 1";
pub const LOCATION_FULL: &str = "The Youth Place, Lekki Phase 1, Lagos, Nigeria";
pub const PHONE: &str = "+234 800 123 4567 (Mon-Fri, 9am-5pm)";
pub const EMAIL: &str = "info@rccg360dyc.org";

pub const CAROUSEL_INTERVAL_MS: u32 = 7_000;
pub const REDIRECT_DELAY_MS: u32 = 2_000;
pub const TOAST_MS: u32 = 2_500;

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
