//! Host star luminosity and habitable-zone boundaries.

pub mod habitable_zone;
pub mod host_star;


pub use habitable_zone::{HabitableZone, UnknownZoneModel, ZoneModel};
pub use host_star::{HostStar, luminosity_from_radius_temperature};
