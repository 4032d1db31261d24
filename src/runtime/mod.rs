pub mod cors;
pub mod lifetime;
pub mod logging;
