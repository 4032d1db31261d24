pub mod enums;
pub mod response;

pub(crate) use enums::define_string_enum;
