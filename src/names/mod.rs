use self::validation::{validate_bus_name, validate_interface, validate_member};
mod validation;

pub use self::name_error::NameError;
mod name_error;

pub use self::interface_name::InterfaceName;
mod interface_name;

pub use self::member_name::MemberName;
mod member_name;

pub use self::error_name::ErrorName;
mod error_name;

pub use self::bus_name::BusName;
mod bus_name;


/// The maximum length in bytes of an interface, member, error, or bus name.
pub const MAX_NAME: usize = 255;
