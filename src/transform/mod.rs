/// String transforms applied to variable data before emission.
pub mod normalize;
pub mod ottl;

pub use normalize::to_payload_string;
pub use ottl::ottl_escape;
