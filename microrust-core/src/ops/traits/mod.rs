pub mod numeric;

pub use numeric::MicroNumeric;
