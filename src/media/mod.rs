pub mod collection;
pub mod intake;
pub mod normalize;
pub mod store;
