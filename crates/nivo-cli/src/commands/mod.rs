pub mod fetch;
pub mod massifs;
pub mod resolve;
