pub mod admin;
pub mod sabre;
pub mod sawtooth;
