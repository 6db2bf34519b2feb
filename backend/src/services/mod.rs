pub mod assets;
pub mod proxy;
