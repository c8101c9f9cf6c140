pub mod discovery;
pub mod nmap;
pub mod normalize;
pub mod profile;
pub mod range;
pub mod scanner;
pub mod vendors;
