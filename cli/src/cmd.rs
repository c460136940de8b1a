pub mod benchmark;
pub mod decode;
pub mod encode;
pub mod random;
