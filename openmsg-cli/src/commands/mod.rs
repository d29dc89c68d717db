pub mod decode;
pub mod describe;
pub mod example;
pub mod swap;
