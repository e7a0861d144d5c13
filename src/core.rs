pub mod aggregate;
pub mod assemble;
pub mod order;
pub mod point;
pub mod sort;
pub mod window;
pub mod zone;
