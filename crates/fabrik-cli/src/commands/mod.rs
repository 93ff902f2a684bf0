pub mod lookup;
pub mod process;
