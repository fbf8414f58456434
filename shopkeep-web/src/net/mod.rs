pub mod connectivity;
pub mod gate;
