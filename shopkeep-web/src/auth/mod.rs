pub mod guard;
pub mod protected;
