pub mod college;
pub mod quiz;
pub mod roadmap;
pub mod user;
