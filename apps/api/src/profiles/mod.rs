// Student profiles: class level, stream and district drive the quiz and college directory.

pub mod handlers;
pub mod repository;
