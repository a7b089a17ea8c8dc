pub mod gallows;
pub mod session;
pub mod words;
