//! Everything that leaves the program towards the OS: command lines and the processes that run them
pub mod arguments;
pub mod executors;
