pub mod config;
pub mod deps;
pub mod describe;
pub mod list;
pub mod run;
pub mod serve;
pub mod shell;
