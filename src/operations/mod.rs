// Operations module
// Execution of gateway requests issued by pages

pub mod dispatch;

pub use dispatch::Dispatcher;
