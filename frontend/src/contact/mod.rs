pub mod flow;
pub mod intake;
pub mod request;
