pub mod action;
pub mod customer;
pub mod draft;
pub mod event;
pub mod handoff;
pub mod objective;
pub mod offer;
pub mod task;
