pub mod command;
pub mod controller;
pub mod domain;
pub mod events;
pub mod library;
pub mod lock;
pub mod repository;
