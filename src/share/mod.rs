// share/mod.rs - Share extension screens

pub mod servers;

pub use servers::{
    IndexPath, Server, ServerCell, ServersViewModel, ShareAction, ShareStore, Transition,
};
