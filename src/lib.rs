pub mod application_state;
pub mod consts;
pub mod model;
pub mod service;
pub mod settings;

pub mod pb {
    include!("flow.rs");
}
