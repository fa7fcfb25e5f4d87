use moonlight::*;

mod color;
mod config;
mod mount;
mod routes;

pub use color::Color;
pub use config::{AppConfig, BASE_PATH, MOUNT_ELEMENT_ID};
pub use mount::{MountBinder, MountError, MountHost, MountState};
pub use routes::{
    EventId, Params, RouteMatch, RouteNode, RoutePattern, RouteTree, ViewKind, EVENT_ID_PARAM,
};

// ------ UpMsg ------

#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "serde")]
pub enum UpMsg {
    LoadColors,
}

// ------ DownMsg ------

#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "serde")]
pub enum DownMsg {
    ColorsLoaded(Vec<Color>),
}
