//! AVTransport actions
//!
//! One typed value per action, each carrying only the arguments that action
//! takes. `InstanceID` is always 0.

mod get_position_info;
mod get_transport_info;
mod pause;
mod play;
mod set_av_transport_uri;
mod stop;

pub use get_position_info::GetPositionInfo;
pub use get_transport_info::GetTransportInfo;
pub use pause::Pause;
pub use play::Play;
pub use set_av_transport_uri::{SetAvTransportUri, SetNextAvTransportUri};
pub use stop::Stop;
