mod mock_transport;
mod reqwest_transport;

pub use mock_transport::*;
pub use reqwest_transport::*;
