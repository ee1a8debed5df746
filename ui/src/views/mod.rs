mod home;
mod meters;
mod monitor;
mod peak_valley;

pub use home::Home;
pub use meters::MeterManage;
pub use monitor::MonitorData;
pub use peak_valley::PeakValley;
