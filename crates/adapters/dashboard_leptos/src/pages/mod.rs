mod dashboard;
mod host_detail;
mod iso_images;
mod login;
mod not_found;

pub use dashboard::Dashboard;
pub use host_detail::HostDetail;
pub use iso_images::IsoImages;
pub use login::Login;
pub use not_found::NotFound;
