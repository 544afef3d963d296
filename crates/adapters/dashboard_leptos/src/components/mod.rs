mod add_host_form;
mod footer;
mod host_card;
mod loading;
mod nav;
mod power_menu;
mod theme_toggle;
mod toast;
mod upload_iso_form;
mod user_menu;

pub use add_host_form::AddHostForm;
pub use footer::Footer;
pub use host_card::{HostList, HostSpecs, PowerBadge};
pub use loading::{Loading, Spinner};
pub use nav::Nav;
pub use power_menu::PowerMenu;
pub use theme_toggle::{Logo, ThemeToggle, provide_theme};
pub use toast::{ToastContainer, use_toasts};
pub use upload_iso_form::UploadIsoForm;
pub use user_menu::UserMenu;
