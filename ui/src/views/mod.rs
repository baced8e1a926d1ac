mod event_page;
mod home;

pub use event_page::EventPage;
pub use home::Site;
