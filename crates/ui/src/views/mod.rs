mod about;
mod contact;
mod footer;
mod hero;
mod nav;
mod not_found;
mod page;
mod projects;
mod scripts;
mod tracker;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use nav::NavBar;
pub use not_found::NotFoundView;
pub use page::PortfolioPage;
pub use projects::ProjectsSection;
pub use tracker::{TrackerView, use_viewport_tracker};
