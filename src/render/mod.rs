pub mod countdown;
pub mod description;
pub mod detail;
pub mod grid;
pub mod html;
pub mod profile;

pub use countdown::{time_remaining, TimeRemaining};
pub use description::DescriptionToggle;
pub use detail::{render_detail, ListingDetail};
pub use grid::{grid_html, render_grid, ListingCard};
pub use profile::{render_profile, ProfileView};
