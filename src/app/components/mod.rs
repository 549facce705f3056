//! Shared UI components.

pub mod layout;
pub mod nav;
pub mod profile_dropdown;

pub use layout::Layout;
pub use nav::Nav;
pub use profile_dropdown::{use_profile_menu, ProfileDropdown, ProfileMenu, ProfileMenuView};
