//! UI Components
//!
//! Leptos components for the scoreboard pages.

mod add_listing_button;
mod delete_confirm_popup;
mod listing_list;
mod listing_row;
mod login_form;
mod scoreboard_title;
mod scoreboard_view;

pub use add_listing_button::AddListingButton;
pub use delete_confirm_popup::DeleteConfirmPopup;
pub use listing_list::ListingList;
pub use listing_row::ListingRow;
pub use login_form::LoginForm;
pub use scoreboard_title::ScoreboardTitle;
pub use scoreboard_view::ScoreboardView;
