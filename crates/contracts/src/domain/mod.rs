pub mod binary_choice;
pub mod card_browser;
pub mod contra_section;
pub mod feedback;
pub mod keyboard;
pub mod tab_set;
