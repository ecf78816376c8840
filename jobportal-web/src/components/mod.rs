pub(crate) mod loading;
pub(crate) mod opportunity_card;
pub(crate) mod profile_dialog;
pub(crate) mod user_dropdown;
