pub mod confirm_dialog;
pub mod empty_state;
pub mod guard;
pub mod layout;
pub mod modal;
pub mod toast;
