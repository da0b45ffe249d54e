pub mod instance;
pub mod play_state;
