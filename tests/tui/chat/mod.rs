mod dialog_tests;
mod input_tests;
mod render_tests;
mod scroll_tests;
mod state_tests;
