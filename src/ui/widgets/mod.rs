pub mod progress;
pub mod score_bar;
pub mod select_list;
pub mod spinner;
pub mod text_input;

pub use progress::StepIndicatorWidget;
pub use score_bar::ScoreBarWidget;
pub use select_list::{SelectList, SelectListWidget};
pub use spinner::{Spinner, SpinnerWidget};
pub use text_input::{TextInput, TextInputWidget};
