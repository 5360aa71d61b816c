//! Small styled building blocks shared by the views.

mod button;
pub use button::{Button, ButtonVariant};

mod switch;
pub use switch::Switch;

mod spinner;
pub use spinner::Spinner;
