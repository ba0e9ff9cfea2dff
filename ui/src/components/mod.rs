mod icons;
pub use icons::{BalloonIcon, SealQuestionIcon, TimelineIcon};

mod nav_element;
pub use nav_element::NavElement;

mod navbar;
pub use navbar::{NavTarget, Navbar};

mod locale_switcher;
pub use locale_switcher::LocaleSwitcher;
