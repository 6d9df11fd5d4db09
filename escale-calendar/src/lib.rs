pub mod dropdown;
pub mod grid;
pub mod picker;

pub use dropdown::{CalendarDropdown, OutsideClick, OutsideClickGuard, OutsideClickHandler};
pub use grid::{month_grid, CalendarDay, MonthCursor, GRID_DAYS, GRID_WEEKS};
pub use picker::{month_label, DatePicker, WEEKDAYS};
