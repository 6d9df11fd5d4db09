use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::picker::DatePicker;

pub type OutsideClickHandler = Box<dyn Fn() + Send + Sync>;

/// Capability the host UI provides for observing clicks outside the
/// dropdown. The registration lives exactly as long as the returned guard.
pub trait OutsideClick {
    fn register(&self, on_outside: OutsideClickHandler) -> OutsideClickGuard;
}

/// Releases an outside-click registration when dropped, so a dropdown that
/// closes (or is itself dropped) can never leave a listener behind.
pub struct OutsideClickGuard {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl OutsideClickGuard {
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for OutsideClickGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// The calendar dropdown of the search form: a [`DatePicker`] plus
/// open/closed state wired to the host's outside-click capability.
pub struct CalendarDropdown {
    picker: DatePicker,
    open: Arc<AtomicBool>,
    guard: Option<OutsideClickGuard>,
}

impl CalendarDropdown {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            picker: DatePicker::new(today),
            open: Arc::new(AtomicBool::new(false)),
            guard: None,
        }
    }

    pub fn picker(&self) -> &DatePicker {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut DatePicker {
        &mut self.picker
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Opens the dropdown and acquires an outside-click registration from
    /// the host. An outside click only flips the open flag; the host calls
    /// [`Self::poll`] on its next pass to release the registration.
    pub fn open(&mut self, host: &dyn OutsideClick) {
        if self.is_open() {
            return;
        }

        self.open.store(true, Ordering::SeqCst);
        let open = Arc::clone(&self.open);
        self.guard = Some(host.register(Box::new(move || {
            debug!("Outside click, closing calendar dropdown");
            open.store(false, Ordering::SeqCst);
        })));
    }

    pub fn close(&mut self) {
        self.open.store(false, Ordering::SeqCst);
        self.guard = None;
    }

    pub fn toggle(&mut self, host: &dyn OutsideClick) {
        if self.is_open() {
            self.close();
        } else {
            self.open(host);
        }
    }

    /// Reconciles state after host events; returns whether the dropdown is
    /// open. Dropping the guard here is what deregisters a listener whose
    /// outside click closed us.
    pub fn poll(&mut self) -> bool {
        if !self.is_open() {
            self.guard = None;
        }
        self.is_open()
    }

    /// Forwards a day click to the picker. A successful selection emits the
    /// ISO date and closes the dropdown, mirroring the search form.
    pub fn select(&mut self, date: NaiveDate) -> Option<String> {
        let emitted = self.picker.select(date);
        if emitted.is_some() {
            self.close();
        }
        emitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Test host that tracks live registrations and lets tests fire the
    /// outside-click handler by hand.
    #[derive(Default)]
    struct FakeHost {
        active: Arc<Mutex<usize>>,
        handlers: Mutex<Vec<OutsideClickHandler>>,
    }

    impl FakeHost {
        fn active_registrations(&self) -> usize {
            *self.active.lock().unwrap()
        }

        fn click_outside(&self) {
            for handler in self.handlers.lock().unwrap().iter() {
                handler();
            }
        }
    }

    impl OutsideClick for FakeHost {
        fn register(&self, on_outside: OutsideClickHandler) -> OutsideClickGuard {
            *self.active.lock().unwrap() += 1;
            self.handlers.lock().unwrap().push(on_outside);
            let active = Arc::clone(&self.active);
            OutsideClickGuard::new(move || {
                *active.lock().unwrap() -= 1;
            })
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_open_acquires_and_close_releases() {
        let host = FakeHost::default();
        let mut dropdown = CalendarDropdown::new(date(2026, 8, 5));

        dropdown.open(&host);
        assert!(dropdown.is_open());
        assert_eq!(host.active_registrations(), 1);

        dropdown.close();
        assert!(!dropdown.is_open());
        assert_eq!(host.active_registrations(), 0);
    }

    #[test]
    fn test_outside_click_closes_after_poll() {
        let host = FakeHost::default();
        let mut dropdown = CalendarDropdown::new(date(2026, 8, 5));

        dropdown.open(&host);
        host.click_outside();

        assert!(!dropdown.poll());
        assert_eq!(host.active_registrations(), 0);
    }

    #[test]
    fn test_selection_closes_and_releases() {
        let host = FakeHost::default();
        let mut dropdown = CalendarDropdown::new(date(2026, 8, 5));

        dropdown.open(&host);
        let emitted = dropdown.select(date(2026, 8, 10));

        assert_eq!(emitted, Some("2026-08-10".to_string()));
        assert!(!dropdown.is_open());
        assert_eq!(host.active_registrations(), 0);
    }

    #[test]
    fn test_rejected_selection_keeps_dropdown_open() {
        let host = FakeHost::default();
        let mut dropdown = CalendarDropdown::new(date(2026, 8, 5));

        dropdown.open(&host);
        assert_eq!(dropdown.select(date(2026, 8, 1)), None);
        assert!(dropdown.is_open());
        assert_eq!(host.active_registrations(), 1);
    }

    #[test]
    fn test_drop_releases_registration() {
        let host = FakeHost::default();
        {
            let mut dropdown = CalendarDropdown::new(date(2026, 8, 5));
            dropdown.open(&host);
            assert_eq!(host.active_registrations(), 1);
        }
        assert_eq!(host.active_registrations(), 0);
    }

    #[test]
    fn test_reopening_after_toggle() {
        let host = FakeHost::default();
        let mut dropdown = CalendarDropdown::new(date(2026, 8, 5));

        dropdown.toggle(&host);
        assert!(dropdown.is_open());
        dropdown.toggle(&host);
        assert!(!dropdown.is_open());
        dropdown.toggle(&host);
        assert!(dropdown.is_open());
        assert_eq!(host.active_registrations(), 1);
    }
}
