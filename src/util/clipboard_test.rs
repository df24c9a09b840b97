#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn copy_without_browser_reports_failure_toast() {
    let owner = Owner::new();
    owner.with(|| {
        let toasts = RwSignal::new(ToastState::default());
        copy_to_clipboard("p1".to_owned(), toasts);
        let state = toasts.get_untracked();
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].message, COPY_FAILED_MESSAGE);
        assert_eq!(state.toasts[0].severity, ToastSeverity::Error);
    });
}
