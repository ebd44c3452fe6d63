use std::sync::atomic::{AtomicBool, Ordering};

/// Raised while a prompt is blocked on the user.
static INPUT_PROMPT_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Run `read` with the input-prompt flag raised. The flag is restored
/// when `read` returns, including on panic.
pub fn with_input_prompt<T>(read: impl FnOnce() -> T) -> T {
    struct Reset;
    impl Drop for Reset {
        fn drop(&mut self) {
            INPUT_PROMPT_ACTIVE.store(false, Ordering::SeqCst);
        }
    }

    INPUT_PROMPT_ACTIVE.store(true, Ordering::SeqCst);
    let _reset = Reset;
    read()
}

/// Returns true while `with_input_prompt` is waiting on the user. A
/// SIGINT in this window is a user cancellation, not a mid-operation
/// abort.
pub fn input_prompt_active() -> bool {
    INPUT_PROMPT_ACTIVE.load(Ordering::SeqCst)
}
