#[macro_export]
macro_rules! expect {
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(t) => t,
            Err(why) => {
                panic!("{}: {}", $msg, why);
            }
        }
    };
}

// Crate-local log macros, all logged under the "glint" target

#[macro_export]
macro_rules! glint_error {
    ($($arg:tt)+) => {
        $crate::log::error!(target: "glint", $($arg)+)
    };
}

#[macro_export]
macro_rules! glint_warn {
    ($($arg:tt)+) => {
        $crate::log::warn!(target: "glint", $($arg)+)
    };
}

#[macro_export]
macro_rules! glint_info {
    ($($arg:tt)+) => {
        $crate::log::info!(target: "glint", $($arg)+)
    };
}

#[macro_export]
macro_rules! glint_debug {
    ($($arg:tt)+) => {
        $crate::log::debug!(target: "glint", $($arg)+)
    };
}

#[macro_export]
macro_rules! glint_trace {
    ($($arg:tt)+) => {
        $crate::log::trace!(target: "glint", $($arg)+)
    };
}
