#[cfg(feature = "tracing")]
macro_rules! tv_trace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "tileview", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! tv_trace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! tv_debug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "tileview", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! tv_debug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! tv_warn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "tileview", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! tv_warn {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! tv_error {
    ($($tt:tt)*) => {
        tracing::error!(target: "tileview", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! tv_error {
    ($($tt:tt)*) => {};
}
