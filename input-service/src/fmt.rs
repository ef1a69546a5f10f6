//! Logging macros routed to `defmt` or `log`, whichever backend feature is enabled

#[cfg(all(feature = "log", feature = "defmt", not(doc)))]
compile_error!("features `log` and `defmt` are mutually exclusive");

/// Backend dispatch shared by the level macros
#[cfg(all(not(doc), feature = "defmt"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($level:ident, $s:literal $(, $x:expr)*) => {
        {
            ::defmt::$level!($s $(, $x)*);
        }
    };
}

/// Backend dispatch shared by the level macros
#[cfg(all(not(doc), feature = "log"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($level:ident, $s:literal $(, $x:expr)*) => {
        {
            ::log::$level!($s $(, $x)*);
        }
    };
}

// No backend: arguments are still borrowed so call sites type-check the same way
#[cfg(any(doc, not(any(feature = "defmt", feature = "log"))))]
#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($level:ident, $s:literal $(, $x:expr)*) => {
        {
            let _ = ($( & $x ),*);
        }
    };
}

/// Logs a trace message using the underlying logger
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        $crate::__log!(trace, $s $(, $x)*)
    };
}

/// Logs a debug message using the underlying logger
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        $crate::__log!(debug, $s $(, $x)*)
    };
}

/// Logs an info message using the underlying logger
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {
        $crate::__log!(info, $s $(, $x)*)
    };
}

/// Logs a warning using the underlying logger
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        $crate::__log!(warn, $s $(, $x)*)
    };
}

/// Logs an error using the underlying logger
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! error {
    ($s:literal $(, $x:expr)* $(,)?) => {
        $crate::__log!(error, $s $(, $x)*)
    };
}
