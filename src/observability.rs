//! This module provides observability and diagnostics capabilities for the codec.
//!
//! The engine makes a handful of decisions that are invisible in the output
//! bytes (forest merge order, code lengths, padding). This module provides a
//! structured logging hook to make that behavior transparent and debuggable.
//! The `log_metric!` macro is the primary tool.
//!
//! It is a zero-cost abstraction: the `#[cfg(debug_assertions)]` attribute ensures
//! that the macro and all calls to it are completely compiled out of release builds,
//! imposing no performance penalty in production.

/// Logs a structured key-value metric string to stdout, only in debug builds.
///
/// # Example
/// ```
/// use huffpuff::log_metric;
/// let symbols = 42;
/// log_metric!("event"="tally", "distinct_symbols"=&symbols);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            let output = format!("HUFFPUFF_METRIC: {{ {} }}", parts.join(", "));
            println!("{}", output);
        }
    };
}
