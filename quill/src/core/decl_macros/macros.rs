// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just syntactic
/// sugar that helps having to write `Ok(())` repeatedly.
///
/// ```
/// use quill::{CommonResult, TextFile, throws};
///
/// fn count_lines(bytes: &[u8], out: &mut usize) -> CommonResult<()> {
///     throws!({
///         *out = TextFile::from_bytes(bytes).line_count();
///     });
/// }
///
/// let mut count = 0;
/// count_lines(b"a\nb", &mut count).unwrap();
/// assert_eq!(count, 2);
/// ```
#[macro_export]
macro_rules! throws {
    ($it: block) => {{
        $it
        return Ok(())
    }};
    ($it: stmt) => {{
        $it
        return Ok(())
    }};
}

/// Syntactic sugar to run a conditional statement. Here's an example.
///
/// ```
/// const DEBUG: bool = true;
/// quill::call_if_true!(DEBUG, tracing::debug!(message = "debug is on"));
/// ```
#[macro_export]
macro_rules! call_if_true {
    ($cond:ident, $block: expr) => {{
        if $cond {
            $block
        }
    }};
}

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
