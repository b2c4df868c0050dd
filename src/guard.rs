/// Precondition check for the unchecked fast paths.
/// Debug builds only by default; the `paranoid` feature keeps it in release.
#[cfg(not(feature = "paranoid"))]
macro_rules! precondition {
    ($($arg:tt)*) => { debug_assert!($($arg)*) }
}

#[cfg(feature = "paranoid")]
macro_rules! precondition {
    ($($arg:tt)*) => { assert!($($arg)*) }
}

pub(crate) use precondition;
