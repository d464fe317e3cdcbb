//! Complex number value types.

/// A complex number stored as two IEEE-754 singles, real then imaginary.
///
/// Encoded width: 8 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Complex64 {
    pub re: f32,
    pub im: f32,
}

impl Complex64 {
    pub fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }
}

/// A complex number stored as two IEEE-754 doubles, real then imaginary.
///
/// Encoded width: 16 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Complex128 {
    pub re: f64,
    pub im: f64,
}

impl Complex128 {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}
