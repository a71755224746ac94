use std::fmt;

use crate::{Rational, RationalInt};

// Rendered in full first so width, fill and alignment apply to the whole value.
impl<T: RationalInt> fmt::Display for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if self.is_infinite() {
            if self.is_negative() {
                String::from("-Inf")
            } else {
                String::from("Inf")
            }
        } else if self.is_nan() {
            String::from("NaN")
        } else if self.is_integer() {
            self.numer().to_string()
        } else {
            format!("{}/{}", self.numer(), self.denom())
        };

        f.pad(&text)
    }
}
