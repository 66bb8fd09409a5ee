/// Arithmetic shared by every quantity newtype.
///
/// Sums, differences and scalar scaling keep the unit; dividing two values of the
/// same quantity yields a plain ratio.
macro_rules! quantity {
    ($name:ident) => {
        impl $name {
            /// True when the value is finite and not negative
            pub fn is_physical(&self) -> bool {
                self.0.is_finite() && self.0 >= 0.0
            }
        }

        impl std::ops::Add for $name {
            type Output = $name;

            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl std::ops::Sub for $name {
            type Output = $name;

            fn sub(self, rhs: $name) -> $name {
                $name(self.0 - rhs.0)
            }
        }

        impl std::ops::Mul<f64> for $name {
            type Output = $name;

            fn mul(self, rhs: f64) -> $name {
                $name(self.0 * rhs)
            }
        }

        impl std::ops::Mul<$name> for f64 {
            type Output = $name;

            fn mul(self, rhs: $name) -> $name {
                rhs * self
            }
        }

        impl std::ops::Div<f64> for $name {
            type Output = $name;

            fn div(self, rhs: f64) -> $name {
                $name(self.0 / rhs)
            }
        }

        impl std::ops::Div for $name {
            type Output = f64;

            fn div(self, rhs: $name) -> f64 {
                self.0 / rhs.0
            }
        }
    };
}

pub(crate) use quantity;
